//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! formatted prices, highlight ranges, selection flags, and field errors.

use crate::app::modes::ViewMode;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar with the filtered product count.
    pub header: HeaderInfo,

    /// Search box, present while searching or while a query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Which layout draws `display_items`.
    pub view_mode: ViewMode,

    /// Products on the current page.
    pub display_items: Vec<DisplayItem>,

    /// Shown instead of the items when the filtered set is empty.
    pub empty_state: Option<EmptyState>,

    pub pagination: PaginationInfo,

    /// Add/edit form panel, drawn over the list when open.
    pub form: Option<FormView>,

    pub footer: FooterInfo,
}

/// Display information for one product on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Formatted id, e.g. `#7`.
    pub id: String,

    /// Name, truncated to the column width.
    pub name: String,

    /// Price with currency symbol.
    pub price: String,

    pub category: String,

    pub stock: String,

    pub description: String,

    pub is_selected: bool,

    /// Character ranges of `name` matching the applied query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// "Total Products: N", counting the filtered set.
    pub total: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text in the search box.
    pub query: String,

    /// Whether keystrokes currently go to the search box.
    pub is_focused: bool,

    /// Whether the typed text is still waiting to be applied.
    pub is_pending: bool,
}

/// Pagination bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No products found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Add/edit form panel display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// "Add Product" or "Edit Product".
    pub title: String,

    /// "Add" or "Update".
    pub submit_label: String,

    pub fields: Vec<FormFieldView>,
}

/// One labelled input of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_required: bool,
    pub is_focused: bool,
    pub error: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,

    /// Result of the last commit, e.g. "Added product #13".
    pub notice: Option<String>,
}
