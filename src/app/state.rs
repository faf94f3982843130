//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It separates core data (the catalog) from derived state (the
//! filtered products, the current page, the selected row) and keeps the two
//! consistent through a small set of transitions:
//!
//! - applied query changed → recompute the filtered set, reset to page 1
//! - catalog edited → recompute the filtered set, clamp the page
//! - page or view changed → nothing to recompute
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::AppState;
//! use zcatalog::catalog::Catalog;
//! use zcatalog::ui::Theme;
//!
//! let state = AppState::new(Catalog::empty(), Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.total, "Total Products: 0");
//! ```

use super::context::ViewContext;
use super::modes::{InputMode, ViewMode};
use crate::catalog::{filter_by_name, match_range, Catalog, Paginator, SearchFilter};
use crate::domain::error::Result;
use crate::domain::product::{Product, ProductId};
use crate::form::{FormField, FormMode, ProductForm};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, FormFieldView, FormView, HeaderInfo, PaginationInfo,
    SearchBarInfo, UIViewModel,
};
use std::time::Duration;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and timer
/// expiries. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Working set of products, in insertion order.
    pub catalog: Catalog,

    /// Typed search text and the debounced, applied query.
    pub search: SearchFilter,

    /// Products whose name matches the applied query, in catalog order.
    ///
    /// Recomputed by `recompute_filtered()` after every catalog edit or
    /// query change.
    pub filtered: Vec<Product>,

    /// Current page over `filtered`.
    pub paginator: Paginator,

    /// Table or grid rendering.
    pub view: ViewContext,

    /// Open add/edit form, if any.
    pub form: Option<ProductForm>,

    pub input_mode: InputMode,

    /// Zero-based cursor within the current page.
    ///
    /// Reset to the first row whenever the page changes; wraps around during
    /// navigation.
    pub selected_row: usize,

    pub theme: Theme,

    /// Message about the last successful commit.
    pub notice: Option<String>,
}

impl AppState {
    /// Creates the state for a freshly loaded catalog with default settings.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            search: SearchFilter::default(),
            filtered: vec![],
            paginator: Paginator::default(),
            view: ViewContext::default(),
            form: None,
            input_mode: InputMode::Normal,
            selected_row: 0,
            theme,
            notice: None,
        };
        state.recompute_filtered();
        state
    }

    /// Replaces the page size. A size of zero falls back to the default.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator = Paginator::new(page_size);
        self.selected_row = 0;
        self
    }

    /// Replaces the search debounce interval.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.search = SearchFilter::new(delay);
        self
    }

    #[must_use]
    pub fn with_view(mut self, mode: ViewMode) -> Self {
        self.view = ViewContext::new(mode);
        self
    }

    /// Products on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[Product] {
        &self.filtered[self.paginator.bounds(self.filtered.len())]
    }

    /// The product under the cursor, if the page has any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.page_items().get(self.selected_row)
    }

    /// Moves the cursor down one row, wrapping to the top of the page.
    ///
    /// Returns `false` if the page is empty.
    pub fn move_selection_down(&mut self) -> bool {
        let count = self.page_items().len();
        if count == 0 {
            return false;
        }
        self.selected_row = (self.selected_row + 1) % count;
        true
    }

    /// Moves the cursor up one row, wrapping to the bottom of the page.
    ///
    /// Returns `false` if the page is empty.
    pub fn move_selection_up(&mut self) -> bool {
        let count = self.page_items().len();
        if count == 0 {
            return false;
        }
        self.selected_row = if self.selected_row == 0 {
            count - 1
        } else {
            self.selected_row - 1
        };
        true
    }

    /// Advances to the next page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let moved = self.paginator.next_page(self.filtered.len());
        if moved {
            self.selected_row = 0;
        }
        moved
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.paginator.prev_page();
        if moved {
            self.selected_row = 0;
        }
        moved
    }

    /// Recomputes the filtered set from the catalog and the applied query.
    ///
    /// The current page is clamped, never reset.
    pub fn recompute_filtered(&mut self) {
        let _span = tracing::debug_span!(
            "recompute_filtered",
            total_products = self.catalog.len(),
            query = %self.search.applied()
        )
        .entered();

        self.filtered = filter_by_name(self.catalog.products(), self.search.applied())
            .into_iter()
            .cloned()
            .collect();

        if self.paginator.clamp(self.filtered.len()) {
            self.selected_row = 0;
        }
        self.clamp_selection();
    }

    /// Reacts to a new applied query: refilters and returns to page 1.
    pub fn on_query_applied(&mut self) {
        self.recompute_filtered();
        self.paginator.reset();
        self.selected_row = 0;
    }

    /// Opens an empty add form.
    pub fn open_create_form(&mut self) {
        tracing::debug!(next_id = %self.catalog.next_id(), "opening add form");
        self.form = Some(ProductForm::create());
        self.input_mode = InputMode::Form;
    }

    /// Opens an edit form for the selected product.
    ///
    /// Returns `false` if nothing is selected.
    pub fn open_edit_form(&mut self) -> bool {
        let Some(product) = self.selected_product() else {
            tracing::debug!("no product selected to edit");
            return false;
        };
        tracing::debug!(product_id = %product.id, "opening edit form");
        self.form = Some(ProductForm::edit(product));
        self.input_mode = InputMode::Form;
        true
    }

    /// Validates and commits the open form.
    ///
    /// On success the form is closed and the id of the created or updated
    /// product is returned. Returns `Ok(None)` if no form is open.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`](crate::domain::CatalogError::Validation)
    /// when the draft is invalid; the form stays open showing the messages.
    /// Returns [`CatalogError::NotFound`](crate::domain::CatalogError::NotFound)
    /// if the edited product no longer exists, and
    /// [`CatalogError::IdsExhausted`](crate::domain::CatalogError::IdsExhausted)
    /// if no id is left for a new product.
    pub fn submit_form(&mut self) -> Result<Option<ProductId>> {
        let Some(form) = self.form.as_mut() else {
            return Ok(None);
        };

        let fields = form.submit()?;
        let (id, verb) = match form.mode() {
            FormMode::Create => (self.catalog.create(fields)?.id, "Added"),
            FormMode::Edit(id) => (self.catalog.update(id, fields)?.id, "Updated"),
        };

        tracing::info!(product_id = %id, action = verb, "product committed");
        self.form = None;
        self.input_mode = InputMode::Normal;
        self.notice = Some(format!("{verb} product #{id}"));
        self.recompute_filtered();
        Ok(Some(id))
    }

    /// Discards the open form. Returns `false` if none was open.
    pub fn cancel_form(&mut self) -> bool {
        if self.form.take().is_none() {
            return false;
        }
        tracing::debug!("form canceled");
        self.input_mode = InputMode::Normal;
        true
    }

    fn clamp_selection(&mut self) {
        let count = self.page_items().len();
        self.selected_row = self.selected_row.min(count.saturating_sub(1));
    }

    /// Computes a renderable UI view model from current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let query = self.search.applied();

        let display_items = self
            .page_items()
            .iter()
            .enumerate()
            .map(|(row, product)| self.compute_display_item(product, row, query))
            .collect();

        let empty_state = self.filtered.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            header: HeaderInfo {
                title: " Product Catalog ".to_string(),
                total: format!("Total Products: {}", self.filtered.len()),
            },
            search_bar: self.compute_search_bar(),
            view_mode: self.view.mode(),
            display_items,
            empty_state,
            pagination: self.compute_pagination(),
            form: self.form.as_ref().map(Self::compute_form),
            footer: FooterInfo {
                keybindings: self.compute_keybindings().to_string(),
                notice: self.notice.clone(),
            },
        }
    }

    fn compute_display_item(&self, product: &Product, row: usize, query: &str) -> DisplayItem {
        DisplayItem {
            id: format!("#{}", product.id),
            name: product.name.clone(),
            price: product.display_price(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
            is_selected: row == self.selected_row,
            highlight_ranges: match_range(&product.name, query).into_iter().collect(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.catalog.is_empty() {
            EmptyState {
                message: "No products yet".to_string(),
                subtitle: "Press a to add one".to_string(),
            }
        } else {
            EmptyState {
                message: "No products found".to_string(),
                subtitle: format!("No product name contains \"{}\"", self.search.applied()),
            }
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let is_focused = self.input_mode == InputMode::Search;
        let active = !self.search.input().is_empty() || !self.search.applied().is_empty();

        (is_focused || active).then(|| SearchBarInfo {
            query: self.search.input().to_string(),
            is_focused,
            is_pending: self.search.is_pending(),
        })
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let current = self.paginator.current();
        let total_pages = self.paginator.last_page(self.filtered.len());
        PaginationInfo {
            current,
            total_pages,
            has_prev: current > 1,
            has_next: current < total_pages,
        }
    }

    fn compute_form(form: &ProductForm) -> FormView {
        let fields = FormField::ALL
            .iter()
            .map(|&field| FormFieldView {
                label: field.label().to_string(),
                value: form.draft().field(field).to_string(),
                is_required: field.is_required(),
                is_focused: form.focus() == field,
                error: form.errors().get(field).map(str::to_string),
            })
            .collect();

        FormView {
            title: form.title().to_string(),
            submit_label: form.submit_label().to_string(),
            fields,
        }
    }

    const fn compute_keybindings(&self) -> &'static str {
        match self.input_mode {
            InputMode::Normal => {
                "j/k: row  h/l: page  /: search  a: add  e: edit  t/g: table/grid  q: quit"
            }
            InputMode::Search => "Type to filter  Enter: results  ESC: clear  Ctrl+n/p: row",
            InputMode::Form => "Tab/Up/Down: field  Enter: submit  ESC: cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CatalogError;
    use crate::domain::product::ProductFields;

    fn product(id: u32, name: &str) -> Product {
        Product::from_fields(
            ProductId(id),
            ProductFields {
                name: name.to_string(),
                price: f64::from(id),
                category: "Misc".to_string(),
                stock: 1,
                description: String::new(),
            },
        )
    }

    fn state_with(count: u32) -> AppState {
        let products = (1..=count).map(|i| product(i, &format!("Item {i}"))).collect();
        AppState::new(Catalog::new(products).unwrap(), Theme::default())
    }

    fn type_into_form(state: &mut AppState, text: &str) {
        let form = state.form.as_mut().unwrap();
        text.chars().for_each(|c| form.push_char(c));
    }

    #[test]
    fn selection_wraps_within_page() {
        let mut state = state_with(7);
        assert!(state.move_selection_up());
        assert_eq!(state.selected_row, 4);
        assert!(state.move_selection_down());
        assert_eq!(state.selected_row, 0);

        assert!(state.next_page());
        assert_eq!(state.page_items().len(), 2);
        state.move_selection_up();
        assert_eq!(state.selected_product().unwrap().id, ProductId(7));
    }

    #[test]
    fn page_change_resets_selection() {
        let mut state = state_with(12);
        state.move_selection_down();
        state.move_selection_down();

        assert!(state.next_page());
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.selected_product().unwrap().id, ProductId(6));
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.paginator.current(), 3);
    }

    #[test]
    fn add_appends_with_next_id_and_keeps_page() {
        let mut state = state_with(12);
        state.next_page();
        state.open_create_form();
        type_into_form(&mut state, "Tea");
        state.form.as_mut().unwrap().focus_next();
        type_into_form(&mut state, "3");
        state.form.as_mut().unwrap().focus_next();
        type_into_form(&mut state, "Drinks");

        let id = state.submit_form().unwrap();

        assert_eq!(id, Some(ProductId(13)));
        assert!(state.form.is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.paginator.current(), 2);
        assert_eq!(state.filtered.last().unwrap().name, "Tea");
        assert_eq!(state.notice.as_deref(), Some("Added product #13"));
    }

    #[test]
    fn invalid_submit_keeps_form_open() {
        let mut state = state_with(3);
        state.open_create_form();

        let err = state.submit_form().unwrap_err();

        assert!(matches!(err, CatalogError::Validation(ref e) if e.len() == 3));
        assert!(state.form.is_some());
        assert_eq!(state.input_mode, InputMode::Form);
        assert_eq!(state.catalog.len(), 3);
    }

    #[test]
    fn edit_preserves_id_and_position() {
        let mut state = state_with(3);
        state.move_selection_down();
        assert!(state.open_edit_form());

        let form = state.form.as_mut().unwrap();
        form.backspace();
        form.push_char('X');
        state.submit_form().unwrap();

        let names: Vec<&str> = state.catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Item 1", "Item X", "Item 3"]);
        assert_eq!(state.catalog.products()[1].id, ProductId(2));
        assert_eq!(state.notice.as_deref(), Some("Updated product #2"));
    }

    #[test]
    fn edit_that_drops_out_of_filter_clamps_page() {
        let mut state = state_with(6);
        state.search.push_char('I');
        assert!(state.search.commit());
        state.on_query_applied();
        assert!(state.next_page());
        assert_eq!(state.selected_product().unwrap().id, ProductId(6));

        state.open_edit_form();
        let form = state.form.as_mut().unwrap();
        for _ in 0.."Item 6".len() {
            form.backspace();
        }
        form.push_char('Z');
        state.submit_form().unwrap();

        assert_eq!(state.filtered.len(), 5);
        assert_eq!(state.paginator.current(), 1);
        assert!(state.selected_product().is_some());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = state_with(2);
        state.open_edit_form();
        type_into_form(&mut state, "junk");

        assert!(state.cancel_form());
        assert!(!state.cancel_form());
        assert_eq!(state.catalog.products()[0].name, "Item 1");
    }

    #[test]
    fn edit_with_empty_page_does_nothing() {
        let mut state = AppState::new(Catalog::empty(), Theme::default());
        assert!(!state.open_edit_form());
        assert!(state.form.is_none());
    }

    #[test]
    fn viewmodel_reflects_page_and_query() {
        let mut state = state_with(12).with_view(ViewMode::Table);
        state.search.push_char('1');
        state.search.commit();
        state.on_query_applied();

        let vm = state.compute_viewmodel();

        assert_eq!(vm.header.total, "Total Products: 4");
        assert_eq!(vm.view_mode, ViewMode::Table);
        assert_eq!(vm.display_items.len(), 4);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(5, 6)]);
        assert_eq!(vm.display_items[0].price, "₹1");
        assert_eq!(vm.pagination.total_pages, 1);
        assert!(!vm.pagination.has_next);
        assert!(vm.search_bar.is_some());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_empty_state_names_query() {
        let mut state = state_with(3);
        "zzz".chars().for_each(|c| {
            state.search.push_char(c);
        });
        state.search.commit();
        state.on_query_applied();

        let vm = state.compute_viewmodel();
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No products found");
        assert!(empty.subtitle.contains("zzz"));
        assert_eq!(vm.pagination.current, 1);
        assert_eq!(vm.pagination.total_pages, 1);
    }

    #[test]
    fn viewmodel_form_marks_errors_and_focus() {
        let mut state = state_with(1);
        state.open_create_form();
        let _ = state.submit_form();

        let form = state.compute_viewmodel().form.unwrap();
        assert_eq!(form.title, "Add Product");
        assert_eq!(form.submit_label, "Add");
        assert_eq!(form.fields.len(), 5);
        assert!(form.fields[0].is_focused);
        assert_eq!(form.fields[0].error.as_deref(), Some("Name is required"));
        assert!(form.fields[4].error.is_none());
    }
}
