//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar and product count
//! - [`search`]: Search input box
//! - [`table`]: Product rows with aligned columns
//! - [`grid`]: Product cards
//! - [`pagination`]: Page indicator with prev/next hints
//! - [`form`]: Add/edit panel with field errors
//! - [`empty`]: Empty state message
//! - [`footer`]: Notice and keybinding hints

mod empty;
mod footer;
mod form;
mod grid;
mod header;
mod pagination;
mod search;
mod table;

pub use grid::cards_per_line;

use crate::app::modes::ViewMode;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_notice};
use form::render_form;
use grid::render_grid;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the product page.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header + total]
/// [Border]
/// [Search Bar - 3 lines, when active]
/// [Form panel | Empty state | Table or Grid]
/// [Pagination]
/// [Notice]
/// [Border]
/// [Footer]
/// ```
///
/// The pagination bar, notice, and footer are anchored to the bottom rows.
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(form) = &vm.form {
        render_form(current_row, form, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        match vm.view_mode {
            ViewMode::Table => {
                current_row = render_table_headers(current_row, theme, cols);
                render_table_rows(current_row, &vm.display_items, theme, cols);
            }
            ViewMode::Grid => {
                render_grid(current_row, &vm.display_items, theme, cols);
            }
        }
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let notice_row = border_row.saturating_sub(1);
    let pagination_row = notice_row.saturating_sub(1);

    if vm.form.is_none() {
        render_pagination(pagination_row, &vm.pagination, theme, cols);
    }
    render_notice(notice_row, &vm.footer, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
