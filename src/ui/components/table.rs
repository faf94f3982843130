//! Table component renderer.
//!
//! Renders the current page as a table with ID, NAME, PRICE, CATEGORY, STOCK
//! and DESCRIPTION columns. Supports selection and match highlighting.

use crate::ui::helpers::{self, char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 14;
const STOCK_WIDTH: usize = 6;

/// Columns before DESCRIPTION, including one space after each.
const FIXED_WIDTH: usize = ID_WIDTH + NAME_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH + STOCK_WIDTH + 5;

/// Renders the column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let description_width = cols.saturating_sub(FIXED_WIDTH);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{} {} {} {} {} {}",
        fit("ID", ID_WIDTH),
        fit("NAME", NAME_WIDTH),
        fit("PRICE", PRICE_WIDTH),
        fit("CATEGORY", CATEGORY_WIDTH),
        fit("STOCK", STOCK_WIDTH),
        truncate("DESCRIPTION", description_width)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights on the name (unless selected)
/// 3. Price color, then normal text color
///
/// The row is padded to the full terminal width so the selection background
/// spans the whole line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let description_width = cols.saturating_sub(FIXED_WIDTH);
    let base_fg = if item.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(base_fg));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    print!("{} ", fit(&item.id, ID_WIDTH));

    let name = truncate(&item.name, NAME_WIDTH);
    helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, base_fg, item.is_selected);
    print!("{} ", " ".repeat(NAME_WIDTH.saturating_sub(char_len(&name))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{} ", fit(&item.price, PRICE_WIDTH));
    print!("{}", Theme::fg(base_fg));

    print!("{} ", fit(&item.category, CATEGORY_WIDTH));
    print!("{} ", fit(&item.stock, STOCK_WIDTH));

    let description = truncate(&item.description, description_width);
    print!("{description}");

    let line_len = FIXED_WIDTH + char_len(&description);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
