//! Pagination bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `‹ Prev   Page P of N   Next ›` centered at `row`.
///
/// Unavailable directions are dimmed.
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("   Page {} of {}   ", info.current, info.total_pages);
    let width = "‹ Prev".chars().count() * 2 + label.chars().count();
    let padding = cols.saturating_sub(width) / 2;

    let arrow_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.header_fg)
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}‹ Prev", arrow_color(info.has_prev));
    print!("{}{label}", Theme::fg(&theme.colors.text_normal));
    print!("{}Next ›", arrow_color(info.has_next));
    print!("{}", Theme::reset());
    row + 1
}
