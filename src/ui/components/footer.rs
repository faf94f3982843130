//! Footer component renderer.
//!
//! The bottom line carries keybinding hints for the current mode; the line
//! above it shows the last commit notice.

use crate::ui::helpers::{position_cursor, print_centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the status notice, if any, at `row`.
pub fn render_notice(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let Some(notice) = &footer.notice else {
        return;
    };

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!(" {}", truncate(notice, cols.saturating_sub(1)));
    print!("{}", Theme::reset());
}

/// Renders the dimmed, centered keybinding hints, cut to the pane width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&truncate(&footer.keybindings, cols), cols);
    print!("{}", Theme::reset());
    row + 1
}
