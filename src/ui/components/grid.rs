//! Grid component renderer.
//!
//! Lays the current page out as cards, as many per line as the terminal
//! width allows. Each card is [`CARD_HEIGHT`] rows tall:
//!
//! ```text
//! ╭────────────────────────╮
//! │ Wireless Mouse      #3 │
//! │ ₹799        stock: 40  │
//! │ Electronics            │
//! │ Ergonomic 2.4 GHz m... │
//! ╰────────────────────────╯
//! ```

use crate::ui::helpers::{self, char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const CARD_WIDTH: usize = 28;
const CARD_GAP: usize = 2;
pub const CARD_HEIGHT: usize = 6;
const CARD_INNER: usize = CARD_WIDTH - 4;

/// Cards that fit side by side in `cols` columns; at least one.
#[must_use]
pub const fn cards_per_line(cols: usize) -> usize {
    let per_line = (cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    if per_line == 0 {
        1
    } else {
        per_line
    }
}

/// Renders all cards starting at `row`.
///
/// # Returns
///
/// The row after the last line of cards.
pub fn render_grid(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let per_line = cards_per_line(cols);
    let mut current_row = row;

    for line in items.chunks(per_line) {
        for (slot, item) in line.iter().enumerate() {
            let col = 1 + slot * (CARD_WIDTH + CARD_GAP);
            render_card(current_row, col, item, theme);
        }
        current_row += CARD_HEIGHT;
    }
    current_row
}

/// The description line of a card, cut and padded to the card's inner width.
fn description_line(item: &DisplayItem) -> String {
    fit(&item.description, CARD_INNER)
}

fn render_card(row: usize, col: usize, item: &DisplayItem, theme: &Theme) {
    let inner = CARD_INNER;
    let border = if item.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };

    position_cursor(row, col);
    print!("{}", Theme::fg(border));
    print!("╭{}╮", "─".repeat(CARD_WIDTH - 2));

    // name line: highlighted name on the left, id on the right
    let id_len = char_len(&item.id);
    let name = truncate(&item.name, inner.saturating_sub(id_len + 1));
    position_cursor(row + 1, col);
    print!("│ ");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, &theme.colors.text_normal, false);
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(inner.saturating_sub(char_len(&name) + id_len)));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", item.id);
    print!("{}", Theme::fg(border));
    print!(" │");

    let stock = format!("stock: {}", item.stock);
    let price = truncate(&item.price, inner.saturating_sub(char_len(&stock) + 1));
    position_cursor(row + 2, col);
    print!("│ ");
    print!("{}", Theme::fg(&theme.colors.price_fg));
    print!("{price}");
    print!("{}", " ".repeat(inner.saturating_sub(char_len(&price) + char_len(&stock))));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{stock}");
    print!("{}", Theme::fg(border));
    print!(" │");

    position_cursor(row + 3, col);
    print!("│ ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit(&item.category, inner));
    print!("{}", Theme::fg(border));
    print!(" │");

    position_cursor(row + 4, col);
    print!("│ ");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", description_line(item));
    print!("{}", Theme::fg(border));
    print!(" │");

    position_cursor(row + 5, col);
    print!("╰{}╯", "─".repeat(CARD_WIDTH - 2));
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str) -> DisplayItem {
        DisplayItem {
            id: "#1".to_string(),
            name: "Wireless Mouse".to_string(),
            price: "₹799".to_string(),
            category: "Electronics".to_string(),
            stock: "25".to_string(),
            description: description.to_string(),
            is_selected: false,
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn description_is_cut_to_card_width() {
        let line = description_line(&item("Ergonomic 2.4 GHz mouse with silent clicks"));
        assert_eq!(line, "Ergonomic 2.4 GHz mou...");
        assert_eq!(char_len(&line), CARD_INNER);

        assert_eq!(description_line(&item("")), " ".repeat(CARD_INNER));
    }

    #[test]
    fn grid_rows_include_description_line() {
        let items: Vec<DisplayItem> = (0..4).map(|_| item("6 mm mat")).collect();
        assert_eq!(render_grid(1, &items, &Theme::default(), 58), 1 + 2 * CARD_HEIGHT);
    }

    #[test]
    fn cards_per_line_fills_width() {
        assert_eq!(cards_per_line(10), 1);
        assert_eq!(cards_per_line(58), 2);
        assert_eq!(cards_per_line(88), 3);
        assert_eq!(cards_per_line(87), 2);
    }
}
