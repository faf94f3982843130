//! Shared rendering utilities and helpers.
//!
//! Low-level text handling used across components: cursor positioning,
//! match highlighting with ANSI escape management, and width-aware
//! truncation and padding. Widths are measured in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use zcatalog::ui::helpers::truncate;
///
/// assert_eq!(truncate("Wireless Mouse", 20), "Wireless Mouse");
/// assert_eq!(truncate("Wireless Mouse", 8), "Wirel...");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Truncates then right-pads `text` with spaces to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(char_len(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Prints `text` centered in a line of `cols` characters, padding both sides.
///
/// Colors must be set by the caller; the line is not reset afterwards.
pub fn print_centered(text: &str, cols: usize) {
    let len = char_len(text);
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    print!("{}{text}{}", " ".repeat(left), " ".repeat(right));
}

/// Clips highlight ranges to the first `len` characters.
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], len: usize) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter(|&&(start, _)| start < len)
        .map(|&(start, end)| (start, end.min(len)))
        .collect()
}

/// Renders text with highlighted character ranges.
///
/// Highlighted sections use the match highlight colors. When `is_selected` is
/// set, highlighting is skipped so the selection colors stay intact. Ranges
/// past the end of `text` are ignored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for (start, end) in clip_ranges(ranges, chars.len()) {
        if start < current_pos {
            continue;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("₹12345", 6), "₹12345");
        assert_eq!(truncate("₹123456", 6), "₹12...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn fit_pads_to_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdefgh", 5), "ab...");
    }

    #[test]
    fn clip_drops_and_shortens_ranges() {
        assert_eq!(clip_ranges(&[(0, 2), (4, 9), (12, 14)], 6), vec![(0, 2), (4, 6)]);
    }
}
