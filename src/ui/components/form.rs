//! Add/edit form panel renderer.
//!
//! The panel replaces the product list while the form is open. Each field
//! takes two rows: the input and, beneath it, its validation message.
//!
//! ```text
//! ╭─ Add Product ──────────────────────╮
//! │ Name*        Wireless Mouse_       │
//! │                                    │
//! │ Price*                             │
//! │              Price is required     │
//! ...
//! │                            [ Add ] │
//! ╰────────────────────────────────────╯
//! ```

use crate::ui::helpers::{char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldView, FormView};

const PANEL_MAX_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 13;

/// Renders the form panel starting at `row`.
///
/// # Returns
///
/// The row after the panel's bottom border.
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let width = cols.clamp(12, PANEL_MAX_WIDTH);
    let inner = width - 4;
    let border = Theme::fg(&theme.colors.form_border);

    let title = truncate(&format!(" {} ", form.title), width.saturating_sub(4));
    position_cursor(row, 1);
    print!("{border}╭─");
    print!("{}{}{}", Theme::bold(), title, Theme::reset());
    print!("{border}{}╮", "─".repeat(width.saturating_sub(char_len(&title) + 3)));

    let mut current_row = row + 1;
    for field in &form.fields {
        current_row = render_field(current_row, field, theme, inner);
    }

    let button = format!("[ {} ]", form.submit_label);
    position_cursor(current_row, 1);
    print!("{border}│ ");
    print!("{}", " ".repeat(inner.saturating_sub(char_len(&button))));
    print!("{}{}{button}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    print!("{border} │");

    position_cursor(current_row + 1, 1);
    print!("{border}╰{}╯", "─".repeat(width - 2));
    print!("{}", Theme::reset());

    current_row + 2
}

fn render_field(row: usize, field: &FormFieldView, theme: &Theme, inner: usize) -> usize {
    let border = Theme::fg(&theme.colors.form_border);
    let value_width = inner.saturating_sub(LABEL_WIDTH);

    let label = if field.is_required {
        format!("{}*", field.label)
    } else {
        field.label.clone()
    };
    let value = if field.is_focused {
        format!("{}_", field.value)
    } else {
        field.value.clone()
    };

    position_cursor(row, 1);
    print!("{border}│ ");
    if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit(&label, LABEL_WIDTH));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit(&value, value_width));
    print!("{border} │");

    position_cursor(row + 1, 1);
    print!("{border}│ ");
    print!("{}", " ".repeat(LABEL_WIDTH));
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{}", fit(field.error.as_deref().unwrap_or(""), value_width));
    print!("{border} │");
    print!("{}", Theme::reset());

    row + 2
}
