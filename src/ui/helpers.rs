//! Shared rendering utilities.
//!
//! Components write into a single frame buffer instead of stdout so a frame can
//! be flushed in one write (and inspected in tests). Widths are counted in
//! `char`s; the palette and labels are all single-width.

use std::fmt::Write;

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` cells, ending in `…` when shortened.
///
/// ```rust
/// use simple_notes::ui::helpers::truncate;
///
/// assert_eq!(truncate("Groceries", 20), "Groceries");
/// assert_eq!(truncate("Groceries", 5), "Groc…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates `text` to `width` and pads it with spaces to exactly `width`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(display_width(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Writes `text` centered in a `width`-cell span starting at `col`.
pub fn write_centered(out: &mut String, row: usize, col: usize, width: usize, text: &str) {
    let text = truncate(text, width);
    let padding = width.saturating_sub(display_width(&text)) / 2;
    position_cursor(out, row, col + padding);
    out.push_str(&text);
}

/// Draws a horizontal rule of `width` cells.
pub fn write_rule(out: &mut String, row: usize, col: usize, width: usize, color: &str) {
    position_cursor(out, row, col);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(width));
    out.push_str(Theme::reset());
}

/// Draws a three-row box of `width` cells with `content` on the middle row.
///
/// `content` is drawn in `text_color` and truncated to the inner width.
pub fn write_box(
    out: &mut String,
    row: usize,
    col: usize,
    width: usize,
    border_color: &str,
    text_color: &str,
    content: &str,
) {
    let inner = width.saturating_sub(2);

    position_cursor(out, row, col);
    out.push_str(&Theme::fg(border_color));
    let _ = write!(out, "┌{}┐", "─".repeat(inner));

    position_cursor(out, row + 1, col);
    out.push('│');
    out.push_str(&Theme::fg(text_color));
    out.push_str(&fit(content, inner));
    out.push_str(&Theme::fg(border_color));
    out.push('│');

    position_cursor(out, row + 2, col);
    let _ = write!(out, "└{}┘", "─".repeat(inner));
    out.push_str(Theme::reset());
}
