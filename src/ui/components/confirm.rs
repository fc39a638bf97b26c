//! Confirmation modal renderer.
//!
//! A bordered box centered on the screen, drawn last so it covers whatever
//! is underneath.

use std::fmt::Write;

use crate::ui::helpers::{display_width, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmInfo;

const MODAL_MIN_WIDTH: usize = 40;
const MODAL_ROWS: usize = 6;

pub fn render_confirm(out: &mut String, confirm: &ConfirmInfo, theme: &Theme, rows: usize, cols: usize) {
    let colors = &theme.colors;
    let wanted = display_width(&confirm.message).max(display_width(&confirm.hint)) + 6;
    let width = wanted.max(MODAL_MIN_WIDTH).min(cols.saturating_sub(2));
    let inner = width.saturating_sub(2);
    let col = (cols.saturating_sub(width)) / 2 + 1;
    let top = (rows.saturating_sub(MODAL_ROWS)) / 2 + 1;

    let body = [
        (String::new(), &colors.text_normal),
        (format!("  {}", confirm.message), &colors.header_fg),
        (String::new(), &colors.text_normal),
        (format!("  {}", confirm.hint), &colors.text_dim),
    ];

    position_cursor(out, top, col);
    out.push_str(&Theme::fg(&colors.search_bar_border));
    let _ = write!(out, "┌{}┐", "─".repeat(inner));

    for (offset, (text, color)) in body.iter().enumerate() {
        position_cursor(out, top + 1 + offset, col);
        out.push_str(&Theme::fg(&colors.search_bar_border));
        out.push('│');
        out.push_str(&Theme::fg(color));
        out.push_str(&fit(text, inner));
        out.push_str(&Theme::fg(&colors.search_bar_border));
        out.push('│');
    }

    position_cursor(out, top + MODAL_ROWS - 1, col);
    let _ = write!(out, "└{}┘", "─".repeat(inner));
    out.push_str(Theme::reset());
}
