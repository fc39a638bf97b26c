//! Status bar component renderer.
//!
//! One row across the top: storage mode badge, the current notice and the
//! shortcut hint, separated by dim bars.

use crate::ui::helpers::{display_width, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status bar at `row`. Returns the next free row.
pub fn render_status(out: &mut String, row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let dot_color = if status.backend {
        &colors.accent
    } else {
        &colors.accent_secondary
    };

    position_cursor(out, row, 1);
    if let Some(bg) = &colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    let mut used = 0;

    out.push_str(&Theme::fg(dot_color));
    out.push_str(" ● ");
    used += 3;

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&colors.header_fg));
    out.push_str(&status.mode);
    out.push_str(Theme::reset());
    if let Some(bg) = &colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    used += display_width(&status.mode);

    let shortcuts_width = display_width(&status.shortcuts) + 3;

    if let Some(notice) = &status.notice {
        let room = cols.saturating_sub(used + 3 + shortcuts_width);
        let notice = truncate(notice, room);
        out.push_str(&Theme::fg(&colors.text_dim));
        out.push_str(" │ ");
        out.push_str(&Theme::fg(&colors.notice_fg));
        out.push_str(&notice);
        used += 3 + display_width(&notice);
    }

    let remaining = cols.saturating_sub(used);
    out.push_str(&Theme::fg(&colors.text_dim));
    if remaining >= shortcuts_width {
        let gap = remaining - shortcuts_width;
        out.push_str(&" ".repeat(gap));
        out.push_str(" │ ");
        out.push_str(&status.shortcuts);
    } else {
        out.push_str(&fit("", remaining));
    }

    out.push_str(Theme::reset());
    row + 1
}
