//! Empty state component renderer.
//!
//! Shown in the editor pane when no note is selected.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, Layout};

/// Renders the message and subtitle centered in the editor pane, around
/// `middle_row`.
pub fn render_empty_state(out: &mut String, middle_row: usize, empty: &EmptyState, theme: &Theme, layout: &Layout) {
    let col = layout.editor_col();
    let width = layout.editor_width();

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    write_centered(out, middle_row, col, width, &empty.message);
    out.push_str(Theme::reset());

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, middle_row + 1, col, width, &empty.subtitle);
    out.push_str(Theme::reset());
}
