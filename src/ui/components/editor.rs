//! Editor pane component renderer.
//!
//! ```text
//! [ Save ]  [ Pin ]  [ Color: Blue ]  [ Delete ]
//!
//! Groceries▏
//! ──────────────────────────────────────────────
//! milk
//! eggs
//!
//! Title cannot be empty.
//! Created: … · Updated: … · Unsaved changes
//! ```

use crate::ui::helpers::{fit, position_cursor, truncate, write_rule};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EditorField, EditorInfo, Layout};

const CURSOR: &str = "▏";

/// Renders the editor into the right pane, from `top` down to `bottom`
/// (inclusive).
pub fn render_editor(out: &mut String, top: usize, bottom: usize, editor: &EditorInfo, theme: &Theme, layout: &Layout) {
    let colors = &theme.colors;
    let col = layout.editor_col();
    let width = layout.editor_width();

    render_toolbar(out, top, col, editor, theme);

    let title_row = top + 2;
    let title_focused = editor.focus == Some(EditorField::Title);
    position_cursor(out, title_row, col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&colors.header_fg));
    let title = if title_focused {
        format!("{}{CURSOR}", editor.title)
    } else {
        editor.title.clone()
    };
    out.push_str(&fit(&title, width));
    out.push_str(Theme::reset());

    let rule_color = if editor.focus.is_some() {
        &colors.search_bar_border
    } else {
        &colors.border
    };
    write_rule(out, title_row + 1, col, width, rule_color);

    let content_focused = editor.focus == Some(EditorField::Content);
    let last = editor.content_lines.len().saturating_sub(1);
    let content_top = title_row + 2;
    for (i, line) in editor.content_lines.iter().enumerate() {
        position_cursor(out, content_top + i, col);
        out.push_str(&Theme::fg(&colors.text_normal));
        if content_focused && i == last {
            out.push_str(&fit(&format!("{line}{CURSOR}"), width));
        } else {
            out.push_str(&fit(line, width));
        }
        out.push_str(Theme::reset());
    }

    if let Some(error) = &editor.error {
        position_cursor(out, bottom.saturating_sub(1), col);
        out.push_str(&Theme::fg(&colors.error_fg));
        out.push_str(&truncate(error, width));
        out.push_str(Theme::reset());
    }

    position_cursor(out, bottom, col);
    out.push_str(&Theme::fg(&colors.text_dim));
    let meta = format!("{} · {} · {}", editor.created, editor.updated, editor.draft_status);
    out.push_str(&truncate(&meta, width));
    out.push_str(Theme::reset());
}

fn render_toolbar(out: &mut String, row: usize, col: usize, editor: &EditorInfo, theme: &Theme) {
    let colors = &theme.colors;
    position_cursor(out, row, col);

    if editor.can_save {
        out.push_str(&Theme::bg(&colors.button_bg));
        out.push_str(&Theme::fg(&colors.button_fg));
        out.push_str(Theme::bold());
    } else {
        out.push_str(&Theme::fg(&colors.text_dim));
    }
    out.push_str(&format!("[ {} ]", editor.save_label));
    out.push_str(Theme::reset());
    out.push_str("  ");

    let pin_color = if editor.pinned {
        &colors.accent_secondary
    } else {
        &colors.text_normal
    };
    out.push_str(&Theme::fg(pin_color));
    out.push_str(&format!("[ {} ]", editor.pin_label));
    out.push_str("  ");

    out.push_str(&Theme::fg(colors.note_color(editor.color)));
    out.push_str(&format!("[ {} ]", editor.color_label));
    out.push_str("  ");

    out.push_str(&Theme::fg(&colors.error_fg));
    out.push_str("[ Delete ]");
    out.push_str(Theme::reset());
}
