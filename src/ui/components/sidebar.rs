//! Sidebar component renderer.
//!
//! Brand block, search box and the note list. Each note takes three rows:
//!
//! ```text
//! ▌ Groceries                  PIN
//! ▌ milk, eggs, bread
//! ▌ Updated Oct 16
//! ```
//!
//! The bar on the left carries the note's color tag. The selected note gets
//! the selection background across the full sidebar width.

use crate::ui::components::search::render_search_bar;
use crate::ui::helpers::{display_width, fit, position_cursor, truncate, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, SidebarInfo};

const PIN_MARKER: &str = "PIN";

/// Renders the sidebar from `row` in the first `width` columns. Returns the
/// next free row.
pub fn render_sidebar(out: &mut String, row: usize, sidebar: &SidebarInfo, theme: &Theme, width: usize) -> usize {
    let colors = &theme.colors;
    let mut current_row = row;

    position_cursor(out, current_row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&colors.header_fg));
    out.push_str(&fit(&format!(" {}", sidebar.brand), width));
    out.push_str(Theme::reset());
    current_row += 1;

    position_cursor(out, current_row, 1);
    out.push_str(&Theme::fg(&colors.text_dim));
    out.push_str(&fit(&format!(" {}", sidebar.tagline), width));
    out.push_str(Theme::reset());
    current_row += 2;

    current_row = render_search_bar(out, current_row, 1, &sidebar.search, theme, width);

    if let Some(placeholder) = &sidebar.placeholder {
        out.push_str(&Theme::fg(&colors.text_dim));
        write_centered(out, current_row + 1, 1, width, placeholder);
        out.push_str(Theme::reset());
        return current_row + 2;
    }

    for item in &sidebar.items {
        current_row = render_item(out, current_row, item, theme, width);
    }
    current_row
}

fn render_item(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, width: usize) -> usize {
    let colors = &theme.colors;
    let text_width = width.saturating_sub(2);
    let swatch = colors.note_color(item.color);

    let base = if item.is_selected {
        format!("{}{}", Theme::bg(&colors.selection_bg), Theme::fg(&colors.selection_fg))
    } else {
        Theme::fg(&colors.text_normal)
    };

    // Title line with an optional right-aligned pin marker.
    position_cursor(out, row, 1);
    out.push_str(&base);
    out.push_str(&Theme::fg(swatch));
    out.push_str("▌ ");
    out.push_str(&base);
    out.push_str(Theme::bold());
    if item.pinned && text_width > PIN_MARKER.len() + 1 {
        let title_width = text_width - PIN_MARKER.len() - 1;
        let title = truncate(&item.title, title_width);
        out.push_str(&title);
        out.push_str(&" ".repeat(title_width - display_width(&title) + 1));
        out.push_str(&Theme::fg(&colors.accent_secondary));
        out.push_str(PIN_MARKER);
    } else {
        out.push_str(&fit(&item.title, text_width));
    }
    out.push_str(Theme::reset());

    for (offset, text) in [(1, &item.preview), (2, &item.updated)] {
        position_cursor(out, row + offset, 1);
        out.push_str(&base);
        out.push_str(&Theme::fg(swatch));
        out.push_str("▌ ");
        if !item.is_selected {
            out.push_str(&Theme::fg(&colors.text_dim));
        }
        out.push_str(&fit(text, text_width));
        out.push_str(Theme::reset());
    }

    row + 3
}
