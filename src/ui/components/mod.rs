//! Composable UI component renderers.
//!
//! Each component writes its region of the frame into a shared buffer using
//! absolute cursor positioning.
//!
//! # Components
//!
//! - [`status`]: Storage mode, notice and shortcut hint
//! - [`sidebar`]: Brand, search box and note list
//! - [`search`]: Search input box
//! - [`editor`]: Toolbar, title, content and metadata for the selected note
//! - [`empty`]: Placeholder when no note is selected
//! - [`footer`]: Keybinding hints
//! - [`confirm`]: Yes/no modal
//!
//! # Layout
//!
//! ```text
//! [Status bar                                   ]
//! [Sidebar        ]│[Editor or empty state      ]
//! [               ]│[                           ]
//! [Footer                                       ]
//! ```

mod confirm;
mod editor;
mod empty;
mod footer;
mod search;
mod sidebar;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use confirm::render_confirm;
use editor::render_editor;
use empty::render_empty_state;
use footer::render_footer;
use sidebar::render_sidebar;
use status::render_status;

const CLEAR_SCREEN: &str = "\u{1b}[2J";

/// Draws the vertical divider between sidebar and editor.
fn render_divider(out: &mut String, top: usize, bottom: usize, col: usize, color: &str) {
    out.push_str(&Theme::fg(color));
    for row in top..=bottom {
        position_cursor(out, row, col);
        out.push('│');
    }
    out.push_str(Theme::reset());
}

/// Renders a complete frame.
pub fn render_frame(vm: &UIViewModel, theme: &Theme) -> String {
    let layout = &vm.layout;
    let mut out = String::with_capacity(layout.rows * layout.cols * 2);
    out.push_str(CLEAR_SCREEN);

    if layout.rows < 3 {
        render_footer(&mut out, 1, &vm.footer, theme, layout.cols);
        return out;
    }

    let body_top = render_status(&mut out, 1, &vm.status, theme, layout.cols);
    let body_bottom = layout.rows - 1;

    render_sidebar(&mut out, body_top, &vm.sidebar, theme, layout.sidebar_width);
    render_divider(
        &mut out,
        body_top,
        body_bottom,
        layout.sidebar_width + 1,
        &theme.colors.border,
    );

    if let Some(editor) = &vm.editor {
        render_editor(&mut out, body_top, body_bottom, editor, theme, layout);
    } else if let Some(empty) = &vm.empty_state {
        let middle = body_top + (body_bottom - body_top) / 2;
        render_empty_state(&mut out, middle, empty, theme, layout);
    }

    render_footer(&mut out, layout.rows, &vm.footer, theme, layout.cols);

    if let Some(confirm) = &vm.confirm {
        render_confirm(&mut out, confirm, theme, layout.rows, layout.cols);
    }

    out
}
