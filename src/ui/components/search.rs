//! Search box component renderer.

use crate::ui::helpers::write_box;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin inside the sidebar.
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the three-row search box at `row`, spanning `width` columns from
/// `col`. Returns the next free row.
///
/// ```text
///  ┌──────────────────┐
///  │ Search notes…    │
///  └──────────────────┘
/// ```
///
/// The border takes the accent color while the box has focus. An empty query
/// shows the placeholder in the dim color; a focused box shows a cursor.
pub fn render_search_bar(
    out: &mut String,
    row: usize,
    col: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    width: usize,
) -> usize {
    let box_width = width.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    let (text, color) = if search.query.is_empty() && !search.focused {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else if search.focused {
        (format!(" {}▏", search.query), &theme.colors.text_normal)
    } else {
        (format!(" {}", search.query), &theme.colors.text_normal)
    };

    write_box(out, row, col + SEARCH_BOX_MARGIN, box_width, border, color, &text);
    row + 3
}
