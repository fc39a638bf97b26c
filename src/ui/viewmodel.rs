//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` via
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready strings only: windowing,
//! truncation of previews, date formatting and button labels are all resolved
//! before rendering.

use crate::domain::NoteColor;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Frame geometry.
    pub layout: Layout,

    /// Top status bar (storage mode, notice, shortcuts).
    pub status: StatusInfo,

    /// Left pane: brand, search box and note list.
    pub sidebar: SidebarInfo,

    /// Right pane when a note is selected.
    pub editor: Option<EditorInfo>,

    /// Right pane when no note is selected.
    pub empty_state: Option<EmptyState>,

    /// Bottom keybinding hints.
    pub footer: FooterInfo,

    /// Modal confirmation, drawn over everything else.
    pub confirm: Option<ConfirmInfo>,
}

/// Frame geometry in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub sidebar_width: usize,
}

impl Layout {
    /// First column of the editor pane (1-indexed).
    #[must_use]
    pub const fn editor_col(&self) -> usize {
        self.sidebar_width + 2
    }

    /// Width of the editor pane.
    #[must_use]
    pub const fn editor_width(&self) -> usize {
        self.cols.saturating_sub(self.sidebar_width + 2)
    }
}

/// Status bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// `Mode: Local` or `Mode: Backend`.
    pub mode: String,
    /// A backend is configured; picks the mode indicator color.
    pub backend: bool,
    /// Advisory or load error, if any.
    pub notice: Option<String>,
    /// Global shortcut hint.
    pub shortcuts: String,
}

/// Sidebar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub brand: String,
    pub tagline: String,
    pub search: SearchBarInfo,
    /// Rows currently in view.
    pub items: Vec<DisplayItem>,
    /// `Loading notes…` or the no-results message, replacing the list.
    pub placeholder: Option<String>,
    /// Whether the list itself has keyboard focus.
    pub focused: bool,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
    pub focused: bool,
}

/// One note row in the sidebar list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, or `Untitled` when empty.
    pub title: String,
    /// First content line.
    pub preview: String,
    /// `Updated Oct 16`.
    pub updated: String,
    pub pinned: bool,
    pub color: NoteColor,
    pub is_selected: bool,
}

/// Editor field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
}

/// Editor pane contents for the selected note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInfo {
    /// Draft title as typed.
    pub title: String,
    /// Draft content lines currently in view.
    pub content_lines: Vec<String>,
    pub focus: Option<EditorField>,
    /// `Saving…`, `Save` or `Saved`.
    pub save_label: String,
    pub can_save: bool,
    /// `Pin` or `Unpin`.
    pub pin_label: String,
    /// `Color: Blue` or `Color: Amber`.
    pub color_label: String,
    pub color: NoteColor,
    pub pinned: bool,
    /// Validation or persistence error.
    pub error: Option<String>,
    /// `Created: …`.
    pub created: String,
    /// `Updated: …`.
    pub updated: String,
    /// `Unsaved changes` or `No pending changes`.
    pub draft_status: String,
}

/// Empty state message shown instead of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (`Select a note`).
    pub message: String,
    /// Secondary hint.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the focused region.
    pub keybindings: String,
}

/// Confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInfo {
    pub message: String,
    pub hint: String,
}
