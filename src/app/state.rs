//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for everything on screen: the
//! sorted note collection, the selection, the editor draft and the transient
//! flags (`loading`, `dirty`, `saving`). It is mutated only by
//! [`handle_event`](crate::app::handle_event); the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use simple_notes::app::AppState;
//! use simple_notes::storage::StorageMode;
//! use simple_notes::ui::theme::Theme;
//!
//! let state = AppState::new(StorageMode::Local, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.status.mode, "Mode: Local");
//! ```

use crate::app::modes::Focus;
use crate::app::Event;
use crate::domain::rules::{filter_notes, format_long, format_short, note_preview, sort_notes};
use crate::domain::{Note, NoteDraft, UNTITLED};
use crate::storage::StorageMode;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmInfo, DisplayItem, EditorField, EditorInfo, EmptyState, FooterInfo, Layout, SearchBarInfo,
    SidebarInfo, StatusInfo, UIViewModel,
};

/// Notice shown after loading whenever a backend is configured.
pub const BACKEND_ADVISORY: &str =
    "Backend is configured but unreachable. Showing local notes stored on this device.";

const BRAND: &str = "Simple Notes";
const TAGLINE: &str = "Ocean Professional";
const SEARCH_PLACEHOLDER: &str = "Search notes…";
const LOADING_MESSAGE: &str = "Loading notes…";
const NO_RESULTS_MESSAGE: &str = "No notes found. Create one with Ctrl+N.";

const STATUS_ROWS: usize = 1;
const FOOTER_ROWS: usize = 1;
/// Brand, tagline, spacer and the three-row search box.
const SIDEBAR_CHROME_ROWS: usize = 6;
/// Title, preview and date.
const ITEM_ROWS: usize = 3;
/// Toolbar, spacer, title, rule, error line and metadata line.
const EDITOR_CHROME_ROWS: usize = 6;

/// A question waiting for a yes/no answer.
///
/// `on_accept` is replayed through the reducer when the user accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub message: String,
    pub on_accept: Box<Event>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All notes, always in `sort_notes` order.
    pub notes: Vec<Note>,

    /// Id of the note open in the editor.
    ///
    /// May briefly refer to a note no longer in `notes` (deleted elsewhere);
    /// the editor then shows the empty state.
    pub selected_id: Option<String>,

    /// Sidebar search text, as typed.
    pub query: String,

    /// A listing is in flight.
    pub loading: bool,

    /// The draft differs from what was last saved.
    pub dirty: bool,

    /// A save is in flight.
    pub saving: bool,

    /// Validation or persistence error shown in the editor.
    pub error: Option<String>,

    /// Status bar message (backend advisory or load failure).
    pub notice: Option<String>,

    /// Editor working copy of the selected note.
    pub draft: NoteDraft,

    pub focus: Focus,

    pub confirm: Option<PendingConfirm>,

    /// Active persistence strategy.
    pub mode: StorageMode,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state. Nothing is loaded until an
    /// [`Event::Load`] is handled.
    #[must_use]
    pub fn new(mode: StorageMode, theme: Theme) -> Self {
        Self {
            notes: Vec::new(),
            selected_id: None,
            query: String::new(),
            loading: false,
            dirty: false,
            saving: false,
            error: None,
            notice: None,
            draft: NoteDraft::default(),
            focus: Focus::List,
            confirm: None,
            mode,
            theme,
        }
    }

    /// The note open in the editor, if it still exists.
    #[must_use]
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Notes matching the current search query, in list order.
    #[must_use]
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.query)
    }

    /// Whether the editor pane can take focus.
    #[must_use]
    pub fn editor_available(&self) -> bool {
        self.selected_note().is_some()
    }

    /// Opens `id` in the editor.
    ///
    /// Resets the draft to the stored note and clears the dirty flag and
    /// error. Passing `None` clears the selection.
    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
        self.draft = self.selected_note().map(NoteDraft::from_note).unwrap_or_default();
        self.dirty = false;
        self.error = None;

        if !self.editor_available() && self.focus.is_editor() {
            self.focus = Focus::List;
        }
    }

    /// Replaces the stored copy of `note` (matched by id) and re-sorts.
    ///
    /// Unknown ids are ignored. The draft is untouched.
    pub fn replace_note(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
            sort_notes(&mut self.notes);
        }
    }

    /// Adds `note` at the front and re-sorts.
    pub fn insert_note(&mut self, note: Note) {
        self.notes.insert(0, note);
        sort_notes(&mut self.notes);
    }

    /// Removes the note with `id`, returning whether it was present.
    pub fn remove_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Id of the visible note `offset` rows away from the selection.
    ///
    /// Wraps at both ends. Without a visible selection, moving forward picks
    /// the first row and moving back picks the last.
    #[must_use]
    pub fn neighbour_id(&self, forward: bool) -> Option<String> {
        let visible = self.visible_notes();
        if visible.is_empty() {
            return None;
        }

        let len = visible.len();
        let current = self
            .selected_id
            .as_deref()
            .and_then(|id| visible.iter().position(|note| note.id == id));

        let index = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        Some(visible[index].id.clone())
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// The note list is windowed around the selection: the selected row sits
    /// in the middle of the window when possible, and the window is pulled
    /// back near the end of the list so it stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = Layout {
            rows,
            cols,
            sidebar_width: sidebar_width(cols),
        };
        let body_rows = rows.saturating_sub(STATUS_ROWS + FOOTER_ROWS);

        let editor = self
            .selected_note()
            .map(|note| self.compute_editor(note, body_rows));
        let empty_state = if editor.is_none() {
            Some(EmptyState {
                message: "Select a note".to_string(),
                subtitle: "Choose a note from the sidebar, or press Ctrl+N to create your first note."
                    .to_string(),
            })
        } else {
            None
        };

        UIViewModel {
            layout,
            status: self.compute_status(),
            sidebar: self.compute_sidebar(body_rows),
            editor,
            empty_state,
            footer: self.compute_footer(),
            confirm: self.confirm.as_ref().map(|pending| ConfirmInfo {
                message: pending.message.clone(),
                hint: "y/Enter: confirm  n/Esc: cancel".to_string(),
            }),
        }
    }

    fn compute_status(&self) -> StatusInfo {
        StatusInfo {
            mode: format!("Mode: {}", self.mode.label()),
            backend: self.mode == StorageMode::Remote,
            notice: self.notice.clone(),
            shortcuts: "Shortcuts: Ctrl+N, Ctrl+S".to_string(),
        }
    }

    fn compute_sidebar(&self, body_rows: usize) -> SidebarInfo {
        let search = SearchBarInfo {
            query: self.query.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            focused: self.focus == Focus::Search,
        };

        let visible = self.visible_notes();
        let placeholder = if self.loading {
            Some(LOADING_MESSAGE.to_string())
        } else if visible.is_empty() {
            Some(NO_RESULTS_MESSAGE.to_string())
        } else {
            None
        };

        let items = if placeholder.is_some() {
            vec![]
        } else {
            let capacity = (body_rows.saturating_sub(SIDEBAR_CHROME_ROWS) / ITEM_ROWS).max(1);
            let selected = self
                .selected_id
                .as_deref()
                .and_then(|id| visible.iter().position(|note| note.id == id))
                .unwrap_or(0);

            let mut start = selected.saturating_sub(capacity / 2);
            let end = (start + capacity).min(visible.len());
            if end - start < capacity && visible.len() >= capacity {
                start = end.saturating_sub(capacity);
            }

            visible[start..end]
                .iter()
                .map(|note| self.compute_display_item(note))
                .collect()
        };

        SidebarInfo {
            brand: BRAND.to_string(),
            tagline: TAGLINE.to_string(),
            search,
            items,
            placeholder,
            focused: self.focus == Focus::List,
        }
    }

    fn compute_display_item(&self, note: &Note) -> DisplayItem {
        let title = if note.title.is_empty() {
            UNTITLED.to_string()
        } else {
            note.title.clone()
        };

        DisplayItem {
            title,
            preview: note_preview(note),
            updated: format!("Updated {}", format_short(&note.updated_at)),
            pinned: note.pinned,
            color: note.color,
            is_selected: self.selected_id.as_deref() == Some(note.id.as_str()),
        }
    }

    fn compute_editor(&self, note: &Note, body_rows: usize) -> EditorInfo {
        let content_rows = body_rows.saturating_sub(EDITOR_CHROME_ROWS).max(1);
        let lines: Vec<&str> = self.draft.content.split('\n').collect();

        // Keep the line being typed in view while the content area has focus.
        let start = if self.focus == Focus::Content {
            lines.len().saturating_sub(content_rows)
        } else {
            0
        };
        let content_lines = lines
            .iter()
            .skip(start)
            .take(content_rows)
            .map(|line| (*line).to_string())
            .collect();

        let save_label = if self.saving {
            "Saving…"
        } else if self.dirty {
            "Save"
        } else {
            "Saved"
        };

        EditorInfo {
            title: self.draft.title.clone(),
            content_lines,
            focus: match self.focus {
                Focus::Title => Some(EditorField::Title),
                Focus::Content => Some(EditorField::Content),
                Focus::List | Focus::Search => None,
            },
            save_label: save_label.to_string(),
            can_save: self.dirty && !self.saving,
            pin_label: if note.pinned { "Unpin" } else { "Pin" }.to_string(),
            color_label: format!("Color: {}", note.color.label()),
            color: note.color,
            pinned: note.pinned,
            error: self.error.clone(),
            created: format!("Created: {}", format_long(&note.created_at)),
            updated: format!("Updated: {}", format_long(&note.updated_at)),
            draft_status: if self.dirty {
                "Unsaved changes"
            } else {
                "No pending changes"
            }
            .to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.confirm.is_some() {
            "y/Enter: confirm  n/Esc: cancel"
        } else {
            match self.focus {
                Focus::List => {
                    "j/k: navigate  /: search  Tab: focus  Ctrl+N: new  Ctrl+D: delete  Ctrl+P: pin  Ctrl+O: color  q: quit"
                }
                Focus::Search => "Type to filter  Enter/Esc: back to list  Tab: next",
                Focus::Title | Focus::Content => {
                    "Ctrl+S: save  Ctrl+D: delete  Ctrl+P: pin  Ctrl+O: color  Tab: next  Esc: list"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Sidebar takes a third of the width, within 24..=40 columns.
fn sidebar_width(cols: usize) -> usize {
    (cols / 3).clamp(24, 40).min(cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteColor;

    fn note(id: &str, title: &str, updated: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("{title} body"),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: updated.to_string(),
            pinned: false,
            color: NoteColor::Blue,
        }
    }

    fn state_with(count: usize) -> AppState {
        let mut state = AppState::new(StorageMode::Local, Theme::default());
        state.notes = (0..count)
            .map(|i| note(&format!("n{i}"), &format!("Note {i}"), "2026-02-01T00:00:00.000Z"))
            .collect();
        state
    }

    #[test]
    fn select_resets_draft_and_flags() {
        let mut state = state_with(2);
        state.dirty = true;
        state.error = Some("boom".to_string());

        state.select(Some("n1".to_string()));

        assert_eq!(state.draft, NoteDraft::new("Note 1", "Note 1 body"));
        assert!(!state.dirty);
        assert_eq!(state.error, None);
    }

    #[test]
    fn clearing_selection_moves_focus_out_of_editor() {
        let mut state = state_with(1);
        state.select(Some("n0".to_string()));
        state.focus = Focus::Content;

        state.select(None);

        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.draft, NoteDraft::default());
    }

    #[test]
    fn neighbour_wraps_around_visible_notes() {
        let mut state = state_with(3);
        state.select(Some("n2".to_string()));
        assert_eq!(state.neighbour_id(true).as_deref(), Some("n0"));

        state.select(Some("n0".to_string()));
        assert_eq!(state.neighbour_id(false).as_deref(), Some("n2"));
    }

    #[test]
    fn neighbour_respects_search_filter() {
        let mut state = state_with(3);
        state.query = "note 2".to_string();
        assert_eq!(state.neighbour_id(true).as_deref(), Some("n2"));
    }

    #[test]
    fn viewmodel_shows_loading_placeholder() {
        let mut state = state_with(3);
        state.loading = true;

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.sidebar.placeholder.as_deref(), Some(LOADING_MESSAGE));
        assert!(vm.sidebar.items.is_empty());
    }

    #[test]
    fn viewmodel_shows_no_results_for_unmatched_query() {
        let mut state = state_with(3);
        state.query = "zzz".to_string();

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.sidebar.placeholder.as_deref(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn viewmodel_windows_list_around_selection() {
        let mut state = state_with(20);
        state.select(Some("n10".to_string()));

        // 24 rows: 22 body rows, 16 for the list, 5 items.
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.sidebar.items.len(), 5);
        assert_eq!(vm.sidebar.items[2].title, "Note 10");
        assert!(vm.sidebar.items[2].is_selected);
    }

    #[test]
    fn viewmodel_window_stays_full_at_end() {
        let mut state = state_with(20);
        state.select(Some("n19".to_string()));

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.sidebar.items.len(), 5);
        assert_eq!(vm.sidebar.items[4].title, "Note 19");
    }

    #[test]
    fn viewmodel_editor_labels_follow_flags() {
        let mut state = state_with(1);
        state.select(Some("n0".to_string()));

        let clean = state.compute_viewmodel(24, 80).editor.unwrap();
        assert_eq!(clean.save_label, "Saved");
        assert!(!clean.can_save);
        assert_eq!(clean.pin_label, "Pin");
        assert_eq!(clean.color_label, "Color: Blue");
        assert_eq!(clean.draft_status, "No pending changes");

        state.dirty = true;
        let dirty = state.compute_viewmodel(24, 80).editor.unwrap();
        assert_eq!(dirty.save_label, "Save");
        assert!(dirty.can_save);
        assert_eq!(dirty.draft_status, "Unsaved changes");

        state.saving = true;
        let saving = state.compute_viewmodel(24, 80).editor.unwrap();
        assert_eq!(saving.save_label, "Saving…");
        assert!(!saving.can_save);
    }

    #[test]
    fn viewmodel_without_selection_has_empty_state() {
        let state = state_with(1);
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.editor.is_none());
        assert_eq!(vm.empty_state.unwrap().message, "Select a note");
    }

    #[test]
    fn untitled_rows_get_placeholder_title() {
        let mut state = state_with(1);
        state.notes[0].title = String::new();

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.sidebar.items[0].title, UNTITLED);
    }

    #[test]
    fn sidebar_width_is_clamped() {
        assert_eq!(sidebar_width(60), 24);
        assert_eq!(sidebar_width(90), 30);
        assert_eq!(sidebar_width(200), 40);
        assert_eq!(sidebar_width(10), 10);
    }
}
