//! Event handling and state transition logic.
//!
//! [`handle_event`] is a pure reducer: it mutates [`AppState`] and returns the
//! side effects to run as [`Action`]s. It never touches storage or the
//! terminal, so every transition can be exercised in a unit test.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Load`, `Quit`, `ForceQuit`
//! - **Notes**: `CreateNote`, `Save`, `DeleteNote`, `TogglePinned`, `SetColor`
//! - **Navigation**: `SelectNote`, `SelectNext`, `SelectPrevious`, `Focus*`
//! - **Input**: `TitleChanged`, `ContentChanged`, `QueryChanged`
//! - **Confirmation**: `ConfirmAccepted`, `ConfirmDeclined`
//! - **Worker**: `Worker` with the storage worker's completion
//!
//! # Example
//!
//! ```rust
//! use simple_notes::app::{handle_event, Action, AppState, Event};
//! use simple_notes::storage::StorageMode;
//! use simple_notes::ui::theme::Theme;
//!
//! let mut state = AppState::new(StorageMode::Local, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Load);
//! assert!(render);
//! assert!(state.loading);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! ```

use crate::app::modes::Focus;
use crate::app::state::{PendingConfirm, BACKEND_ADVISORY};
use crate::app::{Action, AppState};
use crate::domain::rules::{sort_notes, validate_note_draft};
use crate::domain::{NoteColor, NotePatch, UNTITLED};
use crate::storage::StorageMode;
use crate::worker::{Operation, UpdateReason, WorkerMessage, WorkerResponse};

const SWITCH_PROMPT: &str = "You have unsaved changes. Switch notes anyway?";
const QUIT_PROMPT: &str = "You have unsaved changes. Quit anyway?";
const LOAD_FAILED: &str = "Unable to load notes.";

/// Events triggered by user input or storage completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requests a full listing from storage.
    Load,

    /// Creates an `Untitled` note and opens it.
    CreateNote,

    /// Opens a note, asking first if the draft has unsaved changes.
    SelectNote(String),
    /// Selects the next visible note (wraps).
    SelectNext,
    /// Selects the previous visible note (wraps).
    SelectPrevious,
    /// Opens a note unconditionally. Emitted once a switch is confirmed.
    SwitchNote(String),

    TitleChanged(String),
    ContentChanged(String),
    QueryChanged(String),

    /// Persists the draft of the selected note.
    Save,
    /// Asks to delete the selected note.
    DeleteNote,
    /// Deletes a note unconditionally. Emitted once deletion is confirmed.
    DeleteConfirmed(String),
    TogglePinned,
    SetColor(NoteColor),
    /// Switches the selected note to the other palette color.
    CycleColor,

    FocusNext,
    FocusPrevious,
    Focus(Focus),

    ConfirmAccepted,
    ConfirmDeclined,

    /// Leaves the application, asking first if the draft is dirty.
    Quit,
    /// Leaves the application unconditionally.
    ForceQuit,

    /// Completion from the storage worker.
    Worker(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the frame needs redrawing.
///
/// While a confirmation is pending only `ConfirmAccepted`, `ConfirmDeclined`,
/// `ForceQuit` and worker completions are processed; anything else is
/// dropped.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.confirm.is_some()
        && !matches!(
            event,
            Event::ConfirmAccepted | Event::ConfirmDeclined | Event::ForceQuit | Event::Worker(_)
        )
    {
        tracing::trace!("confirmation pending, event ignored");
        return (false, vec![]);
    }

    match event {
        Event::Load => (true, vec![load(state)]),

        Event::CreateNote => {
            let partial = NotePatch::default()
                .title(UNTITLED)
                .content("")
                .pinned(false)
                .color(NoteColor::Blue);
            (false, vec![Action::PostToWorker(WorkerMessage::create_note(partial))])
        }

        Event::SelectNote(id) => {
            if state.selected_id.as_deref() == Some(id.as_str()) {
                return (false, vec![]);
            }
            if state.dirty {
                tracing::debug!(note_id = %id, "unsaved changes, confirming switch");
                state.confirm = Some(PendingConfirm {
                    message: SWITCH_PROMPT.to_string(),
                    on_accept: Box::new(Event::SwitchNote(id.clone())),
                });
                return (true, vec![]);
            }
            state.select(Some(id.clone()));
            (true, vec![])
        }

        Event::SelectNext | Event::SelectPrevious => {
            let forward = matches!(event, Event::SelectNext);
            match state.neighbour_id(forward) {
                Some(id) => handle_event(state, &Event::SelectNote(id)),
                None => (false, vec![]),
            }
        }

        Event::SwitchNote(id) => {
            state.select(Some(id.clone()));
            (true, vec![])
        }

        Event::TitleChanged(title) => {
            if state.selected_note().is_none() {
                return (false, vec![]);
            }
            state.draft.title.clone_from(title);
            state.dirty = true;
            state.error = None;
            (true, vec![])
        }

        Event::ContentChanged(content) => {
            if state.selected_note().is_none() {
                return (false, vec![]);
            }
            state.draft.content.clone_from(content);
            state.dirty = true;
            (true, vec![])
        }

        Event::QueryChanged(query) => {
            state.query.clone_from(query);
            (true, vec![])
        }

        Event::Save => save(state),

        Event::DeleteNote => {
            let Some((id, title)) = state
                .selected_note()
                .map(|note| (note.id.clone(), note.title.clone()))
            else {
                return (false, vec![]);
            };
            state.confirm = Some(PendingConfirm {
                message: format!("Delete \"{title}\"? This cannot be undone."),
                on_accept: Box::new(Event::DeleteConfirmed(id)),
            });
            (true, vec![])
        }

        Event::DeleteConfirmed(id) => {
            tracing::debug!(note_id = %id, "deleting note");
            (false, vec![Action::PostToWorker(WorkerMessage::delete_note(id.clone()))])
        }

        Event::TogglePinned => {
            let Some(note) = state.selected_note() else {
                return (false, vec![]);
            };
            let message = WorkerMessage::update_note(
                note.id.clone(),
                NotePatch::default().pinned(!note.pinned),
                UpdateReason::Pin,
            );
            (false, vec![Action::PostToWorker(message)])
        }

        Event::SetColor(color) => {
            let Some(note) = state.selected_note() else {
                return (false, vec![]);
            };
            let message = WorkerMessage::update_note(
                note.id.clone(),
                NotePatch::default().color(*color),
                UpdateReason::Color,
            );
            (false, vec![Action::PostToWorker(message)])
        }

        Event::CycleColor => match state.selected_note().map(|note| note.color.toggled()) {
            Some(next) => handle_event(state, &Event::SetColor(next)),
            None => (false, vec![]),
        },

        Event::FocusNext => {
            state.focus = state.focus.next(state.editor_available());
            (true, vec![])
        }
        Event::FocusPrevious => {
            state.focus = state.focus.previous(state.editor_available());
            (true, vec![])
        }
        Event::Focus(focus) => {
            if focus.is_editor() && !state.editor_available() {
                return (false, vec![]);
            }
            state.focus = *focus;
            (true, vec![])
        }

        Event::ConfirmAccepted => match state.confirm.take() {
            Some(pending) => {
                let (_, actions) = handle_event(state, &pending.on_accept);
                (true, actions)
            }
            None => (false, vec![]),
        },

        Event::ConfirmDeclined => (state.confirm.take().is_some(), vec![]),

        Event::Quit => {
            if state.dirty {
                state.confirm = Some(PendingConfirm {
                    message: QUIT_PROMPT.to_string(),
                    on_accept: Box::new(Event::ForceQuit),
                });
                return (true, vec![]);
            }
            (false, vec![Action::Quit])
        }

        Event::ForceQuit => (false, vec![Action::Quit]),

        Event::Worker(response) => handle_worker_response(state, response),
    }
}

fn load(state: &mut AppState) -> Action {
    state.loading = true;
    Action::PostToWorker(WorkerMessage::list_notes())
}

fn save(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.saving || !state.dirty {
        return (false, vec![]);
    }
    let Some(id) = state.selected_note().map(|note| note.id.clone()) else {
        return (false, vec![]);
    };

    if let Err(e) = validate_note_draft(&state.draft) {
        state.error = Some(e.to_string());
        return (true, vec![]);
    }

    let patch = state.draft.to_patch();

    // Optimistic: the list shows the new title while the save is in flight.
    if let Some(note) = state.notes.iter_mut().find(|note| note.id == id) {
        patch.apply_to(note);
    }

    state.saving = true;
    state.error = None;

    let message = WorkerMessage::update_note(id, patch, UpdateReason::Save);
    (true, vec![Action::PostToWorker(message)])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::NotesLoaded { notes } => {
            let mut notes = notes.clone();
            sort_notes(&mut notes);
            state.notes = notes;
            state.loading = false;
            state.notice = match state.mode {
                StorageMode::Remote => Some(BACKEND_ADVISORY.to_string()),
                StorageMode::Local => None,
            };

            if state.selected_id.is_none() {
                if let Some(first) = state.notes.first().map(|note| note.id.clone()) {
                    state.select(Some(first));
                }
            }

            tracing::debug!(count = state.notes.len(), "notes loaded");
            (true, vec![])
        }

        WorkerResponse::NoteCreated { note } => {
            tracing::debug!(note_id = %note.id, "note created");
            state.insert_note(note.clone());
            state.query.clear();
            state.select(Some(note.id.clone()));
            state.focus = Focus::Title;
            (true, vec![])
        }

        WorkerResponse::NoteUpdated { note, reason } => {
            state.replace_note(note.clone());
            match reason {
                UpdateReason::Save => {
                    state.saving = false;
                    state.dirty = false;
                    (true, vec![load(state)])
                }
                UpdateReason::Pin | UpdateReason::Color => (true, vec![]),
            }
        }

        WorkerResponse::NoteDeleted { id } => {
            state.remove_note(id);
            state.dirty = false;
            state.error = None;

            if state.selected_id.as_deref() == Some(id.as_str()) {
                let next = state.notes.first().map(|note| note.id.clone());
                state.select(next);
            }
            (true, vec![])
        }

        WorkerResponse::Failed { operation, message } => {
            tracing::debug!(operation = ?operation, error = %message, "storage request failed");
            match operation {
                Operation::List => {
                    state.loading = false;
                    state.notes.clear();
                    state.notice = Some(if message.is_empty() {
                        LOAD_FAILED.to_string()
                    } else {
                        message.clone()
                    });
                    (true, vec![])
                }
                Operation::Create => {
                    state.notice = Some(message.clone());
                    (true, vec![])
                }
                Operation::Update(UpdateReason::Save) => {
                    state.saving = false;
                    state.error = Some(message.clone());
                    (true, vec![load(state)])
                }
                Operation::Update(UpdateReason::Pin | UpdateReason::Color) | Operation::Delete => {
                    state.error = Some(message.clone());
                    (true, vec![])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::ui::theme::Theme;

    fn note(id: &str, title: &str, pinned: bool, updated: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: updated.to_string(),
            pinned,
            color: NoteColor::Blue,
        }
    }

    fn loaded(mode: StorageMode) -> AppState {
        let mut state = AppState::new(mode, Theme::default());
        handle_event(&mut state, &Event::Load);
        handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::NotesLoaded {
                notes: vec![
                    note("b", "Beta", false, "2026-03-01T00:00:00.000Z"),
                    note("a", "Alpha", true, "2026-02-01T00:00:00.000Z"),
                ],
            }),
        );
        state
    }

    fn posted(actions: &[Action]) -> Vec<&WorkerMessage> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::PostToWorker(message) => Some(message),
                Action::Quit => None,
            })
            .collect()
    }

    #[test]
    fn load_sorts_and_selects_first() {
        let state = loaded(StorageMode::Local);

        assert!(!state.loading);
        assert_eq!(state.notes[0].id, "a");
        assert_eq!(state.selected_id.as_deref(), Some("a"));
        assert_eq!(state.draft.title, "Alpha");
        assert_eq!(state.notice, None);
    }

    #[test]
    fn load_in_remote_mode_shows_advisory() {
        let state = loaded(StorageMode::Remote);
        assert_eq!(state.notice.as_deref(), Some(BACKEND_ADVISORY));
    }

    #[test]
    fn reload_keeps_existing_selection() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::SelectNote("b".to_string()));

        let notes = state.notes.clone();
        handle_event(&mut state, &Event::Worker(WorkerResponse::NotesLoaded { notes }));

        assert_eq!(state.selected_id.as_deref(), Some("b"));
    }

    #[test]
    fn failed_load_sets_notice_and_clears_notes() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::Load);
        handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::Failed {
                operation: Operation::List,
                message: "Request failed (500)".to_string(),
            }),
        );

        assert!(state.notes.is_empty());
        assert!(!state.loading);
        assert_eq!(state.notice.as_deref(), Some("Request failed (500)"));
    }

    #[test]
    fn create_posts_untitled_defaults() {
        let mut state = loaded(StorageMode::Local);
        let (_, actions) = handle_event(&mut state, &Event::CreateNote);

        let expected = NotePatch::default()
            .title(UNTITLED)
            .content("")
            .pinned(false)
            .color(NoteColor::Blue);
        assert!(matches!(
            posted(&actions).as_slice(),
            [WorkerMessage::CreateNote { partial, .. }] if *partial == expected
        ));
    }

    #[test]
    fn created_note_is_selected_and_search_cleared() {
        let mut state = loaded(StorageMode::Local);
        state.query = "alp".to_string();
        state.error = Some("old".to_string());

        let created = note("c", UNTITLED, false, "2026-04-01T00:00:00.000Z");
        handle_event(&mut state, &Event::Worker(WorkerResponse::NoteCreated { note: created }));

        assert_eq!(state.selected_id.as_deref(), Some("c"));
        assert_eq!(state.query, "");
        assert_eq!(state.error, None);
        assert!(!state.dirty);
        assert_eq!(state.focus, Focus::Title);
        // Pinned note still leads.
        assert_eq!(state.notes[0].id, "a");
        assert_eq!(state.notes[1].id, "c");
    }

    #[test]
    fn editing_marks_draft_dirty() {
        let mut state = loaded(StorageMode::Local);
        state.error = Some("Title cannot be empty.".to_string());

        handle_event(&mut state, &Event::TitleChanged("Alpha 2".to_string()));

        assert!(state.dirty);
        assert_eq!(state.error, None);
        assert_eq!(state.draft.title, "Alpha 2");
    }

    #[test]
    fn save_is_ignored_when_clean() {
        let mut state = loaded(StorageMode::Local);
        let (render, actions) = handle_event(&mut state, &Event::Save);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn save_with_blank_title_sets_error_without_storage_call() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("   ".to_string()));

        let (_, actions) = handle_event(&mut state, &Event::Save);

        assert!(actions.is_empty());
        assert_eq!(state.error.as_deref(), Some("Title cannot be empty."));
        assert!(!state.saving);
    }

    #[test]
    fn save_applies_optimistically_and_posts_normalized_patch() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("  Alpha   two ".to_string()));
        handle_event(&mut state, &Event::ContentChanged("body\n".to_string()));

        let (_, actions) = handle_event(&mut state, &Event::Save);

        assert!(state.saving);
        assert_eq!(state.notes[0].title, "Alpha two");
        assert_eq!(state.notes[0].content, "body\n");
        let expected = NotePatch::default().title("Alpha two").content("body\n");
        assert!(matches!(
            posted(&actions).as_slice(),
            [WorkerMessage::UpdateNote { id, patch, reason: UpdateReason::Save, .. }]
                if id == "a" && *patch == expected
        ));
    }

    #[test]
    fn second_save_while_in_flight_is_ignored() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("x".to_string()));
        handle_event(&mut state, &Event::Save);

        let (_, actions) = handle_event(&mut state, &Event::Save);
        assert!(actions.is_empty());
    }

    #[test]
    fn save_success_cleans_draft_and_refreshes() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("Alpha 2".to_string()));
        handle_event(&mut state, &Event::Save);

        let mut saved = state.notes[0].clone();
        saved.updated_at = "2026-05-01T00:00:00.000Z".to_string();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::NoteUpdated {
                note: saved,
                reason: UpdateReason::Save,
            }),
        );

        assert!(!state.saving);
        assert!(!state.dirty);
        assert!(state.loading);
        assert!(matches!(posted(&actions).as_slice(), [WorkerMessage::ListNotes { .. }]));
    }

    #[test]
    fn save_failure_keeps_draft_dirty_and_refreshes() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("Alpha 2".to_string()));
        handle_event(&mut state, &Event::Save);

        let (_, actions) = handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::Failed {
                operation: Operation::Update(UpdateReason::Save),
                message: "Note not found.".to_string(),
            }),
        );

        assert!(!state.saving);
        assert!(state.dirty);
        assert_eq!(state.error.as_deref(), Some("Note not found."));
        assert!(matches!(posted(&actions).as_slice(), [WorkerMessage::ListNotes { .. }]));
    }

    #[test]
    fn switching_while_dirty_asks_first() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::ContentChanged("draft".to_string()));

        handle_event(&mut state, &Event::SelectNote("b".to_string()));

        assert_eq!(state.selected_id.as_deref(), Some("a"));
        assert_eq!(
            state.confirm.as_ref().map(|c| c.message.as_str()),
            Some(SWITCH_PROMPT)
        );
    }

    #[test]
    fn declining_switch_keeps_selection_and_draft() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::ContentChanged("draft".to_string()));
        handle_event(&mut state, &Event::SelectNote("b".to_string()));

        handle_event(&mut state, &Event::ConfirmDeclined);

        assert!(state.confirm.is_none());
        assert_eq!(state.selected_id.as_deref(), Some("a"));
        assert!(state.dirty);
        assert_eq!(state.draft.content, "draft");
    }

    #[test]
    fn accepting_switch_resets_draft() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::ContentChanged("draft".to_string()));
        handle_event(&mut state, &Event::SelectNote("b".to_string()));

        handle_event(&mut state, &Event::ConfirmAccepted);

        assert_eq!(state.selected_id.as_deref(), Some("b"));
        assert!(!state.dirty);
        assert_eq!(state.draft.title, "Beta");
    }

    #[test]
    fn events_are_dropped_while_confirming() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::DeleteNote);

        let (render, actions) = handle_event(&mut state, &Event::CreateNote);

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.confirm.is_some());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded(StorageMode::Local);

        let (_, actions) = handle_event(&mut state, &Event::DeleteNote);
        assert!(actions.is_empty());
        assert_eq!(
            state.confirm.as_ref().map(|c| c.message.as_str()),
            Some("Delete \"Alpha\"? This cannot be undone.")
        );

        let (_, actions) = handle_event(&mut state, &Event::ConfirmAccepted);
        assert!(matches!(
            posted(&actions).as_slice(),
            [WorkerMessage::DeleteNote { id, .. }] if id == "a"
        ));
    }

    #[test]
    fn declining_delete_has_no_side_effect() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::DeleteNote);

        let (_, actions) = handle_event(&mut state, &Event::ConfirmDeclined);

        assert!(actions.is_empty());
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn deleting_selected_note_selects_first_remaining() {
        let mut state = loaded(StorageMode::Local);
        state.dirty = true;

        handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::NoteDeleted { id: "a".to_string() }),
        );

        assert_eq!(state.selected_id.as_deref(), Some("b"));
        assert!(!state.dirty);
    }

    #[test]
    fn deleting_last_note_clears_selection() {
        let mut state = loaded(StorageMode::Local);
        for id in ["a", "b"] {
            handle_event(
                &mut state,
                &Event::Worker(WorkerResponse::NoteDeleted { id: id.to_string() }),
            );
        }

        assert_eq!(state.selected_id, None);
        assert!(state.compute_viewmodel(24, 80).empty_state.is_some());
    }

    #[test]
    fn toggle_pin_sends_only_pinned_field() {
        let mut state = loaded(StorageMode::Local);

        let (_, actions) = handle_event(&mut state, &Event::TogglePinned);

        assert!(matches!(
            posted(&actions).as_slice(),
            [WorkerMessage::UpdateNote { patch, reason: UpdateReason::Pin, .. }]
                if *patch == NotePatch::default().pinned(false)
        ));
        // No optimistic change.
        assert!(state.notes[0].pinned);
    }

    #[test]
    fn pin_result_resorts_without_touching_draft() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::ContentChanged("draft".to_string()));

        let mut unpinned = state.notes[0].clone();
        unpinned.pinned = false;
        handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::NoteUpdated {
                note: unpinned,
                reason: UpdateReason::Pin,
            }),
        );

        // Beta was updated later, so it now leads.
        assert_eq!(state.notes[0].id, "b");
        assert_eq!(state.draft.content, "draft");
        assert!(state.dirty);
    }

    #[test]
    fn cycle_color_requests_the_other_color() {
        let mut state = loaded(StorageMode::Local);

        let (_, actions) = handle_event(&mut state, &Event::CycleColor);

        assert!(matches!(
            posted(&actions).as_slice(),
            [WorkerMessage::UpdateNote { patch, reason: UpdateReason::Color, .. }]
                if *patch == NotePatch::default().color(NoteColor::Amber)
        ));
    }

    #[test]
    fn failed_pin_sets_error() {
        let mut state = loaded(StorageMode::Local);
        handle_event(
            &mut state,
            &Event::Worker(WorkerResponse::Failed {
                operation: Operation::Update(UpdateReason::Pin),
                message: "Network error: refused".to_string(),
            }),
        );
        assert_eq!(state.error.as_deref(), Some("Network error: refused"));
    }

    #[test]
    fn select_next_wraps() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::SelectNext);
        assert_eq!(state.selected_id.as_deref(), Some("b"));
        handle_event(&mut state, &Event::SelectNext);
        assert_eq!(state.selected_id.as_deref(), Some("a"));
    }

    #[test]
    fn editor_focus_needs_a_selection() {
        let mut state = AppState::new(StorageMode::Local, Theme::default());
        let (render, _) = handle_event(&mut state, &Event::Focus(Focus::Title));
        assert!(!render);
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn quit_with_dirty_draft_asks_first() {
        let mut state = loaded(StorageMode::Local);
        handle_event(&mut state, &Event::TitleChanged("x".to_string()));

        let (_, actions) = handle_event(&mut state, &Event::Quit);
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::ConfirmAccepted);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn clean_quit_is_immediate() {
        let mut state = loaded(StorageMode::Local);
        let (_, actions) = handle_event(&mut state, &Event::Quit);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
