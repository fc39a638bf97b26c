//! Key bindings.
//!
//! Translates crossterm key events into reducer [`Event`]s. The mapping depends
//! on the current [`Focus`] and on whether a confirmation is pending, so it
//! reads [`AppState`] but never changes it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::modes::Focus;
use crate::app::{AppState, Event};

/// Maps a key press to an event. `None` means the key does nothing here.
#[must_use]
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if state.confirm.is_some() {
        return match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Event::ConfirmAccepted),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Event::ConfirmDeclined),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::ForceQuit),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Event::CreateNote),
            KeyCode::Char('s') => Some(Event::Save),
            KeyCode::Char('d') => Some(Event::DeleteNote),
            KeyCode::Char('p') => Some(Event::TogglePinned),
            KeyCode::Char('o') => Some(Event::CycleColor),
            KeyCode::Char('r') => Some(Event::Load),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('c') => Some(Event::ForceQuit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Event::FocusNext),
        KeyCode::BackTab => return Some(Event::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::List => map_list_key(key.code),
        Focus::Search => map_text_key(&state.query, key.code, false).map(Event::QueryChanged).or_else(|| {
            matches!(key.code, KeyCode::Esc | KeyCode::Enter).then_some(Event::Focus(Focus::List))
        }),
        Focus::Title => map_text_key(&state.draft.title, key.code, false)
            .map(Event::TitleChanged)
            .or_else(|| match key.code {
                KeyCode::Esc => Some(Event::Focus(Focus::List)),
                KeyCode::Enter | KeyCode::Down => Some(Event::Focus(Focus::Content)),
                _ => None,
            }),
        Focus::Content => map_text_key(&state.draft.content, key.code, true)
            .map(Event::ContentChanged)
            .or_else(|| (key.code == KeyCode::Esc).then_some(Event::Focus(Focus::List))),
    }
}

fn map_list_key(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Down | KeyCode::Char('j') => Some(Event::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Event::SelectPrevious),
        KeyCode::Char('/') => Some(Event::Focus(Focus::Search)),
        KeyCode::Enter => Some(Event::Focus(Focus::Title)),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

/// Edits `current` at its end. Returns the new text, or `None` if the key is
/// not a text edit.
fn map_text_key(current: &str, code: KeyCode, multiline: bool) -> Option<String> {
    match code {
        KeyCode::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(text)
        }
        KeyCode::Enter if multiline => Some(format!("{current}\n")),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(text)
        }
        _ => None,
    }
}
