//! Validation, ordering and formatting rules for notes.
//!
//! These are the pure helpers the rest of the crate builds on: id and timestamp
//! generation, title normalization, draft validation, the list ordering, search
//! matching, and preview/date text for the UI.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::cmp::Ordering;

use super::error::{NotesError, Result};
use super::note::{Note, NoteDraft};

/// Maximum preview length in characters before truncation.
pub const PREVIEW_MAX_CHARS: usize = 90;

/// Preview shown for notes without any non-blank content.
pub const EMPTY_PREVIEW: &str = "No content";

/// Validation message for an empty title.
pub const EMPTY_TITLE_MESSAGE: &str = "Title cannot be empty.";

/// Generates a new note id (random v4 UUID).
#[must_use]
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC instant in the note timestamp format.
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a note timestamp. Returns `None` for empty or malformed input.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Milliseconds since the epoch, with unparseable input treated as the zero instant.
#[must_use]
pub fn timestamp_millis(value: &str) -> i64 {
    parse_timestamp(value).map_or(0, |dt| dt.timestamp_millis())
}

/// Collapses whitespace runs to a single space and trims the ends.
///
/// ```
/// use simple_notes::domain::normalize_title;
///
/// assert_eq!(normalize_title("  a   b  "), "a b");
/// assert_eq!(normalize_title(" \t\n"), "");
/// ```
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks a draft before it is saved.
///
/// # Errors
///
/// Returns [`NotesError::Validation`] when the normalized title is empty.
pub fn validate_note_draft(draft: &NoteDraft) -> Result<()> {
    if normalize_title(&draft.title).is_empty() {
        return Err(NotesError::Validation(EMPTY_TITLE_MESSAGE.to_string()));
    }
    Ok(())
}

/// List ordering: pinned first, then `updated_at` descending, then
/// `created_at` descending.
#[must_use]
pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| timestamp_millis(&b.updated_at).cmp(&timestamp_millis(&a.updated_at)))
        .then_with(|| timestamp_millis(&b.created_at).cmp(&timestamp_millis(&a.created_at)))
}

/// Sorts notes in place by [`compare_notes`]. The sort is stable.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(compare_notes);
}

/// Case-insensitive substring match of a query against title and content.
///
/// The query is trimmed first; an empty query matches everything.
#[must_use]
pub fn matches_query(note: &Note, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
}

/// Notes matching `query`, in their existing order.
#[must_use]
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches_query(note, query)).collect()
}

/// One-line preview: the first non-blank line of the content, trimmed and
/// truncated to [`PREVIEW_MAX_CHARS`] characters followed by `…`.
#[must_use]
pub fn note_preview(note: &Note) -> String {
    let Some(line) = note
        .content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
    else {
        return EMPTY_PREVIEW.to_string();
    };

    if line.chars().count() > PREVIEW_MAX_CHARS {
        let cut: String = line.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}

/// Short local date for list rows, e.g. `Oct 16`.
#[must_use]
pub fn format_short(value: &str) -> String {
    parse_timestamp(value).map_or_else(String::new, |dt| {
        dt.with_timezone(&Local).format("%b %-d").to_string()
    })
}

/// Long local date and time for the editor, e.g. `Oct 16, 2026, 09:30`.
#[must_use]
pub fn format_long(value: &str) -> String {
    parse_timestamp(value).map_or_else(String::new, |dt| {
        dt.with_timezone(&Local).format("%b %-d, %Y, %H:%M").to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteColor;

    fn note(id: &str, pinned: bool, updated: &str, created: &str) -> Note {
        Note {
            id: id.to_string(),
            title: id.to_string(),
            content: String::new(),
            created_at: created.to_string(),
            updated_at: updated.to_string(),
            pinned,
            color: NoteColor::Blue,
        }
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn ids_do_not_collide() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn now_timestamp_is_parseable_utc_millis() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(parse_timestamp(&ts).is_some());
        assert_eq!(ts.len(), "2026-10-16T09:30:00.000Z".len());
    }

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_title("  a   b  "), "a b");
        assert_eq!(normalize_title("one\t\ntwo"), "one two");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn validation_rejects_blank_titles_only() {
        for title in ["", "   ", "\t\n "] {
            let err = validate_note_draft(&NoteDraft::new(title, "body")).unwrap_err();
            assert_eq!(err.to_string(), EMPTY_TITLE_MESSAGE);
        }
        assert!(validate_note_draft(&NoteDraft::new(" x ", "")).is_ok());
    }

    #[test]
    fn pinned_notes_come_first() {
        let mut notes = vec![
            note("b", false, "2026-02-01T00:00:00.000Z", "2026-01-01T00:00:00.000Z"),
            note("a", true, "2026-01-01T00:00:00.000Z", "2026-01-01T00:00:00.000Z"),
        ];
        sort_notes(&mut notes);
        assert_eq!(ids(&notes), vec!["a", "b"]);
    }

    #[test]
    fn later_updates_first_then_later_creation() {
        let mut notes = vec![
            note("old", false, "2026-01-01T00:00:00.000Z", "2026-01-01T00:00:00.000Z"),
            note("new", false, "2026-03-01T00:00:00.000Z", "2026-01-01T00:00:00.000Z"),
            note("tie-young", false, "2026-02-01T00:00:00.000Z", "2026-01-20T00:00:00.000Z"),
            note("tie-old", false, "2026-02-01T00:00:00.000Z", "2026-01-10T00:00:00.000Z"),
        ];
        sort_notes(&mut notes);
        assert_eq!(ids(&notes), vec!["new", "tie-young", "tie-old", "old"]);
    }

    #[test]
    fn sort_is_stable_and_treats_garbage_as_epoch() {
        let mut notes = vec![
            note("x", false, "not a date", ""),
            note("y", false, "", ""),
            note("z", false, "2026-01-01T00:00:00.000Z", ""),
        ];
        sort_notes(&mut notes);
        assert_eq!(ids(&notes), vec!["z", "x", "y"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let mut a = note("a", false, "", "");
        a.title = "Shopping List".to_string();
        let mut b = note("b", false, "", "");
        b.content = "call the PLUMBER".to_string();
        let notes = vec![a, b];

        assert_eq!(filter_notes(&notes, "  shopping ").len(), 1);
        assert_eq!(filter_notes(&notes, "plumber")[0].id, "b");
        assert_eq!(filter_notes(&notes, "   ").len(), 2);
        assert!(filter_notes(&notes, "zebra").is_empty());
    }

    #[test]
    fn preview_uses_first_non_blank_line() {
        let mut n = note("p", false, "", "");
        n.content = "\n   \n  first line  \nsecond".to_string();
        assert_eq!(note_preview(&n), "first line");

        n.content = "  \n\t".to_string();
        assert_eq!(note_preview(&n), EMPTY_PREVIEW);
    }

    #[test]
    fn preview_truncates_long_lines() {
        let mut n = note("p", false, "", "");
        n.content = "é".repeat(100);
        let preview = note_preview(&n);
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 1);

        n.content = "x".repeat(PREVIEW_MAX_CHARS);
        assert_eq!(note_preview(&n), "x".repeat(PREVIEW_MAX_CHARS));
    }

    #[test]
    fn formatting_unparseable_dates_is_empty() {
        assert_eq!(format_short("garbage"), "");
        assert_eq!(format_long(""), "");
        assert!(!format_long("2026-10-16T09:30:00.000Z").is_empty());
    }

    #[test]
    fn long_format_uses_24_hour_clock() {
        let at = "2026-10-16T21:05:00.000Z";
        let local = parse_timestamp(at).unwrap().with_timezone(&Local);
        let expected = format!(
            "{}, {:02}:{:02}",
            local.format("%b %-d, %Y"),
            chrono::Timelike::hour(&local),
            chrono::Timelike::minute(&local)
        );
        let formatted = format_long(at);
        assert_eq!(formatted, expected);
        assert!(!formatted.contains("AM") && !formatted.contains("PM"));
    }
}
