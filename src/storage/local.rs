//! On-device note store.
//!
//! The whole collection lives as one JSON array under [`STORAGE_KEY`] in a
//! [`KeyValueStore`]. Every write rewrites the full array; the collection is
//! expected to stay small.
//!
//! # Storage Format
//!
//! ```json
//! [
//!   {
//!     "id": "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed",
//!     "title": "Welcome to Simple Notes",
//!     "content": "Create notes on the left, edit on the right.",
//!     "createdAt": "2026-10-16T09:30:00.000Z",
//!     "updatedAt": "2026-10-16T09:30:00.000Z",
//!     "pinned": true,
//!     "color": "blue"
//!   }
//! ]
//! ```
//!
//! Content that is not a JSON array reads as an empty collection. Inside an
//! array, fields decode leniently; records without an `id` are hidden from
//! the app but written back unchanged so no stored data is lost.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::domain::error::{NotesError, Result};
use crate::domain::rules::{generate_id, normalize_title, now_timestamp, sort_notes, timestamp_millis};
use crate::domain::{Note, NoteColor, NotePatch, UNTITLED};
use crate::storage::backend::{NoteStore, StorageMode};
use crate::storage::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

/// Key under which the note array is stored.
pub const STORAGE_KEY: &str = "simpleNotes.notes.v1";

/// Title of the note seeded into an empty store.
pub const SEED_TITLE: &str = "Welcome to Simple Notes";

const SEED_CONTENT: &str = "Create notes on the left, edit on the right.\n\n\
Keyboard shortcuts:\n\
- Ctrl + N: New note\n\
- Ctrl + S: Save\n\
- Ctrl + D: Delete note\n\
- Ctrl + P: Pin / unpin\n\n\
Notes are stored on this device unless a backend is configured.";

/// Builds the onboarding note written when the store is empty.
#[must_use]
pub fn seed_note() -> Note {
    let now = now_timestamp();
    Note {
        id: generate_id(),
        title: SEED_TITLE.to_string(),
        content: SEED_CONTENT.to_string(),
        created_at: now.clone(),
        updated_at: now,
        pinned: true,
        color: NoteColor::Blue,
    }
}

/// Decoded contents of the storage key.
#[derive(Debug, Default)]
struct Stored {
    notes: Vec<Note>,
    /// Array elements that are not notes, kept verbatim.
    unreadable: Vec<Value>,
}

impl Stored {
    fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.unreadable.is_empty()
    }

    fn decode(raw: &str) -> Self {
        let records = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                tracing::warn!("stored notes are not an array, treating as empty");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored notes are malformed, treating as empty");
                return Self::default();
            }
        };

        let mut stored = Self::default();
        for record in records {
            match serde_json::from_value::<Note>(record.clone()) {
                Ok(note) if !note.id.is_empty() => stored.notes.push(note),
                Ok(_) => {
                    tracing::warn!("skipping stored note with empty id");
                    stored.unreadable.push(record);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable stored note");
                    stored.unreadable.push(record);
                }
            }
        }
        stored
    }
}

/// Note store backed by a key-value store on this device.
pub struct LocalNoteStore {
    kv: Box<dyn KeyValueStore>,
}

impl LocalNoteStore {
    pub fn new(kv: impl KeyValueStore + 'static) -> Self {
        Self { kv: Box::new(kv) }
    }

    /// Opens the file-backed store in `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        tracing::debug!(path = ?data_dir, "opening local note store");
        Self::new(FileKeyValueStore::new(data_dir))
    }

    /// Store that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryKeyValueStore::new())
    }

    fn read_all(&self) -> Result<Stored> {
        Ok(self
            .kv
            .read(STORAGE_KEY)?
            .map(|raw| Stored::decode(&raw))
            .unwrap_or_default())
    }

    fn write_all(&mut self, stored: &Stored) -> Result<()> {
        let mut records = Vec::with_capacity(stored.notes.len() + stored.unreadable.len());
        for note in &stored.notes {
            let record = serde_json::to_value(note)
                .map_err(|e| NotesError::Storage(format!("failed to serialize notes: {e}")))?;
            records.push(record);
        }
        records.extend(stored.unreadable.iter().cloned());

        let json = Value::Array(records).to_string();
        self.kv.write(STORAGE_KEY, &json)
    }

    /// All notes in list order, seeding the welcome note into an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the seed cannot be written.
    pub fn list_notes(&mut self) -> Result<Vec<Note>> {
        let _span = tracing::debug_span!("local_list").entered();

        let mut stored = self.read_all()?;
        if stored.is_empty() {
            tracing::debug!("store empty, seeding welcome note");
            stored.notes.push(seed_note());
            self.write_all(&stored)?;
        }

        let mut notes = stored.notes;
        sort_notes(&mut notes);
        tracing::debug!(count = notes.len(), "notes listed");
        Ok(notes)
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let _span = tracing::debug_span!("local_get", id = %id).entered();

        let note = self.read_all()?.notes.into_iter().find(|n| n.id == id);
        tracing::debug!(found = note.is_some(), "note lookup complete");
        Ok(note)
    }

    /// Prepends a new note built from `partial`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn create_note(&mut self, partial: NotePatch) -> Result<Note> {
        let _span = tracing::debug_span!("local_create").entered();

        let now = now_timestamp();
        let title = partial
            .title
            .as_deref()
            .map(normalize_title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        let note = Note {
            id: generate_id(),
            title,
            content: partial.content.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
            pinned: partial.pinned.unwrap_or(false),
            color: partial.color.unwrap_or_default(),
        };

        let mut stored = self.read_all()?;
        stored.notes.insert(0, note.clone());
        self.write_all(&stored)?;

        tracing::debug!(id = %note.id, "note created");
        Ok(note)
    }

    /// Merges `patch` into the note with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NotFound`] if no such note exists; the store is
    /// left untouched in that case.
    pub fn update_note(&mut self, id: &str, patch: &NotePatch) -> Result<Note> {
        let _span = tracing::debug_span!("local_update", id = %id).entered();

        let mut stored = self.read_all()?;
        let note = stored
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotesError::NotFound { id: id.to_string() })?;

        patch.apply_to(note);
        note.updated_at = now_timestamp();
        if timestamp_millis(&note.updated_at) < timestamp_millis(&note.created_at) {
            note.updated_at.clone_from(&note.created_at);
        }
        let updated = note.clone();

        self.write_all(&stored)?;
        tracing::debug!("note updated");
        Ok(updated)
    }

    /// Removes the note with `id`. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn delete_note(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("local_delete", id = %id).entered();

        let mut stored = self.read_all()?;
        let before = stored.notes.len();
        stored.notes.retain(|n| n.id != id);

        if stored.notes.len() == before {
            tracing::debug!("note already absent");
            return Ok(());
        }

        self.write_all(&stored)?;
        tracing::debug!("note deleted");
        Ok(())
    }
}

impl NoteStore for LocalNoteStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Local
    }

    fn list(&mut self) -> BoxFuture<'_, Result<Vec<Note>>> {
        Box::pin(std::future::ready(self.list_notes()))
    }

    fn get<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<Option<Note>>> {
        Box::pin(std::future::ready(self.get_note(id)))
    }

    fn create(&mut self, partial: NotePatch) -> BoxFuture<'_, Result<Note>> {
        Box::pin(std::future::ready(self.create_note(partial)))
    }

    fn update<'a>(&'a mut self, id: &'a str, patch: NotePatch) -> BoxFuture<'a, Result<Note>> {
        Box::pin(std::future::ready(self.update_note(id, &patch)))
    }

    fn delete<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<()>> {
        Box::pin(std::future::ready(self.delete_note(id)))
    }
}
