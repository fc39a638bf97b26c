//! Note store abstraction.
//!
//! This module defines the [`NoteStore`] trait that the storage worker talks to.
//! Two strategies implement it: [`LocalNoteStore`](crate::storage::LocalNoteStore)
//! keeps notes on this device, and [`RemoteNoteStore`](crate::storage::RemoteNoteStore)
//! speaks to a REST backend. Which one is used is decided once, when the store
//! is opened.
//!
//! Every method returns a boxed future so the trait stays object safe and the
//! worker can hold a `Box<dyn NoteStore>`.

use std::fmt;

use futures_util::future::BoxFuture;

use crate::domain::error::Result;
use crate::domain::{Note, NotePatch};

/// Where notes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// On-device JSON store.
    Local,
    /// REST backend with on-device fallback for listing.
    Remote,
}

impl StorageMode {
    /// Label shown in the status bar (`Mode: Local` / `Mode: Backend`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Remote => "Backend",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Persistence operations over notes.
///
/// Implementations are the sole writers of durable state. All operations are
/// asynchronous; callers must not assume ordering between concurrent calls on
/// different stores, but a single store processes calls in the order awaited.
///
/// # Examples
///
/// ```
/// use simple_notes::storage::{LocalNoteStore, NoteStore};
/// use simple_notes::domain::NotePatch;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut store = LocalNoteStore::in_memory();
/// let created = store.create(NotePatch::default().title("  Plan  ")).await?;
/// assert_eq!(created.title, "Plan");
///
/// let fetched = store.get(&created.id).await?;
/// assert_eq!(fetched.map(|n| n.id), Some(created.id));
/// # Ok::<(), simple_notes::NotesError>(())
/// # }).unwrap();
/// ```
pub trait NoteStore: Send {
    /// Which strategy this store uses.
    fn mode(&self) -> StorageMode;

    /// Returns all notes in list order.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes cannot be read. The remote store falls
    /// back to local notes on network errors instead of failing.
    fn list(&mut self) -> BoxFuture<'_, Result<Vec<Note>>>;

    /// Looks up a single note. `Ok(None)` when it does not exist locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails (I/O, transport, non-2xx).
    fn get<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<Option<Note>>>;

    /// Creates a note from a partial set of fields.
    ///
    /// Absent fields take defaults: title `Untitled`, empty content, unpinned,
    /// blue.
    ///
    /// # Errors
    ///
    /// Returns an error if the note cannot be persisted.
    fn create(&mut self, partial: NotePatch) -> BoxFuture<'_, Result<Note>>;

    /// Merges `patch` into an existing note and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NotFound`](crate::NotesError::NotFound) if a local
    /// note does not exist, or a transport/request error remotely.
    fn update<'a>(&'a mut self, id: &'a str, patch: NotePatch) -> BoxFuture<'a, Result<Note>>;

    /// Removes a note. Deleting an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn delete<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<()>>;
}
