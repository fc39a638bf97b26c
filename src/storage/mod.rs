//! Storage layer for notes.
//!
//! Notes are persisted either on this device or through a REST backend. The
//! choice is made once by [`open_store`] from the configuration: a non-empty
//! backend URL selects the remote store, anything else the local one.
//!
//! # Modules
//!
//! - `backend`: The [`NoteStore`] trait and [`StorageMode`]
//! - `kv`: Durable key-value stores (atomic JSON files, in-memory)
//! - `local`: On-device store keeping one JSON array under a fixed key
//! - `remote`: REST client store with local fallback for listing

pub mod backend;
pub mod kv;
pub mod local;
pub mod remote;

pub use backend::{NoteStore, StorageMode};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use local::{seed_note, LocalNoteStore, SEED_TITLE, STORAGE_KEY};
pub use remote::RemoteNoteStore;

use crate::domain::error::Result;
use crate::Config;

/// Opens the store selected by `config`.
///
/// The local store always lives in `config.data_dir`; in remote mode it backs
/// the list fallback.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built. An unusable backend
/// URL is not an error here; it behaves like an unreachable backend.
pub fn open_store(config: &Config) -> Result<Box<dyn NoteStore>> {
    let local = LocalNoteStore::open(config.data_dir.clone());

    match config.backend_url() {
        Some(url) => {
            tracing::info!(backend = %url, "using remote note store");
            Ok(Box::new(RemoteNoteStore::new(url, local)?))
        }
        None => {
            tracing::info!(data_dir = ?config.data_dir, "using local note store");
            Ok(Box::new(local))
        }
    }
}
