//! Domain layer for Simple Notes.
//!
//! Core types and rules, independent of storage, terminal or network concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`note`]: The `Note` entity, patches and drafts
//! - [`rules`]: Normalization, validation, ordering, search and formatting helpers
//!
//! # Examples
//!
//! ```
//! use simple_notes::domain::{validate_note_draft, NoteDraft};
//!
//! assert!(validate_note_draft(&NoteDraft::new("Groceries", "")).is_ok());
//! assert!(validate_note_draft(&NoteDraft::new("   ", "")).is_err());
//! ```

pub mod error;
pub mod note;
pub mod rules;

pub use error::{NotesError, Result};
pub use note::{Note, NoteColor, NoteDraft, NotePatch, UNTITLED};
pub use rules::{
    filter_notes, format_long, format_short, generate_id, matches_query, normalize_title,
    note_preview, now_timestamp, sort_notes, validate_note_draft,
};
