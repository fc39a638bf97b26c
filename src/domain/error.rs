//! Error types for Simple Notes.
//!
//! This module defines the centralized error type [`NotesError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! The `Display` output of each variant is what the user sees in the status bar
//! or editor, so the messages are written for people rather than logs.

use thiserror::Error;

/// The main error type for note operations.
///
/// Variants mirror the failure kinds the application distinguishes between:
/// local validation, a missing note, transport failures, non-success HTTP
/// responses, and failures of the durable local store.
///
/// # Examples
///
/// ```
/// use simple_notes::NotesError;
///
/// let err = NotesError::Validation("Title cannot be empty.".to_string());
/// assert_eq!(err.to_string(), "Title cannot be empty.");
///
/// let err = NotesError::Request { status: 500, message: "Request failed (500)".to_string() };
/// assert!(!err.is_network());
/// ```
#[derive(Debug, Error)]
pub enum NotesError {
    /// A draft failed local validation.
    ///
    /// Raised before any persistence call is made. The string is the
    /// user-facing message (e.g. "Title cannot be empty.").
    #[error("{0}")]
    Validation(String),

    /// The note targeted by an update does not exist in local storage.
    #[error("Note not found.")]
    NotFound {
        /// Id that was looked up.
        id: String,
    },

    /// The remote backend could not be reached.
    ///
    /// Covers DNS failures, refused connections and interrupted bodies. This is
    /// the only error the remote `list()` recovers from.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote backend answered with a non-success status.
    ///
    /// `message` is the response body, or `Request failed (<status>)` when the
    /// body was empty.
    #[error("{message}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Body text or synthesized fallback message.
        message: String,
    },

    /// A successful response body was not the JSON shape we expected.
    #[error("Unexpected response from backend: {0}")]
    Decode(String),

    /// Reading or writing the durable local store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The background storage worker is gone.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// Returns `true` for transport-level failures.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// A specialized `Result` type for note operations.
pub type Result<T> = std::result::Result<T, NotesError>;
