//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK (simple processor)
//!                → OtlpFileExporter → <data_dir>/simple-notes-otlp.json
//! ```
//!
//! Each exported span batch is one OTLP JSON line. The file rotates at 10 MB
//! and keeps three numbered backups.
//!
//! # Configuration
//!
//! 1. `RUST_LOG` (highest priority)
//! 2. `trace_level` from the config file or `SIMPLE_NOTES_TRACE_LEVEL`
//! 3. Default: `"info"`
//!
//! ```rust,no_run
//! use simple_notes::observability::init_tracing;
//! use simple_notes::Config;
//!
//! let config = Config::default();
//! init_tracing(&config)?;
//! tracing::debug!("tracing is now active");
//! # Ok::<(), simple_notes::NotesError>(())
//! ```

mod exporter;
mod file_writer;
mod init;

pub use exporter::{tracer_provider, OtlpFileExporter, SCOPE_NAME};
pub use file_writer::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, TRACE_FILE_NAME};
