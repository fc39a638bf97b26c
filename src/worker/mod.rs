//! Background storage worker.
//!
//! All persistence calls go through a worker task so the terminal loop never
//! blocks on disk or network I/O.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation, task spawning and the caller handle

pub mod handler;
pub mod messages;

pub use handler::{NotesWorker, WorkerHandle};
pub use messages::{Operation, TraceContext, UpdateReason, WorkerMessage, WorkerResponse};
