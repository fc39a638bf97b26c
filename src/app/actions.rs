//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! [`NotesController`](crate::app::NotesController) executes them in order:
//! storage requests go to the background worker, `Quit` ends the loop.

use crate::worker::WorkerMessage;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the storage worker.
    ///
    /// The completion arrives later as
    /// [`Event::Worker`](crate::app::Event::Worker).
    PostToWorker(WorkerMessage),

    /// Leaves the application.
    Quit,
}
