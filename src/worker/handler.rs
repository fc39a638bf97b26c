//! Storage worker implementation.
//!
//! The worker owns the [`NoteStore`] and runs as its own tokio task, processing
//! one request at a time in arrival order. The UI loop posts requests through a
//! [`WorkerHandle`] and keeps handling input while they are in flight;
//! completions come back on the same handle.

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::domain::error::{NotesError, Result};
use crate::storage::{NoteStore, StorageMode};
use crate::worker::messages::Operation;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Executes storage requests against a note store.
pub struct NotesWorker {
    store: Box<dyn NoteStore>,
}

impl NotesWorker {
    #[must_use]
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn mode(&self) -> StorageMode {
        self.store.mode()
    }

    /// Maps a store result onto a response, logging the outcome.
    fn handle_store_result<T, F>(operation: Operation, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = ?operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = ?operation, error = %e, "storage operation failed");
                WorkerResponse::Failed {
                    operation,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Rebuilds the caller's OpenTelemetry context from the message.
    fn parent_context(message: &WorkerMessage) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }

    /// Processes a single request and returns its response.
    ///
    /// The operation runs inside a `worker_handle_message` span parented to
    /// the span that posted the message.
    pub async fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::debug_span!("worker_handle_message", message_type = message.kind());
        if let Some(parent) = Self::parent_context(&message) {
            span.set_parent(parent);
        }

        self.dispatch(message).instrument(span).await
    }

    async fn dispatch(&mut self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::ListNotes { .. } => {
                let result = self.store.list().await;
                Self::handle_store_result(Operation::List, result, |notes| {
                    tracing::debug!(count = notes.len(), "notes loaded");
                    WorkerResponse::NotesLoaded { notes }
                })
            }

            WorkerMessage::CreateNote { partial, .. } => {
                let result = self.store.create(partial).await;
                Self::handle_store_result(Operation::Create, result, |note| {
                    WorkerResponse::NoteCreated { note }
                })
            }

            WorkerMessage::UpdateNote { id, patch, reason, .. } => {
                let result = self.store.update(&id, patch).await;
                Self::handle_store_result(Operation::Update(reason), result, |note| {
                    WorkerResponse::NoteUpdated { note, reason }
                })
            }

            WorkerMessage::DeleteNote { id, .. } => {
                let result = self.store.delete(&id).await;
                Self::handle_store_result(Operation::Delete, result, |()| {
                    WorkerResponse::NoteDeleted { id }
                })
            }
        }
    }

    /// Moves the worker onto a tokio task and returns the handle to talk to it.
    ///
    /// Must be called from within a tokio runtime. The task ends when the
    /// handle is dropped.
    #[must_use]
    pub fn spawn(self) -> WorkerHandle {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        tokio::spawn(self.run(request_rx, response_tx));

        WorkerHandle {
            requests: request_tx,
            responses: response_rx,
        }
    }

    async fn run(
        mut self,
        mut requests: mpsc::UnboundedReceiver<WorkerMessage>,
        responses: mpsc::UnboundedSender<WorkerResponse>,
    ) {
        tracing::debug!(mode = %self.mode(), "storage worker started");

        while let Some(message) = requests.recv().await {
            let response = self.handle_message(message).await;
            if responses.send(response).is_err() {
                break;
            }
        }

        tracing::debug!("storage worker stopped");
    }
}

/// Caller side of a spawned [`NotesWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<WorkerMessage>,
    responses: mpsc::UnboundedReceiver<WorkerResponse>,
}

impl WorkerHandle {
    /// Queues a request without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Worker`] if the worker task has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        tracing::debug!(message_type = message.kind(), "posting to storage worker");
        self.requests
            .send(message)
            .map_err(|e| NotesError::Worker(format!("storage worker is gone: {e}")))
    }

    /// Waits for the next completion. `None` once the worker has stopped.
    pub async fn recv(&mut self) -> Option<WorkerResponse> {
        self.responses.recv().await
    }
}
