//! Storage worker message types.
//!
//! This module defines the request and response protocol between the UI loop
//! and the background storage worker task. Requests carry the caller's trace
//! context so worker spans join the trace that triggered them.

use crate::domain::{Note, NotePatch};

/// Distributed tracing context for linking worker spans to their caller.
///
/// Captures the OpenTelemetry trace and span IDs of the span that posted the
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span has no valid OpenTelemetry context
    /// (for example when tracing is not initialized).
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors for `WorkerMessage` variants that attach the
/// current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    list_notes(ListNotes {}),
    create_note(CreateNote { partial: NotePatch }),
    update_note(UpdateNote { id: String, patch: NotePatch, reason: UpdateReason }),
    delete_note(DeleteNote { id: String }),
}

/// Why an update was requested. Echoed back so the reducer knows how to
/// apply the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReason {
    /// Persisting the editor draft.
    Save,
    /// Toggling the pinned flag.
    Pin,
    /// Changing the color tag.
    Color,
}

/// Store operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update(UpdateReason),
    Delete,
}

/// Requests sent from the UI loop to the storage worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch the full note collection.
    ListNotes {
        trace_context: Option<TraceContext>,
    },

    /// Create a note from a partial set of fields.
    CreateNote {
        partial: NotePatch,
        trace_context: Option<TraceContext>,
    },

    /// Apply a patch to an existing note.
    UpdateNote {
        id: String,
        patch: NotePatch,
        reason: UpdateReason,
        trace_context: Option<TraceContext>,
    },

    /// Remove a note.
    DeleteNote {
        id: String,
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Short name used as a span field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ListNotes { .. } => "list_notes",
            Self::CreateNote { .. } => "create_note",
            Self::UpdateNote { .. } => "update_note",
            Self::DeleteNote { .. } => "delete_note",
        }
    }

    /// Trace context attached when the message was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::ListNotes { trace_context }
            | Self::CreateNote { trace_context, .. }
            | Self::UpdateNote { trace_context, .. }
            | Self::DeleteNote { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the storage worker back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The collection was listed.
    NotesLoaded { notes: Vec<Note> },

    /// A note was created.
    NoteCreated { note: Note },

    /// A note was updated.
    NoteUpdated { note: Note, reason: UpdateReason },

    /// A note was deleted.
    NoteDeleted { id: String },

    /// The operation failed. `message` is user-facing.
    Failed { operation: Operation, message: String },
}
