//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through `tracing-opentelemetry` into the file
//! exporter. Nothing is written to stdout or stderr; the terminal belongs to
//! the UI.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::{tracer_provider, SCOPE_NAME};
use crate::domain::error::{NotesError, Result};
use crate::Config;

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "simple-notes-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `info`. Calling this more than once is
/// harmless; only the first subscriber is kept.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the level
/// directive does not parse.
pub fn init_tracing(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;

    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info")),
    }
    .map_err(|e| NotesError::Config(format!("invalid trace level: {e}")))?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "simple-notes"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        KeyValue::new("notes.mode", config.mode().label()),
    ]);

    let provider = tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SCOPE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}
