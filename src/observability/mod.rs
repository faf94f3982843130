//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans and events from `tracing` macros flow through an
//! `tracing-opentelemetry` layer into an `opentelemetry_sdk` tracer provider
//! whose exporter writes OTLP JSON lines to disk:
//!
//! ```text
//! tracing → OpenTelemetryLayer → TracerProvider → OtlpFileExporter → RotatingFile
//! ```
//!
//! Traces land in `~/.local/share/zellij/zcatalog/zcatalog-otlp.json`
//! (reached through Zellij's `/host` mount), rotated at 10 MB with three
//! backups.
//!
//! # Modules
//!
//! - [`export`]: Span exporter and OTLP JSON encoding
//! - [`rotate`]: Size-rotated log file

mod export;
mod rotate;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "zcatalog";
const TRACE_FILE: &str = "zcatalog-otlp.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `"debug"` or `"zcatalog::catalog=trace"`), defaulting to `"info"`. An
/// invalid directive falls back to the default.
///
/// Best effort: if the data directory cannot be created tracing stays off.
/// Only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = export::tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    tracing::debug!(level = directive, "tracing initialized");
}
