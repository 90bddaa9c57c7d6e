//! Subscriber setup: env filter plus one console layer in the configured
//! format.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::{TelemetryConfig, TelemetryError};

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;

    // JSON output for containers/production
    let json_layer = (config.log_format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
    });

    let compact_layer = (config.log_format == LogFormat::Compact).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
    });

    // Pretty output for development
    let pretty_layer = (config.log_format == LogFormat::Pretty).then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(compact_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;

    tracing::info!(
        agent = %config.display_name(),
        format = %config.log_format,
        "Tracing initialized"
    );

    Ok(())
}
