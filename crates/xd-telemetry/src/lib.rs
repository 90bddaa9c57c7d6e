//! # XD Telemetry
//!
//! Structured logging and Prometheus metrics for the messaging agents.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an env filter, pretty or JSON output
//! - **Metrics**: process-wide Prometheus registry, text exposition via
//!   [`gather`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use xd_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env().with_route("test1", "test2"))?;
//!     // agents run here
//!     Ok(())
//! }
//! ```
//!
//! The `xd-relayer` binary in `xd-06-relayer` is the caller.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XD_AGENT` | `xd-relayer` | Agent name in logs |
//! | `XD_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `XD_LOG_FORMAT` | `pretty` (`json` in containers) | `pretty`, `compact` or `json` |
//! | `XD_DUMP_METRICS` | `false` | Print metrics on exit |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::{LogFormat, TelemetryConfig};
pub use metrics::{
    gather, register_metrics, HistogramTimer, CHECKPOINTS_CACHED, CHECKPOINT_REJECTIONS,
    LATEST_CHECKPOINT_INDEX, MESSAGES_DISPATCHED, MESSAGES_PROCESSED, OUTBOX_FAILURES,
    PROCESS_REJECTIONS, PROOF_BUILD_DURATION, REGISTRY,
};
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    TracerInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register metrics and install the tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_tracing(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
