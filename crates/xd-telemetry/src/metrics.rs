//! Prometheus metrics for the messaging agents.
//!
//! All metrics follow the naming convention: `xd_<component>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: monotonically increasing (e.g. messages_dispatched_total)
//! - **Gauge**: current value (e.g. latest checkpoint index)
//! - **Histogram**: distribution (e.g. proof build duration)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge,
    Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // OUTBOX METRICS (Subsystem 4)
    // =========================================================================

    /// Messages committed by outboxes
    pub static ref MESSAGES_DISPATCHED: IntCounter = IntCounter::new(
        "xd_outbox_messages_dispatched_total",
        "Total number of messages dispatched"
    ).expect("metric creation failed");

    /// Outboxes halted by the validator manager
    pub static ref OUTBOX_FAILURES: IntCounter = IntCounter::new(
        "xd_outbox_failures_total",
        "Total number of outboxes failed"
    ).expect("metric creation failed");

    // =========================================================================
    // INBOX METRICS (Subsystem 5)
    // =========================================================================

    /// Checkpoints accepted by inboxes
    pub static ref CHECKPOINTS_CACHED: IntCounter = IntCounter::new(
        "xd_inbox_checkpoints_cached_total",
        "Total number of checkpoints cached"
    ).expect("metric creation failed");

    /// Checkpoints rejected by inboxes, by reason
    pub static ref CHECKPOINT_REJECTIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("xd_inbox_checkpoint_rejections_total", "Rejected checkpoints by reason"),
        &["reason"]  // signatures, stale
    ).expect("metric creation failed");

    /// Latest cached checkpoint index
    pub static ref LATEST_CHECKPOINT_INDEX: IntGauge = IntGauge::new(
        "xd_inbox_latest_checkpoint_index",
        "Index of the latest cached checkpoint"
    ).expect("metric creation failed");

    /// Messages delivered by inboxes
    pub static ref MESSAGES_PROCESSED: IntCounter = IntCounter::new(
        "xd_inbox_messages_processed_total",
        "Total number of messages processed"
    ).expect("metric creation failed");

    /// Messages rejected by inboxes, by reason
    pub static ref PROCESS_REJECTIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("xd_inbox_process_rejections_total", "Rejected process calls by reason"),
        &["reason"]
    ).expect("metric creation failed");

    // =========================================================================
    // RELAYER METRICS (Subsystem 6)
    // =========================================================================

    /// Time spent building inclusion proofs
    pub static ref PROOF_BUILD_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "xd_relayer_proof_build_duration_seconds",
            "Time spent building inclusion proofs"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Outbox
        Box::new(MESSAGES_DISPATCHED.clone()),
        Box::new(OUTBOX_FAILURES.clone()),
        // Inbox
        Box::new(CHECKPOINTS_CACHED.clone()),
        Box::new(CHECKPOINT_REJECTIONS.clone()),
        Box::new(LATEST_CHECKPOINT_INDEX.clone()),
        Box::new(MESSAGES_PROCESSED.clone()),
        Box::new(PROCESS_REJECTIONS.clone()),
        // Relayer
        Box::new(PROOF_BUILD_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics in the Prometheus text format.
pub fn gather() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
