//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! This module does not reach into index internals; report builders go
//! through the same diagnostics surface hosts use.

pub mod metrics;
pub(crate) mod sink;

// re-exports
pub use crate::db::IndexReport;
pub use metrics::{EventOps, EventState};
pub use sink::{MetricsEvent, MetricsSink, with_metrics_sink};

use crate::db::ValueIndex;

/// Build a point-in-time index snapshot report for observability surfaces.
#[must_use]
pub fn index_report(index: &ValueIndex) -> IndexReport {
    index.report()
}

/// Snapshot the current metrics counters.
#[must_use]
pub fn metrics_report() -> EventState {
    metrics::report()
}

/// Reset all metrics counters.
pub fn metrics_reset() {
    metrics::reset();
}
