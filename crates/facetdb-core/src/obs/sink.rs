//! Metrics sink boundary.
//!
//! Index logic MUST NOT depend on `obs::metrics` directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between index operations
//! and the thread-local metrics state.

use crate::{
    db::index::{IndexInsertOutcome, IndexRemoveOutcome},
    obs::metrics,
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    Create { outcome: IndexInsertOutcome },
    Query { rows: u64 },
    Exists,
    Delete { outcome: IndexRemoveOutcome },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::Create { outcome } => {
                metrics::with_state_mut(|m| {
                    m.ops.create_calls = m.ops.create_calls.saturating_add(1);
                    match outcome {
                        IndexInsertOutcome::Inserted => {
                            m.ops.entities_indexed = m.ops.entities_indexed.saturating_add(1);
                        }
                        IndexInsertOutcome::Skipped => {
                            m.ops.duplicate_skips = m.ops.duplicate_skips.saturating_add(1);
                        }
                    }
                });
            }

            MetricsEvent::Query { rows } => {
                metrics::with_state_mut(|m| {
                    m.ops.query_calls = m.ops.query_calls.saturating_add(1);
                    m.ops.rows_returned = m.ops.rows_returned.saturating_add(rows);
                });
            }

            MetricsEvent::Exists => {
                metrics::with_state_mut(|m| {
                    m.ops.exists_calls = m.ops.exists_calls.saturating_add(1);
                });
            }

            MetricsEvent::Delete { outcome } => {
                metrics::with_state_mut(|m| {
                    m.ops.delete_calls = m.ops.delete_calls.saturating_add(1);
                    match outcome {
                        IndexRemoveOutcome::Removed => {
                            m.ops.entities_removed = m.ops.entities_removed.saturating_add(1);
                        }
                        IndexRemoveOutcome::Skipped => {
                            m.ops.missing_removes = m.ops.missing_removes.saturating_add(1);
                        }
                    }
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in
        //   `with_metrics_sink`, which always restores the previous pointer
        //   before returning, including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the shared
        //   borrow used to install the override.
        unsafe { (*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Run a closure with a temporary metrics sink override.
///
/// Events recorded inside the closure go to `sink` instead of the
/// thread-local counter state.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // Lifetime is erased to a raw pointer; the Guard restores the previous
    // slot on all exits, so the pointer never outlives the borrowed sink.
    // SAFETY: only the lifetime is extended for storage in the 'static
    // thread-local slot; the Guard below removes it before `sink` (or this
    // function) can go out of scope.
    let sink_static: &'static dyn MetricsSink = unsafe { std::mem::transmute(sink) };
    let sink_ptr: *const dyn MetricsSink = sink_static;
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
