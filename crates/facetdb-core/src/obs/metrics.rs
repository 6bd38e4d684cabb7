use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for index operations.
///
/// State is thread-local, matching the single-threaded run-to-completion
/// habitat of the index itself. Counters never affect operation semantics.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Contract entrypoints
    pub create_calls: u64,
    pub query_calls: u64,
    pub exists_calls: u64,
    pub delete_calls: u64,

    // Bucket mutations
    pub entities_indexed: u64,
    pub duplicate_skips: u64,
    pub entities_removed: u64,
    pub missing_removes: u64,

    // Rows handed back to callers
    pub rows_returned: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn report() -> EventState {
    with_state(Clone::clone)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_accumulated_counters() {
        with_state_mut(|m| m.ops.create_calls = 7);
        assert_eq!(report().ops.create_calls, 7);

        reset();
        assert_eq!(report().ops.create_calls, 0);
    }
}
