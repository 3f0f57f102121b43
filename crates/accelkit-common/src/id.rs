use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static HANDLE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies one callback registered on one signal of one object.
///
/// Handles come from a single process-wide counter: they are positive,
/// strictly increasing in issue order, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SignalHandle(u64);

impl SignalHandle {
    /// Issue a fresh handle.
    pub fn next() -> Self {
        Self(HANDLE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SignalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
