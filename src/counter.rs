//! Global event counting for experiment instrumentation

use std::sync::atomic::{AtomicU64, Ordering};

/// A process wide event counter, updated with relaxed ordering
#[derive(Debug)]
pub struct GlobalCounter(AtomicU64);

impl GlobalCounter {
    /// Create a new counter starting at zero
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Add `amount` to the counter
    pub fn increase(&self, amount: u64) {
        self.0.fetch_add(amount, Ordering::Relaxed);
    }

    /// The current counter value
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Reset the counter to zero
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

impl Default for GlobalCounter {
    fn default() -> Self {
        Self::new()
    }
}
