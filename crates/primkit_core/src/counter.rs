//! Process-wide counter.
//!
//! # Responsibility
//! - Provide an explicit `Counter` state object with increment/read/reset.
//! - Back the free `increment_counter`/`get_counter`/`reset_counter` API with
//!   one process-wide instance, initialized to zero at process start.
//!
//! # Invariants
//! - Each individual operation is atomic; increments wrap at `i32::MAX`.
//! - A sequence of operations is not atomic as a group. Callers that need
//!   "reset then read" semantics across threads must serialize externally.

use log::trace;
use std::sync::atomic::{AtomicI32, Ordering};

static PROCESS_COUNTER: Counter = Counter::new();

/// Integer counter with atomic storage.
///
/// Relaxed ordering is enough: the value does not publish any other memory.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI32,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            value: AtomicI32::new(0),
        }
    }

    /// Adds one, wrapping on overflow.
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Sets the value back to zero.
    pub fn reset(&self) {
        let previous = self.value.swap(0, Ordering::Relaxed);
        trace!("event=counter_reset module=counter status=ok previous={previous}");
    }
}

/// Returns the process-wide counter instance.
pub fn process_counter() -> &'static Counter {
    &PROCESS_COUNTER
}

/// Increments the process-wide counter.
pub fn increment_counter() {
    PROCESS_COUNTER.increment();
}

/// Reads the process-wide counter.
pub fn get_counter() -> i32 {
    PROCESS_COUNTER.get()
}

/// Resets the process-wide counter to zero.
pub fn reset_counter() {
    PROCESS_COUNTER.reset();
}
