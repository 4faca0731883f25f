//! Time sources for stamping todos.

use std::cell::Cell;

use chrono::{DateTime, Duration, Local};

/// Source of the current local time.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock backed by [`chrono::Local`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
///
/// Used by tests and demos that need reproducible timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Local>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    #[must_use]
    pub const fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock to `time`.
    pub fn set(&self, time: DateTime<Local>) {
        self.now.set(time);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
