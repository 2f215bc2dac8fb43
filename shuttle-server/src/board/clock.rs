//! Clock source for the refresh driver.

use chrono::Local;

use crate::domain::TimeOfDay;

/// Source of the current time of day.
///
/// The refresh driver reads the clock through this trait so the board can
/// be driven by a fixed time in tests (and by the `?at=` preview in the
/// web layer) without touching the host clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_time(Local::now().time())
    }
}

/// A clock frozen at a fixed time.
///
/// Useful for tests and for rendering the board as it would look at a
/// chosen moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
