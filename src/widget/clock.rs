//! Wall-clock abstraction
//!
//! Lock and recovery timestamps are taken through [`Clock`] so transitions
//! stay deterministic under test.

use chrono::{DateTime, Local};

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that always reports the same instant.
#[allow(unused)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
