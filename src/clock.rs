use chrono::{Local, NaiveDateTime};

// ============================================================================
// Clock - source of "now"
// ============================================================================
//
// Pickup options are generated from the clock once, at construction.
// Change envelopes are stamped from it on every mutation.
//
// ============================================================================

pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn new(moment: NaiveDateTime) -> Self {
        Self(moment)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
