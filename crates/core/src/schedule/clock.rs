//! Wall-clock abstraction
//!
//! Classification depends on "now". Production code reads the system clock in
//! the display timezone; tests pin it with [`FixedClock`].

use std::sync::{PoisonError, RwLock};

use chrono::{Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current wall-clock time in the display timezone.
    fn now(&self) -> NaiveDateTime;
}

/// Real system clock projected into a timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Manually controlled clock
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: RwLock::new(now) }
    }

    /// Move the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Advance the clock by `by`.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}
