//! Deterministic helpers for tests and demos.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::{Arc, RwLock};

/// Clock frozen at a chosen instant until explicitly advanced.
///
/// Clones share the same instant, so a test can keep a handle and advance
/// time while the engine owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Creates a clock frozen at noon UTC on `date`.
    ///
    /// Noon keeps the local calendar date equal to `date` for every time zone
    /// within eleven hours of UTC.
    #[must_use]
    pub fn at_noon(date: NaiveDate) -> Self {
        let noon = NaiveTime::MIN + TimeDelta::hours(12);
        Self::new(date.and_time(noon).and_utc())
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        if let Ok(mut now) = self.now.write() {
            *now += delta;
        }
    }

    fn current(&self) -> DateTime<Utc> {
        self.now
            .read()
            .map_or(DateTime::<Utc>::MIN_UTC, |now| *now)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.current().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.current()
    }
}
