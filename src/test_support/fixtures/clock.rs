// Deterministic clock for store tests.

use crate::core::ports::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// 2026-10-17 12:30:45 UTC, a Saturday.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 30, 45).unwrap()
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
