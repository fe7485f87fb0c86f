//! Time source used to fill in default time ranges.
//!
//! Operations that accept an optional `start`/`end` resolve missing bounds at
//! call time through a [`Clock`], so tests can pin "now".

use time::{Duration, OffsetDateTime};

/// One minute.
pub const MINUTE: Duration = Duration::minutes(1);
/// One hour.
pub const HOUR: Duration = Duration::hours(1);
/// One day.
pub const DAY: Duration = Duration::days(1);
/// One week.
pub const WEEK: Duration = Duration::days(7);
/// One month, counted as thirty days.
pub const MONTH: Duration = Duration::days(30);
/// One year, counted as 365 days.
pub const YEAR: Duration = Duration::days(365);

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> OffsetDateTime;

    /// The current time in whole seconds since the UNIX epoch.
    fn unix_timestamp(&self) -> i64 {
        self.now().unix_timestamp()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl FixedClock {
    /// A clock frozen at `timestamp` seconds since the UNIX epoch.
    ///
    /// Out-of-range timestamps fall back to the epoch.
    pub fn from_unix_timestamp(timestamp: i64) -> Self {
        Self(OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or(OffsetDateTime::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(datetime!(2024-01-01 0:00 UTC));
        assert_eq!(clock.unix_timestamp(), 1_704_067_200);
        assert_eq!(FixedClock::from_unix_timestamp(1_704_067_200).now(), clock.now());
    }

    #[test]
    fn test_spans() {
        assert_eq!(MONTH.whole_seconds(), 2_592_000);
        assert_eq!(DAY.whole_seconds(), 86_400);
        assert_eq!(WEEK, DAY * 7);
        assert_eq!(YEAR.whole_days(), 365);
        assert_eq!(HOUR, MINUTE * 60);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.unix_timestamp() > 1_704_067_200);
    }
}
