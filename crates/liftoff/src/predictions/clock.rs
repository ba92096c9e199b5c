use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::domain::ClosureId;

/// Source of "now" for closure windows and prediction timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Produces identifiers for freshly built closures.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, prefix: &str, now: DateTime<Utc>) -> ClosureId;
}

/// Time-derived ids with a process-wide sequence so two closures built in the
/// same millisecond still differ.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    sequence: AtomicU64,
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, prefix: &str, now: DateTime<Utc>) -> ClosureId {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        ClosureId(format!("{prefix}-{}-{seq}", now.timestamp_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ids_are_distinct_within_the_same_instant() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let ids = TimestampIdGenerator::default();

        let first = ids.next_id("bc", now);
        let second = ids.next_id("bc", now);

        assert_ne!(first, second);
        assert!(first.0.starts_with(&format!("bc-{}", now.timestamp_millis())));
    }

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(FixedClock(now).now(), now);
    }
}
