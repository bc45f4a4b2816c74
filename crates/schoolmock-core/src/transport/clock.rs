//! Wall-clock source for synthesized ids and timestamps.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Real time from the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock pinned to `millis` since the Unix epoch; falls back to the epoch
    /// when the value is out of chrono's range.
    pub fn from_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-15T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Identifier of the form `<prefix>-<epoch millis>`.
///
/// Two ids minted within the same millisecond collide.
pub fn mock_id(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{prefix}-{}", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "1970-01-01T00:00:00.000Z")]
    #[case(1_705_311_000_123, "2024-01-15T09:30:00.123Z")]
    fn test_iso_timestamp(#[case] millis: i64, #[case] expected: &str) {
        let clock = FixedClock::from_millis(millis);
        assert_eq!(iso_timestamp(clock.now()), expected);
    }

    #[rstest]
    fn test_mock_id_uses_epoch_millis() {
        let clock = FixedClock::from_millis(1_705_311_000_123);
        assert_eq!(mock_id("mock", clock.now()), "mock-1705311000123");
        assert_eq!(mock_id("obs", clock.now()), "obs-1705311000123");
    }

    #[rstest]
    fn test_iso_timestamp_parses_back() {
        let stamp = iso_timestamp(SystemClock.now());
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
        assert!(stamp.ends_with('Z'));
    }
}
