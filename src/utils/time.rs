//! Time utilities: epoch-millisecond conversions and timestamp parsing.
//! Events are stored as epoch milliseconds, UTC; everything in memory
//! is a `DateTime<Utc>`.

use chrono::{DateTime, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_epoch_milli(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}

pub fn from_epoch_milli(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

/// Parse an RFC 3339 timestamp (e.g. `2026-08-06T12:30:00Z`) into UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
