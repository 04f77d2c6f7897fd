use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time window: inclusive start, exclusive end.
///
/// All prism timestamps are UTC; fixing the zone in the type keeps every
/// cube backend on the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build from epoch milliseconds, the encoding upstream time-range
    /// entities carry. Returns `None` when a value is out of the
    /// representable range.
    pub fn from_epoch_millis(start_ms: i64, end_ms: i64) -> Option<Self> {
        let start = DateTime::from_timestamp_millis(start_ms)?;
        let end = DateTime::from_timestamp_millis(end_ms)?;
        Some(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
