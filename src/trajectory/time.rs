use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::error;
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO-8601 timestamp. An explicit offset is normalised to UTC,
/// a timestamp without one is taken to already be in UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(time) => Ok(time.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
            .map(|time| Utc.from_utc_datetime(&time)),
    }
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value).map_err(|err| {
        error!("Rejected timestamp {:?}: {}", value, err);
        de::Error::custom(format!("invalid timestamp {:?}: {}", value, err))
    })
}

/// The closed time interval a segment was travelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeWindow { start, end }
    }

    /// Inclusive overlap test between this window and `other`.
    ///
    /// ### Note
    /// The comparison is kept in the form `self.start <= other.end &&
    /// self.end >= other.start` without normalising either window first.
    /// For windows whose end precedes their start (out of order samples)
    /// this is not the symmetric interval overlap, and changing it alters
    /// which crossing gets selected on such input.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}
