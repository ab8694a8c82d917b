//! Calendar text for epoch-millisecond timestamps (UTC).

use chrono::{DateTime, Utc};

use crate::error::SerializeError;

fn to_datetime(millis: i64) -> Result<DateTime<Utc>, SerializeError> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(SerializeError::InvalidTimestamp(millis))
}

/// `YYYY-MM-DD`, the lexical form of `xsd:date`.
pub fn format_date(millis: i64) -> Result<String, SerializeError> {
    Ok(to_datetime(millis)?.format("%Y-%m-%d").to_string())
}

/// `YYYY-MM-DDTHH:MM:SS`, the lexical form of `xsd:dateTime` without a zone.
pub fn format_date_time(millis: i64) -> Result<String, SerializeError> {
    Ok(to_datetime(millis)?.format("%Y-%m-%dT%H:%M:%S").to_string())
}

