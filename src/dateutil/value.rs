use chrono::{DateTime, NaiveDateTime, TimeZone};

use super::{parse_str, DateError, Timestamp};

/// Input accepted by [`super::format_datetime`]: either a timestamp or text
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue<'a> {
    Timestamp(Timestamp),
    /// No offset attached, taken as UTC
    Naive(NaiveDateTime),
    Text(&'a str),
}

impl DateValue<'_> {
    /// Resolve to a timezone-aware timestamp
    ///
    /// Existing timestamps are returned unchanged, text is parsed.
    pub fn into_timestamp(self) -> Result<Timestamp, DateError> {
        match self {
            DateValue::Timestamp(ts) => Ok(ts),
            DateValue::Naive(naive) => Ok(naive.and_utc().fixed_offset()),
            DateValue::Text(s) => parse_str(s),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue<'_> {
    fn from(dt: DateTime<Tz>) -> Self {
        DateValue::Timestamp(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateValue<'_> {
    fn from(naive: NaiveDateTime) -> Self {
        DateValue::Naive(naive)
    }
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(s: &'a str) -> Self {
        DateValue::Text(s)
    }
}

impl<'a> From<&'a String> for DateValue<'a> {
    fn from(s: &'a String) -> Self {
        DateValue::Text(s.as_str())
    }
}
