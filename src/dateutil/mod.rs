mod error;
mod parse;
mod value;


pub use error::DateError;
pub use parse::parse_str;
pub use value::DateValue;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Timezone-aware timestamp used throughout the crate
pub type Timestamp = DateTime<FixedOffset>;

/// Parse an optional date/time string
///
/// `None` passes through as `Ok(None)`. Strings without an offset are
/// taken as UTC.
pub fn parse_datetime(value: Option<&str>) -> Result<Option<Timestamp>, DateError> {
    value.map(parse_str).transpose()
}

/// Format a timestamp, or a string holding one, as ISO-8601
///
/// Fractional seconds are only written when non-zero, the offset always is
/// (e.g. `2018-10-24T15:27:40.058353+00:00`).
pub fn format_datetime<'a>(value: impl Into<DateValue<'a>>) -> Result<String, DateError> {
    let timestamp = value.into().into_timestamp()?;
    Ok(timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

/// Current time in UTC with an explicit offset
pub fn now() -> Timestamp {
    Utc::now().fixed_offset()
}
