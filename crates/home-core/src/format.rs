//! Timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as an RFC 3339 UTC string with millisecond precision,
/// e.g. `2025-12-08T14:03:07.123Z`.
pub fn timestamp_now() -> String {
    format_timestamp(&Utc::now())
}

/// Format a time the way event timestamps are stored.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Long display date, e.g. `December 8, 2025`.
pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%B %-d, %Y").to_string()
}

/// Reformat a stored event timestamp as a display date.
///
/// Returns `None` if the input is not RFC 3339.
pub fn display_date(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| format_date(&t.with_timezone(&Utc)))
}
