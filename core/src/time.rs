//! Time related utils.

use crate::Error;
use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339.
///
/// All these examples are the same:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-13T07:20:04.000Z`
/// - `2022-03-01T08:00:00+08:00`
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| {
            Error::unexpected(format!("failed to parse rfc3339 time: {s}")).with_source(e)
        })?
        .with_timezone(&Utc))
}
