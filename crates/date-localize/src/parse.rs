//! Raw datetime parsing
//!
//! Server templates hand us UTC timestamps in a few shapes: RFC 3339 from
//! the REST APIs, `str(datetime)` output with a space separator from the
//! Django templates, and bare dates for catalog fields. Everything is
//! anchored to UTC here; zone conversion happens at display time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::LocalizeError;

/// Offset-carrying layouts tried after RFC 3339
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Layouts without an offset, interpreted as UTC
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a raw datetime string into a UTC instant
///
/// Accepts RFC 3339, ISO-8601 with or without an offset (no offset means
/// UTC), a space instead of `T`, a trailing `Z` on space-separated input,
/// date-only `YYYY-MM-DD` (midnight UTC) and RFC 2822.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, LocalizeError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(LocalizeError::InvalidDate(raw.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(input, layout) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    // "2016-10-14 08:00:00Z" is not RFC 3339 but shows up in fixtures
    let naive_input = input
        .strip_suffix('Z')
        .or_else(|| input.strip_suffix('z'))
        .unwrap_or(input);

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_input, layout) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    Err(LocalizeError::InvalidDate(input.to_string()))
}
