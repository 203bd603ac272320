//! Display patterns
//!
//! Patterns use the moment.js token language the LMS templates already
//! carry in their `data-format` attributes: `ll HH[:]mm z`, `LLLL`, etc.
//! Text inside `[...]` is copied verbatim.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::locale::LocaleData;

/// Pattern used when no format is supplied: "Jan 2, 2014 15:30 UTC"
pub const DEFAULT_DATE_TIME_FORMAT: &str = "ll HH[:]mm z";

/// Pattern used by the validity fallback: "Jan 2, 2014 at 15:30 UTC"
pub const FALLBACK_DATE_TIME_FORMAT: &str = "ll [at] HH[:]mm z";

/// Named format presets accepted in place of a raw pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    /// "Jan 1, 2016"
    ShortDate,
    /// "Friday, January 1, 2016 6:01 AM"
    LongDate,
    /// "6:01:00 AM UTC"
    Time,
    /// "Jan 2, 2014 15:30 UTC"
    DefaultFormat,
}

impl DateFormat {
    pub const ALL: [DateFormat; 4] = [
        DateFormat::ShortDate,
        DateFormat::LongDate,
        DateFormat::Time,
        DateFormat::DefaultFormat,
    ];

    /// Preset name as written in templates
    pub fn name(self) -> &'static str {
        match self {
            DateFormat::ShortDate => "shortDate",
            DateFormat::LongDate => "longDate",
            DateFormat::Time => "time",
            DateFormat::DefaultFormat => "defaultFormat",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::ShortDate => "ll",
            DateFormat::LongDate => "LLLL",
            DateFormat::Time => "LTS z",
            DateFormat::DefaultFormat => DEFAULT_DATE_TIME_FORMAT,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Tokens in match order: longer tokens sharing a prefix come first
const TOKENS: &[&str] = &[
    "YYYY", "YY", "MMMM", "MMM", "MM", "M", "Do", "DD", "D", "dddd", "ddd", "dd", "d", "HH", "H",
    "hh", "h", "mm", "m", "ss", "s", "A", "a", "zz", "z", "ZZ", "Z", "X", "x",
];

const LONG_DATE_TOKENS: &[&str] = &[
    "LTS", "LT", "LLLL", "LLL", "LL", "L", "llll", "lll", "ll", "l",
];

/// Render `dt` with a display pattern in the given locale
///
/// Long-date tokens (`LL`, `ll`, `LTS`, ...) are expanded from the locale
/// first, then the remaining tokens are substituted. Unrecognized
/// characters pass through unchanged.
pub fn format_datetime<Tz>(dt: &DateTime<Tz>, pattern: &str, locale: &LocaleData) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let expanded = expand_long_date_tokens(pattern, locale);
    render(dt, &expanded, locale)
}

fn expand_long_date_tokens(pattern: &str, locale: &LocaleData) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(len) = bracketed_len(rest) {
            out.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }

        let expansion = LONG_DATE_TOKENS.iter().find_map(|token| {
            rest.strip_prefix(token)
                .and_then(|after| locale.long_date_format(token).map(|f| (f, after)))
        });

        match expansion {
            Some((format, after)) => {
                out.push_str(&format);
                rest = after;
            }
            None => {
                let c = rest.chars().next().unwrap_or_default();
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

/// Length of a leading `[...]` literal including the brackets
fn bracketed_len(s: &str) -> Option<usize> {
    if !s.starts_with('[') {
        return None;
    }
    s.find(']').map(|end| end + 1)
}

fn render<Tz>(dt: &DateTime<Tz>, pattern: &str, locale: &LocaleData) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(len) = bracketed_len(rest) {
            out.push_str(&rest[1..len - 1]);
            rest = &rest[len..];
            continue;
        }

        match TOKENS.iter().find(|token| rest.starts_with(**token)) {
            Some(token) => {
                out.push_str(&field(dt, token, locale));
                rest = &rest[token.len()..];
            }
            None => {
                let c = rest.chars().next().unwrap_or_default();
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn field<Tz>(dt: &DateTime<Tz>, token: &str, locale: &LocaleData) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let month0 = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };

    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "MMMM" => locale.months[month0].to_string(),
        "MMM" => locale.months_short[month0].to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "Do" => locale.ordinal(dt.day()),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => locale.weekdays[weekday].to_string(),
        "ddd" => locale.weekdays_short[weekday].to_string(),
        "dd" => locale.weekdays_min[weekday].to_string(),
        "d" => weekday.to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", hour12),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "A" => locale.meridiem(dt.hour(), false),
        "a" => locale.meridiem(dt.hour(), true),
        "z" | "zz" => dt.offset().to_string(),
        "Z" => utc_offset(dt, true),
        "ZZ" => utc_offset(dt, false),
        "X" => dt.timestamp().to_string(),
        "x" => dt.timestamp_millis().to_string(),
        _ => token.to_string(),
    }
}

fn utc_offset<Tz: TimeZone>(dt: &DateTime<Tz>, colon: bool) -> String {
    let seconds = dt.offset().fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    if colon {
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    } else {
        format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{lookup, EN};
    use chrono::Utc;
    use chrono_tz::Tz;
    use pretty_assertions::assert_eq;

    fn at(raw: &str, zone: &str) -> DateTime<Tz> {
        let tz: Tz = zone.parse().unwrap();
        DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Utc)
            .with_timezone(&tz)
    }

    #[test]
    fn test_default_format_new_york_dst() {
        let dt = at("2016-10-14T08:00:00Z", "America/New_York");
        assert_eq!(
            format_datetime(&dt, DEFAULT_DATE_TIME_FORMAT, &EN),
            "Oct 14, 2016 04:00 EDT"
        );
    }

    #[test]
    fn test_default_format_new_york_standard_time() {
        let dt = at("2016-12-14T08:00:00Z", "America/New_York");
        assert_eq!(
            format_datetime(&dt, DEFAULT_DATE_TIME_FORMAT, &EN),
            "Dec 14, 2016 03:00 EST"
        );
    }

    #[test]
    fn test_fallback_format_in_utc() {
        let dt = at("2014-01-02T15:30:00Z", "UTC");
        assert_eq!(
            format_datetime(&dt, FALLBACK_DATE_TIME_FORMAT, &EN),
            "Jan 2, 2014 at 15:30 UTC"
        );
    }

    #[test]
    fn test_presets() {
        let dt = at("2016-01-01T06:01:00Z", "UTC");
        assert_eq!(
            format_datetime(&dt, DateFormat::ShortDate.pattern(), &EN),
            "Jan 1, 2016"
        );
        assert_eq!(
            format_datetime(&dt, DateFormat::LongDate.pattern(), &EN),
            "Friday, January 1, 2016 6:01 AM"
        );
        assert_eq!(
            format_datetime(&dt, DateFormat::Time.pattern(), &EN),
            "6:01:00 AM UTC"
        );
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in DateFormat::ALL {
            assert_eq!(DateFormat::from_name(preset.name()), Some(preset));
        }
        assert_eq!(DateFormat::from_name("ll"), None);
    }

    #[test]
    fn test_locale_specific_long_dates() {
        let dt = at("2016-10-14T08:00:00Z", "Europe/London");
        assert_eq!(
            format_datetime(&dt, "ll HH[:]mm z", lookup("ru")),
            "14 окт. 2016 г. 09:00 BST"
        );
        assert_eq!(format_datetime(&dt, "LL", lookup("fr")), "14 octobre 2016");
        assert_eq!(format_datetime(&dt, "LL", lookup("de")), "14. Oktober 2016");
        assert_eq!(
            format_datetime(&dt, "LL", lookup("es")),
            "14 de octubre de 2016"
        );
        assert_eq!(format_datetime(&dt, "L", lookup("en-GB")), "14/10/2016");
    }

    #[test]
    fn test_numeric_tokens() {
        let dt = at("2009-03-05T21:07:09Z", "UTC");
        assert_eq!(
            format_datetime(&dt, "YYYY-MM-DD HH:mm:ss", &EN),
            "2009-03-05 21:07:09"
        );
        assert_eq!(format_datetime(&dt, "YY M D H m s", &EN), "09 3 5 21 7 9");
        assert_eq!(format_datetime(&dt, "hh:mm a", &EN), "09:07 pm");
        assert_eq!(format_datetime(&dt, "dddd ddd dd d", &EN), "Thursday Thu Th 4");
        assert_eq!(format_datetime(&dt, "Do MMMM", &EN), "5th March");
    }

    #[test]
    fn test_offset_tokens() {
        let dt = at("2016-10-14T08:00:00Z", "Asia/Kolkata");
        assert_eq!(format_datetime(&dt, "Z", &EN), "+05:30");
        assert_eq!(format_datetime(&dt, "ZZ", &EN), "+0530");

        let dt = at("2016-10-14T08:00:00Z", "America/New_York");
        assert_eq!(format_datetime(&dt, "Z", &EN), "-04:00");
    }

    #[test]
    fn test_unix_tokens() {
        let dt = at("1970-01-01T00:00:01Z", "UTC");
        assert_eq!(format_datetime(&dt, "X", &EN), "1");
        assert_eq!(format_datetime(&dt, "x", &EN), "1000");
    }

    #[test]
    fn test_brackets_are_literal() {
        let dt = at("2016-10-14T08:00:00Z", "UTC");
        assert_eq!(
            format_datetime(&dt, "[Due] LL [at] HH[h]", &EN),
            "Due October 14, 2016 at 08h"
        );
        // unterminated bracket is kept as-is
        assert_eq!(format_datetime(&dt, "[YYYY", &EN), "[2016");
    }

    #[test]
    fn test_empty_and_literal_only_patterns() {
        let dt = at("2016-10-14T08:00:00Z", "UTC");
        assert_eq!(format_datetime(&dt, "", &EN), "");
        assert_eq!(format_datetime(&dt, "[]", &EN), "");
        assert_eq!(format_datetime(&dt, "---", &EN), "---");
    }
}
