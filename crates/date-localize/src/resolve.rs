//! Preference resolution
//!
//! Templates render unset user preferences as the literal string `"None"`
//! (Python's `str(None)`); views that build the context in JavaScript pass
//! empty strings instead. Both mean "ask the environment".

use chrono_tz::Tz;
use tracing::debug;

use crate::error::LocalizeError;
use crate::format::DateFormat;

/// Runtime-reported preferences, used only when the caller supplied none
pub trait Environment {
    /// IANA zone name reported by the runtime (e.g. the browser's `Intl` zone)
    fn time_zone(&self) -> Option<String>;

    /// User language reported by the runtime (e.g. `navigator.language`)
    fn language(&self) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn time_zone(&self) -> Option<String> {
        (**self).time_zone()
    }

    fn language(&self) -> Option<String> {
        (**self).language()
    }
}

/// Environment with fixed answers, for hosts without a browser and for tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub time_zone: Option<String>,
    pub language: Option<String>,
}

impl FixedEnvironment {
    pub fn new(time_zone: Option<&str>, language: Option<&str>) -> Self {
        Self {
            time_zone: time_zone.map(str::to_string),
            language: language.map(str::to_string),
        }
    }
}

impl Environment for FixedEnvironment {
    fn time_zone(&self) -> Option<String> {
        self.time_zone.clone()
    }

    fn language(&self) -> Option<String> {
        self.language.clone()
    }
}

/// A supplied preference, or `None` if it is absent, empty or `"None"`
pub fn preference(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "None")
}

/// Effective zone: the preference, else the environment, else `fallback`
pub fn resolve_time_zone<E>(requested: Option<&str>, environment: &E, fallback: &str) -> String
where
    E: Environment + ?Sized,
{
    if let Some(zone) = preference(requested) {
        return zone.to_string();
    }

    match environment.time_zone().filter(|z| !z.trim().is_empty()) {
        Some(zone) => {
            debug!(zone = %zone, "time zone taken from environment");
            zone
        }
        None => {
            debug!(zone = fallback, "no time zone preference, using fallback");
            fallback.to_string()
        }
    }
}

/// Effective locale: the preference, else the environment, else `fallback`
pub fn resolve_locale<E>(requested: Option<&str>, environment: &E, fallback: &str) -> String
where
    E: Environment + ?Sized,
{
    if let Some(locale) = preference(requested) {
        return locale.to_string();
    }

    match environment.language().filter(|l| !l.trim().is_empty()) {
        Some(locale) => {
            debug!(locale = %locale, "locale taken from environment");
            locale
        }
        None => {
            debug!(locale = fallback, "no locale preference, using fallback");
            fallback.to_string()
        }
    }
}

/// Look up an IANA zone name, exact spelling first, then ignoring case
pub fn parse_time_zone(zone: &str) -> Result<Tz, LocalizeError> {
    let zone = zone.trim();
    zone.parse::<Tz>()
        .ok()
        .or_else(|| Tz::from_str_insensitive(zone).ok())
        .ok_or_else(|| LocalizeError::UnknownTimeZone(zone.to_string()))
}

/// Effective display pattern: a preset name maps to its pattern, any other
/// non-empty value is used as-is, otherwise `default`
pub fn resolve_format(requested: Option<&str>, default: &str) -> String {
    match requested.filter(|f| !f.trim().is_empty()) {
        Some(format) => DateFormat::from_name(format.trim())
            .map(|preset| preset.pattern().to_string())
            .unwrap_or_else(|| format.to_string()),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_filters_none_and_empty() {
        assert_eq!(preference(None), None);
        assert_eq!(preference(Some("None")), None);
        assert_eq!(preference(Some("")), None);
        assert_eq!(preference(Some("   ")), None);
        assert_eq!(preference(Some("Europe/Paris")), Some("Europe/Paris"));
    }

    #[test]
    fn test_time_zone_prefers_supplied_value() {
        let env = FixedEnvironment::new(Some("Asia/Tokyo"), None);
        assert_eq!(
            resolve_time_zone(Some("America/New_York"), &env, "UTC"),
            "America/New_York"
        );
    }

    #[test]
    fn test_time_zone_none_uses_environment() {
        let env = FixedEnvironment::new(Some("Asia/Tokyo"), None);
        assert_eq!(resolve_time_zone(Some("None"), &env, "UTC"), "Asia/Tokyo");
        assert_eq!(resolve_time_zone(None, &env, "UTC"), "Asia/Tokyo");
    }

    #[test]
    fn test_time_zone_falls_back_when_environment_is_silent() {
        let env = FixedEnvironment::default();
        assert_eq!(resolve_time_zone(Some("None"), &env, "UTC"), "UTC");

        let env = FixedEnvironment::new(Some(""), None);
        assert_eq!(resolve_time_zone(None, &env, "UTC"), "UTC");
    }

    #[test]
    fn test_locale_resolution_order() {
        let env = FixedEnvironment::new(None, Some("fr-FR"));
        assert_eq!(resolve_locale(Some("ru"), &env, "en-US"), "ru");
        assert_eq!(resolve_locale(Some("None"), &env, "en-US"), "fr-FR");
        assert_eq!(resolve_locale(Some(""), &env, "en-US"), "fr-FR");

        let env = FixedEnvironment::default();
        assert_eq!(resolve_locale(None, &env, "en-US"), "en-US");
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(resolve_format(None, "ll"), "ll");
        assert_eq!(resolve_format(Some(""), "ll"), "ll");
        assert_eq!(resolve_format(Some("shortDate"), "LLLL"), "ll");
        assert_eq!(resolve_format(Some("time"), "ll"), "LTS z");
        assert_eq!(resolve_format(Some("YYYY"), "ll"), "YYYY");
    }

    #[test]
    fn test_parse_time_zone() {
        assert_eq!(parse_time_zone("America/New_York"), Ok(Tz::America__New_York));
        assert_eq!(parse_time_zone(" america/new_york "), Ok(Tz::America__New_York));
        assert_eq!(parse_time_zone("utc"), Ok(Tz::UTC));
        assert_eq!(
            parse_time_zone("Mars/Olympus"),
            Err(LocalizeError::UnknownTimeZone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_environment_by_reference() {
        let env = FixedEnvironment::new(Some("Asia/Tokyo"), Some("de"));
        let by_ref: &dyn Environment = &env;
        assert_eq!(resolve_time_zone(None, by_ref, "UTC"), "Asia/Tokyo");
        assert_eq!(resolve_locale(None, &by_ref, "en-US"), "de");
    }
}
