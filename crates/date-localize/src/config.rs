//! Localizer configuration
//!
//! Every field has a default, so pages only pass what they override:
//!
//! ```
//! use date_localize::LocalizerConfig;
//!
//! let config = LocalizerConfig::from_json(r#"{"fallback_locale": "en-GB"}"#).unwrap();
//! assert_eq!(config.fallback_locale, "en-GB");
//! assert_eq!(config.fallback_time_zone, "UTC");
//! ```

use serde::{Deserialize, Serialize};

use crate::format::{DEFAULT_DATE_TIME_FORMAT, FALLBACK_DATE_TIME_FORMAT};

/// Class that marks elements for localization
pub const MARKER_CLASS: &str = "localized-datetime";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizerConfig {
    /// Zone used when neither the element nor the environment has one
    pub fallback_time_zone: String,
    /// Locale used when neither the element nor the environment has one
    pub fallback_locale: String,
    /// Pattern used when the element has no `data-format`
    pub default_format: String,
    /// Pattern rendered in UTC/en when localization fails
    pub fallback_format: String,
    /// Class scanned by the element driver
    pub marker_class: String,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            fallback_time_zone: "UTC".to_string(),
            fallback_locale: "en-US".to_string(),
            default_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            fallback_format: FALLBACK_DATE_TIME_FORMAT.to_string(),
            marker_class: MARKER_CLASS.to_string(),
        }
    }
}

impl LocalizerConfig {
    /// Parse configuration from JSON, filling in defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LocalizerConfig::default();
        assert_eq!(config.fallback_time_zone, "UTC");
        assert_eq!(config.fallback_locale, "en-US");
        assert_eq!(config.default_format, "ll HH[:]mm z");
        assert_eq!(config.fallback_format, "ll [at] HH[:]mm z");
        assert_eq!(config.marker_class, "localized-datetime");
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            LocalizerConfig::from_json("{}").unwrap(),
            LocalizerConfig::default()
        );
    }

    #[test]
    fn test_partial_override() {
        let config =
            LocalizerConfig::from_json(r#"{"marker_class": "due-date", "default_format": "LLLL"}"#)
                .unwrap();
        assert_eq!(config.marker_class, "due-date");
        assert_eq!(config.default_format, "LLLL");
        assert_eq!(config.fallback_locale, "en-US");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(LocalizerConfig::from_json("{").is_err());
    }
}
