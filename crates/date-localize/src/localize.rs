//! UTC datetime localization
//!
//! Turns a raw UTC timestamp plus optional user preferences into a display
//! string. Preferences fall back to the environment and then to fixed
//! defaults; if rendering still fails the instant is shown in UTC with the
//! fallback pattern, so an element always ends up with readable text.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LocalizerConfig;
use crate::error::LocalizeError;
use crate::format::{format_datetime, DateFormat};
use crate::interpolate::{date_template, NoTranslation, Translator};
use crate::locale;
use crate::parse::parse_instant;
use crate::resolve::{
    parse_time_zone, resolve_format, resolve_locale, resolve_time_zone, Environment,
};

/// Rendered when moment.js could not make sense of an instant
pub const INVALID_DATE: &str = "Invalid date";

/// One element's worth of localization input
///
/// Field aliases accept both context-object spellings used by the page
/// scripts (`raw_datetime`/`datetime`, `locale`/`language`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationRequest {
    #[serde(alias = "datetime", alias = "date")]
    pub raw_datetime: Option<String>,
    #[serde(alias = "timezone")]
    pub time_zone: Option<String>,
    #[serde(alias = "language")]
    pub locale: Option<String>,
    pub format: Option<String>,
    #[serde(alias = "string")]
    pub raw_string: Option<String>,
}

impl LocalizationRequest {
    pub fn new(raw_datetime: impl Into<String>) -> Self {
        Self {
            raw_datetime: Some(raw_datetime.into()),
            ..Self::default()
        }
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_preset(self, preset: DateFormat) -> Self {
        self.with_format(preset.pattern())
    }

    pub fn with_string(mut self, raw_string: impl Into<String>) -> Self {
        self.raw_string = Some(raw_string.into());
        self
    }
}

/// Localization output with the reason the fallback was taken, if it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub text: String,
    pub fallback: Option<LocalizeError>,
}

impl Localized {
    fn empty() -> Self {
        Self {
            text: String::new(),
            fallback: None,
        }
    }
}

/// Localizes datetimes against an environment and a message catalog
#[derive(Debug, Clone)]
pub struct DateLocalizer<E, T = NoTranslation> {
    config: LocalizerConfig,
    environment: E,
    translator: T,
}

impl<E: Environment> DateLocalizer<E> {
    pub fn new(environment: E) -> Self {
        Self::with_config(environment, LocalizerConfig::default())
    }

    pub fn with_config(environment: E, config: LocalizerConfig) -> Self {
        Self {
            config,
            environment,
            translator: NoTranslation,
        }
    }
}

impl<E: Environment, T: Translator> DateLocalizer<E, T> {
    /// Swap in a message catalog for template strings
    pub fn with_translator<U: Translator>(self, translator: U) -> DateLocalizer<E, U> {
        DateLocalizer {
            config: self.config,
            environment: self.environment,
            translator,
        }
    }

    pub fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// Localize a request into display text
    ///
    /// Returns `""` when there is no raw datetime. Never fails: rendering
    /// problems are logged and replaced by the UTC fallback.
    pub fn localize(&self, request: &LocalizationRequest) -> String {
        self.localize_detailed(request).text
    }

    /// Like [`localize`](Self::localize), also reporting whether the
    /// fallback was used and why
    pub fn localize_detailed(&self, request: &LocalizationRequest) -> Localized {
        let raw = match request.raw_datetime.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Localized::empty(),
        };

        let zone = resolve_time_zone(
            request.time_zone.as_deref(),
            &self.environment,
            &self.config.fallback_time_zone,
        );
        let locale = resolve_locale(
            request.locale.as_deref(),
            &self.environment,
            &self.config.fallback_locale,
        );
        let format = resolve_format(request.format.as_deref(), &self.config.default_format);

        let (display_time, fallback) = match render(raw, &zone, &locale, &format) {
            Ok(text) => (text, None),
            Err(err) => {
                warn!(
                    raw = raw,
                    zone = %zone,
                    locale = %locale,
                    format = %format,
                    error = %err,
                    "DateUtil Localization Error"
                );
                (self.fallback_display(raw), Some(err))
            }
        };

        let text = match request.raw_string.as_deref() {
            Some(template) if !template.is_empty() => {
                date_template(&self.translator, template, &display_time)
            }
            _ => display_time,
        };

        Localized { text, fallback }
    }

    /// Localize a catalog date with the `shortDate` preset and no user
    /// preferences, as course cards do
    pub fn format_course_date(&self, raw: &str) -> String {
        self.localize(&LocalizationRequest::new(raw).with_preset(DateFormat::ShortDate))
    }

    fn fallback_display(&self, raw: &str) -> String {
        let rendered = parse_instant(raw).ok().map(|instant| {
            format_datetime(
                &instant.with_timezone(&Tz::UTC),
                &self.config.fallback_format,
                &locale::EN,
            )
        });

        match rendered {
            Some(text) if !text.trim().is_empty() => text,
            _ => raw.to_string(),
        }
    }
}

fn render(raw: &str, zone: &str, locale: &str, format: &str) -> Result<String, LocalizeError> {
    let instant: DateTime<Utc> = parse_instant(raw)?;
    // an unrecognized zone displays as UTC, keeping locale and pattern
    let tz = parse_time_zone(zone).unwrap_or_else(|err| {
        debug!(error = %err, "rendering in UTC");
        Tz::UTC
    });

    let text = format_datetime(&instant.with_timezone(&tz), format, locale::lookup(locale));
    if text.trim().is_empty() || text == INVALID_DATE {
        return Err(LocalizeError::EmptyOutput);
    }
    Ok(text)
}
