//! Localized display of UTC datetimes
//!
//! Server-rendered pages carry raw UTC timestamps in data attributes along
//! with the user's time zone and language preferences (or `"None"` when
//! unset). This crate turns those into display strings like
//! "Oct 14, 2016 04:00 EDT".
//!
//! ```
//! use date_localize::{DateLocalizer, FixedEnvironment, LocalizationRequest};
//!
//! let localizer = DateLocalizer::new(FixedEnvironment::default());
//! let request = LocalizationRequest::new("2016-10-14T08:00:00Z")
//!     .with_time_zone("America/New_York")
//!     .with_locale("en-US")
//!     .with_string("Due");
//!
//! assert_eq!(localizer.localize(&request), "Due Oct 14, 2016 04:00 EDT");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod interpolate;
pub mod locale;
pub mod localize;
pub mod parse;
pub mod resolve;
pub mod scan;

pub use config::{LocalizerConfig, MARKER_CLASS};
pub use error::LocalizeError;
pub use format::{format_datetime, DateFormat, DEFAULT_DATE_TIME_FORMAT, FALLBACK_DATE_TIME_FORMAT};
pub use interpolate::{interpolate, NoTranslation, Translator};
pub use localize::{DateLocalizer, LocalizationRequest, Localized};
pub use parse::parse_instant;
pub use resolve::{Environment, FixedEnvironment};
pub use scan::LocalizableElement;
