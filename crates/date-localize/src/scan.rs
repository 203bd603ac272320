//! Element scan
//!
//! Elements carrying the marker class hold their source values in data
//! attributes; the scan reads them, localizes, and replaces the element
//! text. The attributes themselves are never written, so rescanning an
//! element yields the same text.

use crate::interpolate::Translator;
use crate::localize::{DateLocalizer, LocalizationRequest, Localized};
use crate::resolve::Environment;

/// Data attribute keys, first match wins
const DATETIME_KEYS: &[&str] = &["datetime", "date"];
const TIME_ZONE_KEYS: &[&str] = &["time_zone", "timezone"];
const LOCALE_KEYS: &[&str] = &["locale", "language"];
const FORMAT_KEYS: &[&str] = &["format"];
const STRING_KEYS: &[&str] = &["string"];

/// An element tagged for localization
pub trait LocalizableElement {
    /// Value of `data-<key>`, if present
    fn data(&self, key: &str) -> Option<String>;

    /// Replace the element's text content
    fn set_text(&mut self, text: &str);
}

impl<T: LocalizableElement + ?Sized> LocalizableElement for &mut T {
    fn data(&self, key: &str) -> Option<String> {
        (**self).data(key)
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}

fn first_data<El: LocalizableElement + ?Sized>(element: &El, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| element.data(key))
}

impl LocalizationRequest {
    /// Build a request from an element's data attributes
    pub fn from_element<El: LocalizableElement + ?Sized>(element: &El) -> Self {
        Self {
            raw_datetime: first_data(element, DATETIME_KEYS),
            time_zone: first_data(element, TIME_ZONE_KEYS),
            locale: first_data(element, LOCALE_KEYS),
            format: first_data(element, FORMAT_KEYS),
            raw_string: first_data(element, STRING_KEYS),
        }
    }
}

impl<E: Environment, T: Translator> DateLocalizer<E, T> {
    /// Localize one element in place
    pub fn localize_element<El: LocalizableElement + ?Sized>(&self, element: &mut El) -> Localized {
        let result = self.localize_detailed(&LocalizationRequest::from_element(element));
        element.set_text(&result.text);
        result
    }

    /// Localize every element, returning how many were updated
    pub fn localize_elements<I>(&self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: LocalizableElement,
    {
        let mut count = 0;
        for mut element in elements {
            self.localize_element(&mut element);
            count += 1;
        }
        count
    }
}
