//! Localized datetimes in the page
//!
//! Finds every element with the marker class (`localized-datetime` by
//! default) and replaces its text with the localized value of its
//! `data-datetime`/`data-date` attribute.

use date_localize::{
    DateLocalizer, Environment, LocalizableElement, LocalizationRequest, LocalizerConfig,
    Translator,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::environment::BrowserEnvironment;
use crate::{from_js_or_default, document};

/// A marked DOM element
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl LocalizableElement for DomElement {
    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{}", key))
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Elements carrying `class`, in document order
pub fn marked_elements(document: &Document, class: &str) -> Vec<DomElement> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(DomElement::new)
        .collect()
}

/// Localize every marked element in `document`, returning the count
pub fn localize_document<E, T>(document: &Document, localizer: &DateLocalizer<E, T>) -> usize
where
    E: Environment,
    T: Translator,
{
    let elements = marked_elements(document, &localizer.config().marker_class);
    let count = elements.len();

    for mut element in elements {
        let result = localizer.localize_element(&mut element);
        if let Some(reason) = result.fallback {
            web_sys::console::warn_2(
                &"DateUtil Localization Error".into(),
                &JsValue::from_str(&reason.to_string()),
            );
        }
    }

    count
}

/// Localize all marked elements on the page
///
/// `config` is an optional object overriding `LocalizerConfig` fields.
#[wasm_bindgen(js_name = localizeTimes)]
pub fn localize_times(config: JsValue) -> Result<u32, JsValue> {
    let config: LocalizerConfig = from_js_or_default(config)?;
    let localizer = DateLocalizer::with_config(BrowserEnvironment, config);
    let count = localize_document(&document()?, &localizer);
    Ok(count as u32)
}

/// Localize a single context object
///
/// Accepts `{raw_datetime | datetime | date, time_zone | timezone,
/// locale | language, format, raw_string | string}`.
#[wasm_bindgen(js_name = localizeDatetime)]
pub fn localize_datetime(context: JsValue) -> Result<String, JsValue> {
    let request: LocalizationRequest = from_js_or_default(context)?;
    let localizer = DateLocalizer::new(BrowserEnvironment);
    Ok(localizer.localize(&request))
}

/// Short date for course listings ("Oct 14, 2016")
#[wasm_bindgen(js_name = formatCourseDate)]
pub fn format_course_date(raw: &str) -> String {
    DateLocalizer::new(BrowserEnvironment).format_course_date(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn marked_span(document: &Document, attrs: &[(&str, &str)]) -> Element {
        let span = document.create_element("span").unwrap();
        span.set_class_name("localized-datetime");
        for (name, value) in attrs {
            span.set_attribute(name, value).unwrap();
        }
        document.body().unwrap().append_child(&span).unwrap();
        span
    }

    #[wasm_bindgen_test]
    fn test_localize_times_updates_marked_elements() {
        let document = document().unwrap();
        let span = marked_span(
            &document,
            &[
                ("data-date", "2016-10-14T08:00:00Z"),
                ("data-time_zone", "America/New_York"),
                ("data-locale", "en-US"),
                ("data-string", "Due"),
            ],
        );

        let count = localize_times(JsValue::UNDEFINED).unwrap();

        assert!(count >= 1);
        assert_eq!(
            span.text_content().unwrap(),
            "Due Oct 14, 2016 04:00 EDT"
        );
        span.remove();
    }

    #[wasm_bindgen_test]
    fn test_rescan_is_idempotent() {
        let document = document().unwrap();
        let span = marked_span(
            &document,
            &[
                ("data-datetime", "2016-10-14T08:00:00Z"),
                ("data-time_zone", "UTC"),
                ("data-format", "shortDate"),
            ],
        );

        localize_times(JsValue::UNDEFINED).unwrap();
        let first = span.text_content().unwrap();
        localize_times(JsValue::UNDEFINED).unwrap();

        assert_eq!(first, "Oct 14, 2016");
        assert_eq!(span.text_content().unwrap(), first);
        assert_eq!(
            span.get_attribute("data-datetime").unwrap(),
            "2016-10-14T08:00:00Z"
        );
        span.remove();
    }

    #[wasm_bindgen_test]
    fn test_custom_marker_class() {
        let document = document().unwrap();
        let span = document.create_element("span").unwrap();
        span.set_class_name("due-date");
        span.set_attribute("data-date", "2016-10-14T08:00:00Z").unwrap();
        span.set_attribute("data-time_zone", "UTC").unwrap();
        document.body().unwrap().append_child(&span).unwrap();

        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"marker_class".into(), &"due-date".into()).unwrap();
        localize_times(config.into()).unwrap();

        assert_eq!(span.text_content().unwrap(), "Oct 14, 2016 08:00 UTC");
        span.remove();
    }

    #[wasm_bindgen_test]
    fn test_localize_datetime_context() {
        let context = js_sys::Object::new();
        js_sys::Reflect::set(&context, &"datetime".into(), &"2016-10-14T08:00:00Z".into())
            .unwrap();
        js_sys::Reflect::set(&context, &"timezone".into(), &"UTC".into()).unwrap();
        js_sys::Reflect::set(&context, &"language".into(), &"en".into()).unwrap();

        assert_eq!(
            localize_datetime(context.into()).unwrap(),
            "Oct 14, 2016 08:00 UTC"
        );
        assert_eq!(localize_datetime(JsValue::UNDEFINED).unwrap(), "");
    }
}
