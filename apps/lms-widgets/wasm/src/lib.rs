//! WASM bindings for LMS page widgets
//!
//! Two independent pieces share this module:
//! - `localized_times`: rewrites every marked datetime on the page in the
//!   viewer's time zone and language
//! - `jsinput`: the choice widget that a problem page embeds in a frame and
//!   grades over a cross-origin channel
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { localizeTimes, JsInputWidget } from './pkg/lms_widgets_wasm.js';
//!
//! await init();
//!
//! localizeTimes();                          // defaults
//! localizeTimes({ marker_class: 'due' });   // custom marker
//!
//! const widget = new JsInputWidget({ scope: 'JSInput' });
//! widget.setState('{"availableChoices":["A","B"],"selectedChoice":"A"}');
//! ```

pub mod environment;
pub mod jsinput;
pub mod localized_times;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use environment::BrowserEnvironment;
pub use jsinput::JsInputWidget;
pub use localized_times::{format_course_date, localize_datetime, localize_times};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"LMS widgets WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window object available"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))
}

/// Deserialize an optional JS object; `undefined` and `null` give the default
pub(crate) fn from_js_or_default<T>(value: JsValue) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use date_localize::LocalizerConfig;
    use jsinput_core::BridgeConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_version_matches_package() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }

    #[wasm_bindgen_test]
    fn test_missing_options_use_defaults() {
        let config: LocalizerConfig = from_js_or_default(JsValue::UNDEFINED).unwrap();
        assert_eq!(config, LocalizerConfig::default());

        let config: BridgeConfig = from_js_or_default(JsValue::NULL).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_wrong_option_type_is_rejected() {
        let result: Result<BridgeConfig, _> = from_js_or_default(JsValue::from_f64(3.0));
        assert!(result.is_err());
    }
}
