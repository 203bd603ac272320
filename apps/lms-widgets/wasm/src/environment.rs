//! Browser-reported preferences

use date_localize::Environment;
use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

/// Reads the zone from `Intl` and the language from `navigator`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn time_zone(&self) -> Option<String> {
        let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
        Reflect::get(&options, &JsValue::from_str("timeZone"))
            .ok()?
            .as_string()
    }

    fn language(&self) -> Option<String> {
        let navigator = web_sys::window()?.navigator();

        // old IE only reports userLanguage
        let user_language = Reflect::get(navigator.as_ref(), &JsValue::from_str("userLanguage"))
            .ok()
            .and_then(|v| v.as_string());

        user_language.or_else(|| navigator.language())
    }
}
