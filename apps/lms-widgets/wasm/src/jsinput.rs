//! Embedded choice widget
//!
//! Lists the choices in the first `<select>` carrying the selector class and
//! tracks the learner's pick. When the page is framed by a problem page,
//! `getGrade`, `getState` and `setState` are bound on a jschannel
//! `Channel` scoped to the parent window.

use std::cell::RefCell;
use std::rc::Rc;

use jsinput_core::{
    exposed_methods, BridgeConfig, BridgeError, ChoiceOption, ChoiceSelector, GradingBridge,
    RpcMethod,
};
use js_sys::{Function, Object, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement, Window};

use crate::{document, from_js_or_default};

#[wasm_bindgen]
extern "C" {
    /// jschannel's `Channel`, loaded by the host page
    pub type Channel;

    #[wasm_bindgen(static_method_of = Channel, catch)]
    fn build(options: &Object) -> Result<Channel, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn bind(this: &Channel, method: &str, callback: &Function) -> Result<(), JsValue>;
}

type SharedBridge = Rc<RefCell<GradingBridge<DomSelector>>>;

fn js_error(value: JsValue) -> BridgeError {
    BridgeError::Selector(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn to_js(error: BridgeError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Report a failed `setState` on the console and convert it for JS
fn rejected_state(error: BridgeError) -> JsValue {
    let message = error.to_string();
    web_sys::console::warn_2(
        &"JSInput setState rejected".into(),
        &JsValue::from_str(&message),
    );
    JsValue::from_str(&message)
}

/// Whether this window is embedded in another page's frame
pub fn is_framed(window: &Window) -> bool {
    match window.parent() {
        Ok(Some(parent)) => !Object::is(window.as_ref(), parent.as_ref()),
        _ => false,
    }
}

/// The `<select>` element listing the choices
pub struct DomSelector(HtmlSelectElement);

impl DomSelector {
    pub fn new(select: HtmlSelectElement) -> Self {
        Self(select)
    }

    pub fn element(&self) -> &HtmlSelectElement {
        &self.0
    }
}

impl ChoiceSelector for DomSelector {
    fn clear_options(&mut self) -> Result<(), BridgeError> {
        while let Some(child) = self.0.first_child() {
            self.0.remove_child(&child).map_err(js_error)?;
        }
        Ok(())
    }

    fn append_option(&mut self, option: &ChoiceOption) -> Result<(), BridgeError> {
        let element = HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
            &option.label,
            &option.value,
            false,
            option.selected,
        )
        .map_err(js_error)?;
        self.0.append_child(&element).map_err(js_error)?;
        Ok(())
    }
}

fn find_select(document: &Document, class: &str) -> Result<HtmlSelectElement, JsValue> {
    document
        .get_elements_by_class_name(class)
        .item(0)
        .ok_or_else(|| JsValue::from_str(&format!("No element with class '{}'", class)))?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| JsValue::from_str(&format!("Element with class '{}' is not a <select>", class)))
}

/// Text of the currently selected option, if any
fn selected_label(select: &HtmlSelectElement) -> Option<String> {
    let index = select.selected_index();
    if index < 0 {
        return None;
    }
    select
        .options()
        .item(index as u32)?
        .dyn_into::<HtmlOptionElement>()
        .ok()
        .map(|option| option.text())
}

/// Channel params as text: strings pass through, anything else is JSON
fn params_text(params: &JsValue) -> Option<String> {
    if params.is_undefined() || params.is_null() {
        return None;
    }
    params
        .as_string()
        .or_else(|| JSON::stringify(params).ok().map(String::from))
}

/// The choice widget, wired to the page
#[wasm_bindgen]
pub struct JsInputWidget {
    bridge: SharedBridge,
    config: BridgeConfig,
}

#[wasm_bindgen]
impl JsInputWidget {
    /// Attach to the page's selector and, when framed, bind the channel
    ///
    /// `config` is an optional object overriding `BridgeConfig` fields;
    /// `framed` is always detected from the window.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsInputWidget, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let config: BridgeConfig = from_js_or_default(config)?;
        let config = config.framed(is_framed(&window));

        let select = find_select(&document()?, &config.selector_class)?;
        let bridge: SharedBridge = Rc::new(RefCell::new(GradingBridge::new(DomSelector::new(
            select.clone(),
        ))));

        listen_for_changes(&select, &bridge)?;

        let methods = exposed_methods(&config);
        if !methods.is_empty() {
            if let Some(parent) = window.parent()? {
                bind_channel(&parent, &config, methods, &bridge)?;
            }
        }

        web_sys::console::log_1(&JsValue::from_str(&format!(
            "JSInput widget ready (framed: {})",
            config.framed
        )));

        Ok(Self { bridge, config })
    }

    /// Whether the channel procedures were bound
    #[wasm_bindgen(getter)]
    pub fn framed(&self) -> bool {
        self.config.framed
    }

    #[wasm_bindgen(js_name = getGrade)]
    pub fn get_grade(&self) -> String {
        self.bridge.borrow().get_grade()
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<String, JsValue> {
        self.bridge.borrow().get_state().map_err(to_js)
    }

    /// Replace the state and rebuild the selector
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&self, payload: &str) -> Result<(), JsValue> {
        self.bridge
            .borrow_mut()
            .set_state(payload)
            .map_err(rejected_state)
    }
}

fn listen_for_changes(select: &HtmlSelectElement, bridge: &SharedBridge) -> Result<(), JsValue> {
    let target = select.clone();
    let bridge = Rc::clone(bridge);

    let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(label) = selected_label(&target) {
            bridge.borrow_mut().select_choice(&label);
        }
    }) as Box<dyn FnMut(_)>);

    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_change.forget();
    Ok(())
}

fn bind_channel(
    parent: &Window,
    config: &BridgeConfig,
    methods: &[RpcMethod],
    bridge: &SharedBridge,
) -> Result<(), JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"window".into(), parent)?;
    Reflect::set(&options, &"origin".into(), &config.origin.as_str().into())?;
    Reflect::set(&options, &"scope".into(), &config.scope.as_str().into())?;
    let channel = Channel::build(&options)?;

    for &method in methods {
        let bridge = Rc::clone(bridge);
        let handler = Closure::wrap(Box::new(
            move |transaction: JsValue, params: JsValue| -> Result<JsValue, JsValue> {
                let mut bridge = bridge.borrow_mut();
                let result = match method {
                    RpcMethod::SetState => {
                        let payload = params_text(&params).ok_or(BridgeError::MissingPayload);
                        payload
                            .and_then(|p| bridge.set_state_from_transport(transaction, &p))
                            .map(|()| None)
                            .map_err(rejected_state)
                    }
                    other => bridge.dispatch(other, None).map_err(to_js),
                };
                match result? {
                    Some(text) => Ok(JsValue::from_str(&text)),
                    None => Ok(JsValue::UNDEFINED),
                }
            },
        )
            as Box<dyn FnMut(JsValue, JsValue) -> Result<JsValue, JsValue>>);

        channel.bind(method.name(), handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(())
}
