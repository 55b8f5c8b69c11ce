//! Options accepted by the `Event` and `CustomEvent` constructors
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use crate::error::EventError;

/// The `EventInit` dictionary
///
/// All flags default to `false`, which is also what the host assumes when no dictionary is
/// passed at all.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
    pub composed: bool,
}
impl EventInit {
    pub const fn new() -> Self {
        Self {
            bubbles: false,
            cancelable: false,
            composed: false,
        }
    }

    pub const fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub const fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub const fn composed(mut self, composed: bool) -> Self {
        self.composed = composed;
        self
    }

    /// Renders the options as the dictionary the host constructors expect
    pub fn to_object(&self) -> Result<Object, EventError> {
        let dict = Object::new();
        set(&dict, "bubbles", &JsValue::from_bool(self.bubbles))?;
        set(&dict, "cancelable", &JsValue::from_bool(self.cancelable))?;
        set(&dict, "composed", &JsValue::from_bool(self.composed))?;
        Ok(dict)
    }

    /// Like [`EventInit::to_object`], with `detail` added for `CustomEvent`
    pub fn to_custom_object(&self, detail: &JsValue) -> Result<Object, EventError> {
        let dict = self.to_object()?;
        set(&dict, "detail", detail)?;
        Ok(dict)
    }
}

fn set(dict: &Object, key: &str, value: &JsValue) -> Result<(), EventError> {
    Reflect::set(dict, &JsValue::from_str(key), value)?;
    Ok(())
}
