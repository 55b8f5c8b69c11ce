//! The host constructors used to build events
//!
//! Rather than looking `Event` and `CustomEvent` up on the global object at every call, the
//! bindings are resolved once into a [`Constructors`] value which is then passed to whoever
//! needs to build events. Tests can hand in shims, and code running against another realm
//! (an iframe, a worker global) can hand in that realm's constructors.
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::EventError;
use crate::event::BasicEvent;
use crate::init::EventInit;

const EVENT: &str = "Event";
const CUSTOM_EVENT: &str = "CustomEvent";

#[derive(Debug, Clone)]
pub struct Constructors {
    event: Function,
    custom_event: Function,
}
impl Constructors {
    pub fn new(event: Function, custom_event: Function) -> Self {
        Self {
            event,
            custom_event,
        }
    }

    /// Resolves `Event` and `CustomEvent` from `global`
    pub fn from_global(global: &Object) -> Result<Self, EventError> {
        let event = lookup(global, EVENT)?;
        let custom_event = lookup(global, CUSTOM_EVENT)?;

        Ok(Self::new(event, custom_event))
    }

    /// Resolves the constructors from the global object of the current realm
    pub fn global() -> Result<Self, EventError> {
        Self::from_global(&js_sys::global())
    }

    #[inline]
    pub fn event_constructor(&self) -> &Function {
        &self.event
    }

    #[inline]
    pub fn custom_event_constructor(&self) -> &Function {
        &self.custom_event
    }

    /// `new Event(type_)`
    pub fn event(&self, type_: &str) -> Result<BasicEvent, EventError> {
        log::trace!("constructing Event {:?}", type_);
        construct(&self.event, &Array::of1(&JsValue::from_str(type_)))
    }

    /// `new Event(type_, init)`
    pub fn event_with(&self, type_: &str, init: EventInit) -> Result<BasicEvent, EventError> {
        log::trace!("constructing Event {:?} with {:?}", type_, init);
        let dict = init.to_object()?;
        construct(&self.event, &Array::of2(&JsValue::from_str(type_), &dict))
    }

    /// `new CustomEvent(type_, data)`
    ///
    /// `data` is the constructor's init dictionary, so the payload goes under its `detail` key
    /// and any `bubbles`/`cancelable`/`composed` keys it carries set those flags. Values the
    /// host cannot read as a dictionary are rejected by the host.
    pub fn custom(&self, type_: &str, data: &JsValue) -> Result<BasicEvent, EventError> {
        log::trace!("constructing CustomEvent {:?} with {:?}", type_, data);
        construct(
            &self.custom_event,
            &Array::of2(&JsValue::from_str(type_), data),
        )
    }

    /// `new CustomEvent(type_, { detail, ...init })`, with `detail` taken as the payload itself
    pub fn custom_with(
        &self,
        type_: &str,
        detail: &JsValue,
        init: EventInit,
    ) -> Result<BasicEvent, EventError> {
        log::trace!("constructing CustomEvent {:?} with {:?}", type_, init);
        let dict = init.to_custom_object(detail)?;
        construct(
            &self.custom_event,
            &Array::of2(&JsValue::from_str(type_), &dict),
        )
    }
}

fn lookup(global: &Object, name: &'static str) -> Result<Function, EventError> {
    let value = Reflect::get(global, &JsValue::from_str(name))?;

    match value.dyn_into::<Function>() {
        Ok(constructor) => Ok(constructor),
        Err(value) => {
            log::debug!("global `{}` is not a function: {:?}", name, value);
            Err(EventError::MissingConstructor(name))
        }
    }
}

fn construct(constructor: &Function, arguments: &Array) -> Result<BasicEvent, EventError> {
    let value = Reflect::construct(constructor, arguments)?;

    // Shims and constructors from other realms are not `instanceof` this realm's `Event`
    Ok(BasicEvent::from(value.unchecked_into::<web_sys::Event>()))
}
