use core::fmt;

use wasm_bindgen::{JsCast, JsValue};

use web_sys::EventTarget;

/// An opaque handle to whatever an event is dispatched to
///
/// The referenced object belongs to the host. Cloning a `Target` clones the handle, and two
/// handles compare equal when they refer to the same host object.
#[derive(Clone, PartialEq, Eq)]
pub struct Target(EventTarget);
impl Target {
    /// Attempts to view the target as a more specific host type, e.g. `web_sys::HtmlFormElement`
    pub fn dyn_ref<T: JsCast>(&self) -> Option<&T> {
        self.0.dyn_ref::<T>()
    }

    /// Attempts to convert the target into a more specific host type, returning the handle
    /// unchanged on failure
    pub fn dyn_into<T: JsCast>(self) -> Result<T, Self> {
        self.0.dyn_into::<T>().map_err(Self)
    }

    #[inline]
    pub fn as_event_target(&self) -> &EventTarget {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> EventTarget {
        self.0
    }
}
impl From<EventTarget> for Target {
    #[inline]
    fn from(target: EventTarget) -> Self {
        Self(target)
    }
}
impl From<Target> for JsValue {
    #[inline]
    fn from(target: Target) -> Self {
        target.0.into()
    }
}
impl AsRef<EventTarget> for Target {
    #[inline]
    fn as_ref(&self) -> &EventTarget {
        &self.0
    }
}
impl AsRef<JsValue> for Target {
    #[inline]
    fn as_ref(&self) -> &JsValue {
        self.0.as_ref()
    }
}
impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value: &JsValue = self.0.as_ref();
        f.debug_tuple("Target").field(value).finish()
    }
}
