use core::fmt;

use wasm_bindgen::{JsCast, JsValue};

use web_sys::CustomEvent;

use crate::phase::{Phase, UnrecognizedPhase};
use crate::target::Target;
use crate::time::{self, Duration, SystemTime};

const CUSTOM_EVENT: &str = "CustomEvent";

/// The reads and commands the host supports on an event
///
/// Every method forwards to the host object: nothing is cached, so a read made during
/// dispatch and one made afterwards may disagree.
pub trait Event {
    /// Whether the event propagates up through the target's ancestors
    fn bubbles(&self) -> bool;

    /// Whether `prevent_default` has any effect
    fn cancelable(&self) -> bool;

    /// Whether the event crosses shadow-root boundaries
    fn composed(&self) -> bool;

    /// The target whose listeners are currently running, or `None` outside of dispatch
    fn current_target(&self) -> Option<Target>;

    fn default_prevented(&self) -> bool;

    /// The current dispatch phase
    ///
    /// Values outside of the four phases the host defines are reported as an error rather
    /// than read as [`Phase::None`].
    fn event_phase(&self) -> Result<Phase, UnrecognizedPhase>;

    /// True when the host itself generated the event, false when script constructed it
    fn is_trusted(&self) -> bool;

    /// The object the event was dispatched to, or `None` if it never was
    fn target(&self) -> Option<Target>;

    /// Milliseconds since the host's time origin at which the event was created
    fn time_stamp(&self) -> u64;

    fn type_(&self) -> String;

    fn prevent_default(&self);

    fn stop_immediate_propagation(&self);

    fn stop_propagation(&self);

    /// [`Event::time_stamp`] as a `Duration`
    fn elapsed(&self) -> Duration {
        time::duration_from_millis(self.time_stamp())
    }

    /// [`Event::time_stamp`] read as an offset from the Unix epoch
    fn timestamp(&self) -> SystemTime {
        time::from_millis(self.time_stamp())
    }
}

/// An [`Event`] backed by a host `Event` object
///
/// This holds a handle to the object, not the object itself; the host decides when it is
/// collected.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicEvent(web_sys::Event);
impl BasicEvent {
    /// The `detail` payload of a `CustomEvent`
    ///
    /// Returns `None` for any other kind of event. UI events such as `MouseEvent` also have a
    /// `detail` (the click count), which is not a payload and is not returned here.
    pub fn detail(&self) -> Option<JsValue> {
        if self.is_custom() {
            Some(self.0.unchecked_ref::<CustomEvent>().detail())
        } else {
            None
        }
    }

    /// Returns true if the object is a `CustomEvent`
    ///
    /// Events created in another realm are not `instanceof` this realm's `CustomEvent`, so the
    /// name of the object's constructor is checked as well.
    pub fn is_custom(&self) -> bool {
        self.0.is_instance_of::<CustomEvent>() || self.0.constructor().name() == CUSTOM_EVENT
    }

    #[inline]
    pub fn as_web_sys(&self) -> &web_sys::Event {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> web_sys::Event {
        self.0
    }
}
impl Event for BasicEvent {
    fn bubbles(&self) -> bool {
        self.0.bubbles()
    }

    fn cancelable(&self) -> bool {
        self.0.cancelable()
    }

    fn composed(&self) -> bool {
        self.0.composed()
    }

    fn current_target(&self) -> Option<Target> {
        self.0.current_target().map(Target::from)
    }

    fn default_prevented(&self) -> bool {
        self.0.default_prevented()
    }

    fn event_phase(&self) -> Result<Phase, UnrecognizedPhase> {
        Phase::try_from(self.0.event_phase())
    }

    fn is_trusted(&self) -> bool {
        self.0.is_trusted()
    }

    fn target(&self) -> Option<Target> {
        self.0.target().map(Target::from)
    }

    fn time_stamp(&self) -> u64 {
        time::millis_from_host(self.0.time_stamp())
    }

    fn type_(&self) -> String {
        self.0.type_()
    }

    fn prevent_default(&self) {
        self.0.prevent_default()
    }

    fn stop_immediate_propagation(&self) {
        self.0.stop_immediate_propagation()
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation()
    }
}
impl From<web_sys::Event> for BasicEvent {
    #[inline]
    fn from(event: web_sys::Event) -> Self {
        Self(event)
    }
}
impl From<BasicEvent> for JsValue {
    #[inline]
    fn from(event: BasicEvent) -> Self {
        event.0.into()
    }
}
impl AsRef<web_sys::Event> for BasicEvent {
    #[inline]
    fn as_ref(&self) -> &web_sys::Event {
        &self.0
    }
}
impl AsRef<JsValue> for BasicEvent {
    #[inline]
    fn as_ref(&self) -> &JsValue {
        self.0.as_ref()
    }
}
impl fmt::Debug for BasicEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value: &JsValue = self.0.as_ref();
        f.debug_tuple("BasicEvent").field(value).finish()
    }
}
