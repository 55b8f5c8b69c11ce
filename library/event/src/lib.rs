//! Bindings for the platform `Event` object.
//!
//! Everything here forwards to the host: the browser owns the event, advances its dispatch
//! phase, and decides what `preventDefault` and the propagation commands actually do. This
//! crate only gives those reads and commands Rust types.
//!
//! Events are built through an explicit [`Constructors`] value rather than by reaching into
//! the global object, so callers decide which `Event`/`CustomEvent` bindings are used.
//!
//! ```ignore
//! use webevent::{Constructors, Event, EventInit, Phase};
//!
//! let host = Constructors::global()?;
//! let event = host.event_with("submit", EventInit::default().cancelable(true))?;
//! event.prevent_default();
//! assert!(event.default_prevented());
//! assert_eq!(event.event_phase()?, Phase::None);
//! ```
pub mod error;
mod event;
pub mod host;
pub mod init;
pub mod logging;
pub mod phase;
pub mod target;
pub mod time;

use wasm_bindgen::JsValue;

pub use self::error::EventError;
pub use self::event::{BasicEvent, Event};
pub use self::host::Constructors;
pub use self::init::EventInit;
pub use self::phase::{Phase, UnrecognizedPhase};
pub use self::target::Target;

/// Constructs a plain event of type `type_` with the host's default flags
pub fn new(host: &Constructors, type_: &str) -> Result<BasicEvent, EventError> {
    host.event(type_)
}

/// Constructs a custom event of type `type_`, passing `data` as the `CustomEvent` init
/// dictionary, e.g. `{ detail: 42 }`
pub fn custom(host: &Constructors, type_: &str, data: &JsValue) -> Result<BasicEvent, EventError> {
    host.custom(type_, data)
}
