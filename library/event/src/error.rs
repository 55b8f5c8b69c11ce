use wasm_bindgen::JsValue;

use crate::phase::UnrecognizedPhase;

/// Failures surfaced while constructing or reading an event
///
/// Apart from [`EventError::UnrecognizedPhase`], every variant is the host reporting a problem;
/// this crate passes those along without retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error(transparent)]
    UnrecognizedPhase(#[from] UnrecognizedPhase),
    #[error("the host does not provide a callable `{0}` constructor")]
    MissingConstructor(&'static str),
    #[error("the host raised an exception: {0:?}")]
    Host(JsValue),
}
impl EventError {
    /// The value the host threw, if this error came from the host
    pub fn host_value(&self) -> Option<&JsValue> {
        match self {
            Self::Host(value) => Some(value),
            _ => None,
        }
    }
}
impl From<JsValue> for EventError {
    fn from(value: JsValue) -> Self {
        log::debug!("host raised {:?}", value);
        Self::Host(value)
    }
}
