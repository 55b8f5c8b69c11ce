use wasm_bindgen::JsCast;

use webevent::{BasicEvent, UnrecognizedPhase};

use super::*;

#[wasm_bindgen_test]
fn new_keeps_type_and_is_untrusted() {
    let event = webevent::new(&constructors(), "click").unwrap();

    assert_eq!(event.type_(), "click");
    assert!(!event.is_trusted());
    assert!(!event.bubbles());
    assert!(!event.cancelable());
    assert!(!event.composed());
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn new_event_is_outside_dispatch() {
    let event = webevent::new(&constructors(), "click").unwrap();

    assert_eq!(event.event_phase(), Ok(Phase::None));
    assert!(event.target().is_none());
    assert!(event.current_target().is_none());
}

#[wasm_bindgen_test]
fn plain_event_has_no_detail() {
    let event = webevent::new(&constructors(), "click").unwrap();

    assert_eq!(event.detail(), None);
    assert!(!event.is_custom());
}

#[wasm_bindgen_test]
fn ui_event_detail_is_not_a_custom_payload() {
    let mouse = web_sys::MouseEvent::new("click").unwrap();
    let event = BasicEvent::from(mouse.unchecked_into::<web_sys::Event>());

    assert!(!event.is_custom());
    assert_eq!(event.detail(), None);
}

#[wasm_bindgen_test]
fn custom_data_is_the_init_dictionary() {
    let data = object_with("detail", &JsValue::from_f64(42.0));
    let event = webevent::custom(&constructors(), "myevent", &data).unwrap();

    assert_eq!(event.type_(), "myevent");
    assert!(event.is_custom());
    assert_eq!(event.detail().and_then(|detail| detail.as_f64()), Some(42.0));
    assert!(!event.bubbles());
}

#[wasm_bindgen_test]
fn custom_data_may_set_flags() {
    let data = object_with("detail", &JsValue::from_f64(1.0));
    Reflect::set(&data, &JsValue::from_str("bubbles"), &JsValue::TRUE).unwrap();

    let event = webevent::custom(&constructors(), "myevent", &data).unwrap();

    assert!(event.bubbles());
    assert!(!event.cancelable());
    assert_eq!(event.detail().and_then(|detail| detail.as_f64()), Some(1.0));
}

#[wasm_bindgen_test]
fn custom_without_detail_has_null_payload() {
    let event = webevent::custom(&constructors(), "myevent", &Object::new()).unwrap();

    assert!(event.is_custom());
    assert_eq!(event.detail(), Some(JsValue::NULL));
}

#[wasm_bindgen_test]
fn custom_rejects_data_that_is_not_a_dictionary() {
    let err = webevent::custom(&constructors(), "myevent", &JsValue::from_str("forty-two"))
        .unwrap_err();

    assert!(err.host_value().is_some());
}

#[wasm_bindgen_test]
fn custom_with_keeps_payload_identity() {
    let payload = object_with("count", &JsValue::from_f64(42.0));
    let event = constructors()
        .custom_with("myevent", &payload, EventInit::new().cancelable(true))
        .unwrap();

    assert!(event.cancelable());
    assert!(Object::is(&event.detail().unwrap(), &payload));
}

#[wasm_bindgen_test]
fn custom_with_accepts_primitive_payloads() {
    let event = constructors()
        .custom_with("count", &JsValue::from_str("forty-two"), EventInit::new())
        .unwrap();

    assert_eq!(
        event.detail().and_then(|detail| detail.as_string()),
        Some("forty-two".to_string())
    );
}

#[wasm_bindgen_test]
fn out_of_range_phase_is_unrecognized() {
    let host_event = object_with("eventPhase", &JsValue::from_f64(7.0));
    let event = BasicEvent::from(host_event.unchecked_into::<web_sys::Event>());

    assert_eq!(event.event_phase(), Err(UnrecognizedPhase(7)));
}

#[wasm_bindgen_test]
fn init_flags_round_trip() {
    let host = constructors();
    let init = EventInit::new().bubbles(true).cancelable(true).composed(true);

    let event = host.event_with("submit", init).unwrap();
    assert!(event.bubbles());
    assert!(event.cancelable());
    assert!(event.composed());

    let event = host
        .custom_with("submit", &JsValue::NULL, EventInit::new().bubbles(true))
        .unwrap();
    assert!(event.bubbles());
    assert!(!event.cancelable());
    assert!(!event.composed());
}

#[wasm_bindgen_test]
fn prevent_default_is_a_no_op_unless_cancelable() {
    let host = constructors();

    let event = host.event("submit").unwrap();
    event.prevent_default();
    assert!(!event.default_prevented());

    let event = host
        .event_with("submit", EventInit::new().cancelable(true))
        .unwrap();
    event.prevent_default();
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn time_stamps_are_non_decreasing() {
    let host = constructors();

    let stamps: Vec<u64> = (0..16)
        .map(|_| host.event("tick").unwrap().time_stamp())
        .collect();

    for pair in stamps.windows(2) {
        assert!(pair[0] <= pair[1], "{:?}", stamps);
    }
}

#[wasm_bindgen_test]
fn timestamp_agrees_with_time_stamp() {
    let event = constructors().event("tick").unwrap();
    let millis = event.time_stamp();

    assert_eq!(event.elapsed().as_millis() as u64, millis);
    assert_eq!(event.timestamp(), webevent::time::from_millis(millis));
}
