#![cfg(target_arch = "wasm32")]

use berth_web::{message_types, WidgetProvider};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn options(url: &str) -> JsValue {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"widgetUrl".into(), &url.into()).unwrap();
    options.into()
}

fn get(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn test_provider_attaches_container() {
    let widget = WidgetProvider::new(options("https://app.example.com/"), None).unwrap();

    let container = widget.container();
    assert!(container.is_connected());
    let iframe = widget.iframe();
    assert_eq!(
        iframe.get_attribute("src").as_deref(),
        Some("https://app.example.com/")
    );

    widget.destroy();
    assert!(!container.is_connected());
}

#[wasm_bindgen_test]
fn test_missing_url_throws() {
    let err = WidgetProvider::new(js_sys::Object::new().into(), None)
        .err()
        .unwrap();
    assert!(err.is_instance_of::<js_sys::Error>());

    assert!(WidgetProvider::new(JsValue::UNDEFINED, None).is_err());
}

#[wasm_bindgen_test]
fn test_state_snapshot_and_subscribe() {
    let widget = WidgetProvider::new(options("https://app.example.com/"), None).unwrap();

    let state = widget.get().unwrap();
    assert_eq!(get(&state, "visible"), JsValue::TRUE);
    assert_eq!(get(&state, "heightState").as_string().as_deref(), Some("normal"));

    let seen = js_sys::Array::new();
    let push = js_sys::Function::new_with_args("s", "this.push(s.visible)")
        .bind(&seen);
    let unsubscribe = widget.subscribe(push);
    widget.hide();
    assert_eq!(seen.length(), 2);
    assert_eq!(seen.get(1), JsValue::FALSE);

    unsubscribe.call0(&JsValue::NULL).unwrap();
    widget.show();
    assert_eq!(seen.length(), 2);

    widget.destroy();
}

#[wasm_bindgen_test]
fn test_unknown_preset_throws() {
    let widget = WidgetProvider::new(options("https://app.example.com/"), None).unwrap();
    assert!(widget.set_preset("sideways").is_err());
    assert!(widget.set_preset("float").is_ok());
    widget.destroy();
}

#[wasm_bindgen_test]
fn test_message_types() {
    let types = message_types();
    assert_eq!(
        get(&types, "MSG_PREFIX").as_string().as_deref(),
        Some("@@__widget_provider__@@")
    );
    assert_eq!(
        get(&types, "MSG_TYPE_MAXIMIZE_HEIGHT").as_string().as_deref(),
        Some("__maximizeHeight")
    );
    assert!(get(&types, "MSG_TYPE_READY").dyn_ref::<js_sys::JsString>().is_some());
}
