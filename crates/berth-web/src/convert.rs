//! Conversions between JS values and the core's Rust types
//!
//! Structured data crosses the boundary as JSON text, parsed on the far side
//! with `JSON.parse` / `serde_json`.

use berth_dom::PointerInput;
use berth_widget::{InboundMessage, WidgetError, WidgetOptions};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MessageEvent, PointerEvent};

use crate::error::WebError;

/// Readable form of a thrown JS value
pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// JSON value to a JS value
pub(crate) fn to_js(value: &Value) -> Result<JsValue, WebError> {
    js_sys::JSON::parse(&value.to_string()).map_err(|_| WebError::NotJson)
}

/// JS value to JSON; `undefined` becomes `null`
pub(crate) fn from_js(value: &JsValue) -> Result<Value, WebError> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(value)
        .ok()
        .and_then(|text| text.as_string())
        .ok_or(WebError::NotJson)?;
    Ok(serde_json::from_str(&text)?)
}

/// Parse provider options from a plain JS object
///
/// `parentContainer` is an element, not data, and is left out.
pub(crate) fn options_from_js(value: &JsValue) -> Result<WidgetOptions, WebError> {
    let data = match value.dyn_ref::<js_sys::Object>() {
        Some(object) => {
            let copy = js_sys::Object::assign(&js_sys::Object::new(), object);
            let _ = js_sys::Reflect::delete_property(&copy, &"parentContainer".into());
            from_js(&copy)?
        }
        None => from_js(value)?,
    };
    // Missing options read as an empty object so the URL check reports it
    let data = match data {
        Value::Null => Value::Object(Default::default()),
        data => data,
    };
    let options = serde_json::from_value(data).map_err(WidgetError::InvalidOptions)?;
    Ok(options)
}

/// `parentContainer` element carried in the options object, if any
pub(crate) fn parent_from_js(value: &JsValue) -> Option<HtmlElement> {
    js_sys::Reflect::get(value, &"parentContainer".into())
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub(crate) fn pointer_input(event: &PointerEvent) -> PointerInput {
    PointerInput {
        pointer_id: event.pointer_id(),
        button: event.button(),
        client_x: f64::from(event.client_x()),
        client_y: f64::from(event.client_y()),
    }
}

/// Message event as seen by the core; unreadable data becomes `null`
pub(crate) fn inbound_message(event: &MessageEvent) -> InboundMessage<js_sys::Object> {
    InboundMessage {
        origin: event.origin(),
        source: event.source(),
        data: from_js(&event.data()).unwrap_or(Value::Null),
    }
}
