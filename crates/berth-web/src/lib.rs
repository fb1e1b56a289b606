//! Berth browser bindings
//!
//! Runs the widget core against the live page through `web-sys` and exposes
//! it to scripts as the `WidgetProvider` class.
//!
//! ```js
//! import init, { initLogging, WidgetProvider } from "./berth_web.js";
//!
//! await init();
//! initLogging("debug");
//! const widget = new WidgetProvider({ widgetUrl: "https://app.example.com/" });
//! ```

mod convert;
mod dom;
mod error;
mod listeners;
mod logging;
mod provider;
mod runtime;

pub use dom::WebDom;
pub use error::WebError;
pub use logging::init_logging;
pub use provider::{provide_widget, WidgetProvider};

use berth_widget::protocol::is_origin_allowed;
use berth_widget::{resolve_edge, Verb, MSG_PREFIX};
use wasm_bindgen::prelude::*;

/// Message type constants: `MSG_PREFIX` plus one `MSG_TYPE_*` per verb
///
/// Verb values are bare; the prefix is added on the wire.
#[wasm_bindgen(js_name = messageTypes)]
pub fn message_types() -> js_sys::Object {
    let types = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&types, &"MSG_PREFIX".into(), &MSG_PREFIX.into());
    for verb in Verb::ALL {
        let _ = js_sys::Reflect::set(
            &types,
            &verb.constant_name().into(),
            &verb.as_str().into(),
        );
    }
    types
}

/// Snap edge for a set of boundary contacts, e.g. `"top-left"`
#[wasm_bindgen(js_name = resolveEdge)]
pub fn resolve_edge_js(at_left: bool, at_right: bool, at_top: bool, at_bottom: bool) -> Option<String> {
    resolve_edge(at_left, at_right, at_top, at_bottom).map(|edge| edge.as_str().to_string())
}

/// Whether messages from `origin` pass the `allowed` list
#[wasm_bindgen(js_name = isOriginAllowed)]
pub fn is_origin_allowed_js(origin: &str, allowed: Vec<String>) -> bool {
    is_origin_allowed(origin, &allowed)
}
