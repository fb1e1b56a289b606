//! Errors surfaced to scripts

use berth_dom::DomError;
use berth_widget::WidgetError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    /// A value could not be carried across as JSON
    #[error("value is not JSON-serializable")]
    NotJson,
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Thrown into JS as an `Error` object
impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
