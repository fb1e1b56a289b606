//! `Dom` implementation over web-sys
//!
//! Elements are `HtmlElement` handles; an iframe's browsing context is
//! identified by its content window as a plain `Object`, which is what a
//! `MessageEvent` reports as its source.

use berth_dom::{Dom, DomError, Rect, Size};
use serde_json::Value;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlIFrameElement, Window};

use crate::convert::{describe, to_js};

/// Browser document
#[derive(Clone, Debug)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the global window
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoDocument)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn content_window(&self, iframe: &HtmlElement) -> Option<Window> {
        iframe.dyn_ref::<HtmlIFrameElement>()?.content_window()
    }
}

fn tree_error(err: JsValue) -> DomError {
    DomError::Tree(describe(&err))
}

impl Dom for WebDom {
    type Node = HtmlElement;
    type FrameWindow = js_sys::Object;

    // =========================================================================
    // Tree
    // =========================================================================

    fn create_element(&self, tag: &str) -> Result<HtmlElement, DomError> {
        self.document
            .create_element(tag)
            .ok()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| DomError::CreateElement(tag.to_string()))
    }

    fn body(&self) -> Result<HtmlElement, DomError> {
        self.document.body().ok_or(DomError::NoDocument)
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<(), DomError> {
        parent.append_child(child).map(drop).map_err(tree_error)
    }

    fn insert_before(
        &self,
        parent: &HtmlElement,
        node: &HtmlElement,
        reference: &HtmlElement,
    ) -> Result<(), DomError> {
        parent
            .insert_before(node, Some(reference))
            .map(drop)
            .map_err(tree_error)
    }

    fn parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.parent_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }

    // =========================================================================
    // Content
    // =========================================================================

    fn set_attribute(&self, node: &HtmlElement, name: &str, value: &str) -> Result<(), DomError> {
        node.set_attribute(name, value)
            .map_err(|err| DomError::Attribute {
                name: name.to_string(),
                reason: describe(&err),
            })
    }

    fn set_inner_html(&self, node: &HtmlElement, html: &str) {
        node.set_inner_html(html);
    }

    // =========================================================================
    // Style
    // =========================================================================

    fn style(&self, node: &HtmlElement, property: &str) -> String {
        node.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        let style = node.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            warn!(property, value, error = %describe(&err), "style rejected");
        }
    }

    fn clear_style(&self, node: &HtmlElement) {
        node.style().set_css_text("");
    }

    fn set_style_next_frame(&self, node: &HtmlElement, property: &str, value: &str) {
        let callback = {
            let dom = self.clone();
            let node = node.clone();
            let (property, value) = (property.to_string(), value.to_string());
            Closure::once_into_js(move || dom.set_style(&node, &property, &value))
        };
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            debug!(error = %describe(&err), "no animation frame; applying style now");
            self.set_style(node, property, value);
        }
    }

    fn force_reflow(&self, node: &HtmlElement) {
        let _ = node.offset_width();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn bounding_rect(&self, node: &HtmlElement) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn viewport(&self) -> Size {
        let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(read(self.window.inner_width()), read(self.window.inner_height()))
    }

    // =========================================================================
    // Frames
    // =========================================================================

    fn frame_window(&self, iframe: &HtmlElement) -> Option<js_sys::Object> {
        self.content_window(iframe).map(Into::into)
    }

    fn frame_location_hash(&self, iframe: &HtmlElement) -> Option<String> {
        // Throws for a cross-origin document
        self.content_window(iframe)?.location().hash().ok()
    }

    fn set_frame_src(&self, iframe: &HtmlElement, url: &str) {
        match iframe.dyn_ref::<HtmlIFrameElement>() {
            Some(frame) => frame.set_src(url),
            None => {
                if let Err(err) = self.set_attribute(iframe, "src", url) {
                    warn!(error = %err, "cannot navigate frame");
                }
            }
        }
    }

    fn post_to_frame(
        &self,
        iframe: &HtmlElement,
        message: &Value,
        target_origin: &str,
    ) -> Result<(), DomError> {
        let window = self
            .content_window(iframe)
            .ok_or_else(|| DomError::PostMessage("frame has no content window".to_string()))?;
        let message = to_js(message).map_err(|err| DomError::PostMessage(err.to_string()))?;
        window
            .post_message(&message, target_origin)
            .map_err(|err| DomError::PostMessage(describe(&err)))
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn set_pointer_capture(&self, node: &HtmlElement, pointer_id: i32) {
        if let Err(err) = node.set_pointer_capture(pointer_id) {
            debug!(pointer_id, error = %describe(&err), "pointer capture failed");
        }
    }

    fn release_pointer_capture(&self, node: &HtmlElement, pointer_id: i32) {
        if let Err(err) = node.release_pointer_capture(pointer_id) {
            debug!(pointer_id, error = %describe(&err), "pointer release failed");
        }
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    fn request_fullscreen(&self, node: &HtmlElement) {
        if let Err(err) = node.request_fullscreen() {
            warn!(error = %describe(&err), "fullscreen request rejected");
        }
    }

    fn exit_fullscreen(&self) {
        self.document.exit_fullscreen();
    }

    fn fullscreen_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    // =========================================================================
    // Time
    // =========================================================================

    fn now_ms(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
