//! Script-facing widget provider

use std::cell::RefCell;
use std::rc::Rc;

use berth_widget::protocol::topic;
use berth_widget::{Axis, Bus, Store, StylePreset, Unsubscribe, Widget, WidgetState};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::convert::{describe, from_js, options_from_js, parent_from_js, to_js};
use crate::dom::WebDom;
use crate::error::WebError;
use crate::listeners::install;
use crate::runtime::Runtime;

/// An embedded widget on the page
///
/// Created with the widget options object:
///
/// ```js
/// const widget = new WidgetProvider({ widgetUrl: "https://app.example.com/" });
/// widget.onMessage("greet", (payload) => console.log(payload));
/// widget.show();
/// ```
#[wasm_bindgen]
pub struct WidgetProvider {
    runtime: Rc<Runtime>,
    state: Store<WidgetState>,
    messages: Bus,
    container: HtmlElement,
    iframe: HtmlElement,
    trigger: Option<HtmlElement>,
}

#[wasm_bindgen]
impl WidgetProvider {
    /// Build the widget DOM and start listening
    ///
    /// `parent` overrides `options.parentContainer`; with neither the widget
    /// is appended to the document body.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, parent: Option<HtmlElement>) -> Result<WidgetProvider, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let parent = parent.or_else(|| parent_from_js(&options));
        let options = options_from_js(&options)?;
        let dom = WebDom::new().map_err(WebError::from)?;
        let widget = Widget::provide(dom, options, parent).map_err(WebError::from)?;

        let state = widget.state_store();
        let messages = widget.message_bus();
        let container = widget.container().clone();
        let iframe = widget.iframe().clone();
        let trigger = widget.trigger().cloned();
        let web_dom = widget.dom().clone();

        let runtime = Runtime::new(widget);
        runtime.set_listeners(install(&runtime, &web_dom, &container, trigger.as_ref()));

        info!("widget provided");
        Ok(WidgetProvider {
            runtime,
            state,
            messages,
            container,
            iframe,
            trigger,
        })
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    pub fn show(&self) {
        self.runtime.run(|widget| widget.show());
    }

    pub fn hide(&self) {
        self.runtime.run(|widget| widget.hide());
    }

    pub fn toggle(&self) {
        self.runtime.run(|widget| widget.toggle());
    }

    /// Show and restore the configured preset
    pub fn open(&self) {
        self.runtime.run(|widget| widget.open());
    }

    /// Tear everything down; the provider is inert afterwards
    pub fn destroy(&self) {
        self.runtime.run(|widget| widget.destroy());
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[wasm_bindgen(js_name = setPreset)]
    pub fn set_preset(&self, preset: &str) -> Result<(), JsValue> {
        let preset: StylePreset = preset.parse().map_err(WebError::from)?;
        self.runtime.run(move |widget| widget.set_preset(preset));
        Ok(())
    }

    pub fn maximize(&self) {
        self.runtime.run(|widget| widget.maximize());
    }

    pub fn minimize(&self) {
        self.runtime.run(|widget| widget.minimize());
    }

    pub fn restore(&self) {
        self.runtime.run(|widget| widget.restore());
    }

    /// Fill the viewport height, less `offset` pixels
    #[wasm_bindgen(js_name = maximizeHeight)]
    pub fn maximize_height(&self, offset: Option<f64>) {
        self.runtime
            .run(move |widget| widget.maximize_axis(Axis::Height, offset));
    }

    #[wasm_bindgen(js_name = minimizeHeight)]
    pub fn minimize_height(&self, size: Option<f64>) {
        self.runtime
            .run(move |widget| widget.minimize_axis(Axis::Height, size));
    }

    /// Fill the viewport width, less `offset` pixels
    #[wasm_bindgen(js_name = maximizeWidth)]
    pub fn maximize_width(&self, offset: Option<f64>) {
        self.runtime
            .run(move |widget| widget.maximize_axis(Axis::Width, offset));
    }

    #[wasm_bindgen(js_name = minimizeWidth)]
    pub fn minimize_width(&self, size: Option<f64>) {
        self.runtime
            .run(move |widget| widget.minimize_axis(Axis::Width, size));
    }

    pub fn reset(&self) {
        self.runtime.run(|widget| widget.reset());
    }

    #[wasm_bindgen(js_name = resetHeight)]
    pub fn reset_height(&self) {
        self.runtime.run(|widget| widget.reset_height());
    }

    #[wasm_bindgen(js_name = resetWidth)]
    pub fn reset_width(&self) {
        self.runtime.run(|widget| widget.reset_width());
    }

    // =========================================================================
    // Detach / fullscreen
    // =========================================================================

    /// Move the widget to the document body, leaving a placeholder behind
    pub fn detach(&self) {
        self.runtime.run(|widget| widget.detach());
    }

    /// Return the widget to its placeholder
    pub fn dock(&self) {
        self.runtime.run(|widget| widget.dock());
    }

    #[wasm_bindgen(js_name = requestNativeFullscreen)]
    pub fn request_native_fullscreen(&self) {
        self.runtime.run(|widget| widget.request_native_fullscreen());
    }

    #[wasm_bindgen(js_name = exitNativeFullscreen)]
    pub fn exit_native_fullscreen(&self) {
        self.runtime.run(|widget| widget.exit_native_fullscreen());
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Post `{ type, payload }` to the embedded application
    pub fn send(&self, kind: String, payload: JsValue) -> Result<(), JsValue> {
        let payload = if payload.is_undefined() {
            None
        } else {
            Some(from_js(&payload)?)
        };
        self.runtime.run(move |widget| widget.send(&kind, payload));
        Ok(())
    }

    /// Handle messages of a bare type; returns an unsubscribe function
    #[wasm_bindgen(js_name = onMessage)]
    pub fn on_message(&self, kind: &str, handler: js_sys::Function) -> js_sys::Function {
        let subscription = self.messages.subscribe(&topic(kind), move |payload| {
            let payload = to_js(payload)?;
            handler
                .call1(&JsValue::NULL, &payload)
                .map_err(|err| describe(&err))?;
            Ok(())
        });
        unsubscribe_fn(subscription)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Current state snapshot as a plain object
    pub fn get(&self) -> Result<JsValue, JsValue> {
        Ok(state_to_js(&self.state.get())?)
    }

    /// Observe the state; `callback` runs now and after every change
    pub fn subscribe(&self, callback: js_sys::Function) -> js_sys::Function {
        let subscription = self.state.subscribe(move |state| {
            let result = state_to_js(state)
                .map_err(|err| err.to_string())
                .and_then(|value| {
                    callback
                        .call1(&JsValue::NULL, &value)
                        .map_err(|err| describe(&err))
                });
            if let Err(error) = result {
                warn!(%error, "state subscriber failed");
            }
        });
        unsubscribe_fn(subscription)
    }

    // =========================================================================
    // Elements
    // =========================================================================

    #[wasm_bindgen(getter)]
    pub fn container(&self) -> HtmlElement {
        self.container.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn iframe(&self) -> HtmlElement {
        self.iframe.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn trigger(&self) -> Option<HtmlElement> {
        self.trigger.clone()
    }

    /// Element holding the widget's place while detached
    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> Option<HtmlElement> {
        self.runtime
            .try_run(|widget| widget.placeholder().cloned())
            .flatten()
    }
}

/// Functional form of `new WidgetProvider(options)`
#[wasm_bindgen(js_name = provideWidget)]
pub fn provide_widget(options: JsValue, parent: Option<HtmlElement>) -> Result<WidgetProvider, JsValue> {
    WidgetProvider::new(options, parent)
}

fn state_to_js(state: &WidgetState) -> Result<JsValue, WebError> {
    to_js(&serde_json::to_value(state)?)
}

/// Wrap a subscription in a JS function; calls after the first do nothing
fn unsubscribe_fn(subscription: Unsubscribe) -> js_sys::Function {
    let slot = RefCell::new(Some(subscription));
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Some(subscription) = slot.borrow_mut().take() {
            subscription.unsubscribe();
        }
    });
    closure.into_js_value().unchecked_into()
}
