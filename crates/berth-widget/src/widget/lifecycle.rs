//! Teardown and native fullscreen

use berth_dom::Dom;
use tracing::debug;

use super::Widget;
use crate::state::WidgetState;

/// Source the iframe is pointed at once destroyed
const BLANK_PAGE: &str = "about:blank";

impl<D: Dom> Widget<D> {
    /// Tear the widget down for good
    ///
    /// Removes every element the widget created and drops all message
    /// handlers. The last preset and axis states stay readable. Calling it
    /// again does nothing.
    pub fn destroy(&mut self) {
        let state = self.state.get();
        if state.destroyed {
            return;
        }

        self.teardown_interactions();
        self.hide_deadline = None;
        self.pending_hash.clear();
        self.inbox.clear();
        self.handlers.unsubscribe_all();
        self.overrides.clear();

        self.dom.set_frame_src(&self.iframe, BLANK_PAGE);
        self.dom.remove(&self.container);
        if let Some(trigger) = &self.trigger {
            self.dom.remove(trigger);
        }
        if let Some(placeholder) = self.placeholder.take() {
            self.dom.remove(&placeholder);
        }

        self.state.set(WidgetState {
            visible: false,
            ready: false,
            destroyed: true,
            ..state
        });
        debug!("widget destroyed");
    }

    /// Ask the browser to show the iframe fullscreen
    pub fn request_native_fullscreen(&self) {
        if self.is_destroyed() {
            return;
        }
        self.dom.request_fullscreen(&self.iframe);
    }

    /// Leave native fullscreen, if active
    pub fn exit_native_fullscreen(&self) {
        if self.dom.fullscreen_active() {
            self.dom.exit_fullscreen();
        }
    }
}
