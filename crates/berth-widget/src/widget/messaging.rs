//! Message channel with the embedded application

use berth_dom::Dom;
use serde_json::Value;
use tracing::{debug, warn};

use super::Widget;
use crate::bus::{HandlerResult, Unsubscribe};
use crate::layout::Axis;
use crate::protocol::{is_origin_allowed, target_origin, topic, Envelope, InboundMessage, Verb};
use crate::state::WidgetState;
use crate::style::StylePreset;

impl<D: Dom> Widget<D> {
    /// Process a message event from the window
    ///
    /// Messages must come from this widget's iframe, from an allowed origin,
    /// and carry a namespaced type. Built-in verbs run first; the message is
    /// then handed to every handler registered for its type.
    pub fn handle_message(&mut self, message: InboundMessage<D::FrameWindow>) {
        if self.is_destroyed() {
            return;
        }
        if !is_origin_allowed(&message.origin, &self.options.origins) {
            return;
        }
        let own = self.dom.frame_window(&self.iframe);
        if own.is_none() || message.source != own {
            return;
        }
        let Some(envelope) = Envelope::from_value(&message.data) else {
            return;
        };
        let Some(verb) = envelope.bare_kind().map(Verb::from_wire) else {
            return;
        };

        if let Some(verb) = verb {
            debug!(%verb, origin = %message.origin, "control message");
            self.dispatch(verb, envelope.payload.as_ref());
        }
        let payload = envelope.payload.unwrap_or(Value::Null);
        self.handlers.publish(&envelope.kind, &payload);
        self.drain();
    }

    fn dispatch(&mut self, verb: Verb, payload: Option<&Value>) {
        let number = payload.and_then(Value::as_f64);
        match verb {
            Verb::Ready => {
                self.state.update(|s| WidgetState { ready: true, ..*s });
                self.push_status();
            }
            Verb::Open => self.open(),
            Verb::Maximize => self.maximize(),
            Verb::Restore => self.restore(),
            Verb::MaximizeHeight => self.maximize_axis(Axis::Height, number),
            Verb::MinimizeHeight => self.minimize_axis(Axis::Height, number),
            Verb::MaximizeWidth => self.maximize_axis(Axis::Width, number),
            Verb::MinimizeWidth => self.minimize_axis(Axis::Width, number),
            Verb::Reset => self.reset(),
            Verb::Hide => self.hide(),
            Verb::Destroy => self.destroy(),
            Verb::SetPreset => {
                match payload.and_then(Value::as_str).map(str::parse::<StylePreset>) {
                    Some(Ok(preset)) => self.set_preset(preset),
                    _ => debug!(?payload, "ignoring setPreset without a known preset"),
                }
            }
            Verb::Detach => self.detach(),
            Verb::Dock => self.dock(),
            Verb::NativeFullscreen => self.request_native_fullscreen(),
            Verb::ExitNativeFullscreen => self.exit_native_fullscreen(),
            Verb::HashReport => self.resolve_hash(payload.and_then(Value::as_str).unwrap_or("")),
            // Outbound only
            Verb::HeightState
            | Verb::WidthState
            | Verb::Detached
            | Verb::IsSmallScreen
            | Verb::Preset
            | Verb::RequestHash => {}
        }
    }

    /// Post a message to the embedded application
    ///
    /// `kind` is the bare type; the namespace prefix is added here. Does
    /// nothing once destroyed.
    pub fn send(&self, kind: &str, payload: Option<Value>) {
        if self.is_destroyed() {
            return;
        }
        let envelope = Envelope::new(kind, payload);
        let origin = target_origin(&self.options.origins);
        if let Err(err) = self.dom.post_to_frame(&self.iframe, &envelope.to_value(), origin) {
            warn!(kind, error = %err, "cannot post message to widget");
        }
    }

    /// Register a handler for a bare message type
    pub fn on_message(
        &self,
        kind: &str,
        handler: impl Fn(&Value) -> HandlerResult + 'static,
    ) -> Unsubscribe {
        self.handlers.subscribe(&topic(kind), handler)
    }

    pub(super) fn send_verb(&self, verb: Verb, payload: Value) {
        self.send(verb.as_str(), Some(payload));
    }

    pub(super) fn send_axis_state(&self, axis: Axis) {
        let verb = match axis {
            Axis::Height => Verb::HeightState,
            Axis::Width => Verb::WidthState,
        };
        let state = self.state.get().axis(axis);
        self.send_verb(verb, Value::from(state.as_str()));
    }

    /// Report the axes whose state differs from `before`
    pub(super) fn push_axis_changes(&self, before: &WidgetState) {
        let after = self.state.get();
        for axis in Axis::ALL {
            if before.axis(axis) != after.axis(axis) {
                self.send_axis_state(axis);
            }
        }
    }

    /// Full status push sent whenever the application reports ready
    fn push_status(&self) {
        let state = self.state.get();
        self.send_axis_state(Axis::Height);
        self.send_axis_state(Axis::Width);
        self.send_verb(Verb::Detached, Value::Bool(state.detached));
        self.send_verb(Verb::IsSmallScreen, Value::Bool(state.is_small_screen));
    }

    /// Status push after the container changed place
    pub(super) fn push_placement(&self) {
        let state = self.state.get();
        self.send_verb(Verb::Detached, Value::Bool(state.detached));
        self.send_axis_state(Axis::Height);
        self.send_axis_state(Axis::Width);
        self.send_verb(Verb::Preset, Value::from(state.preset.as_str()));
    }
}
