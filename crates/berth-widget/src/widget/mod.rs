//! Widget lifecycle controller
//!
//! [`Widget`] owns the container, the iframe, the optional trigger button and
//! the detach placeholder. A single [`WidgetState`] snapshot drives
//! presentation; every public operation replaces it through the [`Store`].
//!
//! # Event entry points
//!
//! The embedding runtime forwards browser events to the `pointer_*`,
//! [`click`](Widget::click), [`transition_end`](Widget::transition_end),
//! [`viewport_changed`](Widget::viewport_changed) and
//! [`handle_message`](Widget::handle_message) methods, and calls
//! [`tick`](Widget::tick) once [`next_deadline`](Widget::next_deadline) has
//! passed. Interaction callbacks never touch the widget directly: they post a
//! command that runs once the handler that raised it has returned.

mod detach;
mod interactions;
mod layout_ops;
mod lifecycle;
mod messaging;
mod visibility;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use berth_dom::{Dom, PointerInput};
use tracing::debug;

use crate::bus::{Bus, Unsubscribe};
use crate::config::{ResolvedOptions, WidgetOptions};
use crate::error::WidgetError;
use crate::geometry::SnapEdge;
use crate::interaction::{InputResult, Interactions};
use crate::layout::AxisOverrides;
use crate::state::{Store, WidgetState};
use crate::style::{apply_map, apply_rules, DEFAULT_TRIGGER_ICON, IFRAME_BASE, TRIGGER_BASE};
use crate::task::TaskQueue;

use detach::PendingHash;

/// Deferred work raised from inside an interaction handler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Maximize the axes of an edge
    EdgeSnap(SnapEdge),
    /// Return to the preset baseline
    ResetSnap,
    /// A manual resize finished
    ResizeEnd,
}

/// Commands waiting for the current handler to return
#[derive(Clone, Default)]
pub(crate) struct Inbox(Rc<RefCell<VecDeque<Command>>>);

impl Inbox {
    pub fn post(&self, command: Command) {
        self.0.borrow_mut().push_back(command);
    }

    fn pop(&self) -> Option<Command> {
        self.0.borrow_mut().pop_front()
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// An embedded application and its control surface
pub struct Widget<D: Dom> {
    dom: D,
    options: ResolvedOptions,
    /// Element the container was mounted in; the dock target
    parent: Option<D::Node>,
    container: D::Node,
    iframe: D::Node,
    trigger: Option<D::Node>,
    placeholder: Option<D::Node>,

    state: Store<WidgetState>,
    handlers: Bus,
    tasks: TaskQueue,
    inbox: Inbox,

    interactions: Option<Interactions<D>>,
    overrides: AxisOverrides,
    /// Preset to restore on dock
    pre_detach_preset: Option<crate::style::StylePreset>,
    /// Set by a completed drag, cleared by any preset baseline
    user_positioned: bool,
    /// Fallback for a `transitionend` that never arrives
    hide_deadline: Option<f64>,
    pending_hash: VecDeque<PendingHash>,
}

/// Delay before an animated hide falls back to `display: none`
pub const HIDE_FALLBACK_MS: f64 = 250.0;

impl<D: Dom> Widget<D> {
    /// Build the widget and mount it
    ///
    /// The container is appended to `parent`, or to the document body when
    /// none is given. Only a widget mounted in a `parent` can detach.
    pub fn provide(dom: D, options: WidgetOptions, parent: Option<D::Node>) -> Result<Self, WidgetError> {
        let options = ResolvedOptions::resolve(options)?;
        let visible = options.visible;
        let preset = options.initial_preset;

        let container = dom.create_element("div")?;
        let iframe = dom.create_element("iframe")?;
        apply_rules(&dom, &iframe, IFRAME_BASE);
        dom.set_frame_src(&iframe, &options.widget_url);
        if let Some(sandbox) = &options.sandbox {
            dom.set_attribute(&iframe, "sandbox", sandbox)?;
        }
        dom.set_attribute(&iframe, "allowfullscreen", "")?;
        for (name, value) in &options.iframe_attrs {
            dom.set_attribute(&iframe, name, value)?;
        }
        dom.append_child(&container, &iframe)?;

        let mount = match &parent {
            Some(parent) => parent.clone(),
            None => dom.body()?,
        };
        dom.append_child(&mount, &container)?;

        let trigger = match &options.trigger {
            Some(trigger_options) => {
                let trigger = dom.create_element("button")?;
                apply_rules(&dom, &trigger, TRIGGER_BASE);
                apply_map(&dom, &trigger, &trigger_options.style);
                let content = trigger_options.content.as_deref().unwrap_or(DEFAULT_TRIGGER_ICON);
                dom.set_inner_html(&trigger, content);
                if visible {
                    dom.set_style(&trigger, "display", "none");
                }
                dom.append_child(&mount, &trigger)?;
                Some(trigger)
            }
            None => None,
        };

        let small = options.is_small_screen(dom.viewport().width);
        let mut widget = Self {
            state: Store::new(WidgetState::initial(preset, visible, small)),
            handlers: Bus::new(),
            tasks: TaskQueue::new(),
            inbox: Inbox::default(),
            interactions: None,
            overrides: AxisOverrides::new(),
            pre_detach_preset: None,
            user_positioned: false,
            hide_deadline: None,
            pending_hash: VecDeque::new(),
            dom,
            options,
            parent,
            container,
            iframe,
            trigger,
            placeholder: None,
        };
        widget.apply_preset(preset);
        widget.attach_interactions();

        debug!(%preset, visible, "widget provided");
        Ok(widget)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Platform handle the widget drives
    #[inline]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Element wrapping the iframe
    #[inline]
    pub fn container(&self) -> &D::Node {
        &self.container
    }

    #[inline]
    pub fn iframe(&self) -> &D::Node {
        &self.iframe
    }

    /// Trigger button, when configured
    #[inline]
    pub fn trigger(&self) -> Option<&D::Node> {
        self.trigger.as_ref()
    }

    /// Stand-in at the original position while detached
    #[inline]
    pub fn placeholder(&self) -> Option<&D::Node> {
        self.placeholder.as_ref()
    }

    /// Current state snapshot
    #[inline]
    pub fn get(&self) -> WidgetState {
        self.state.get()
    }

    /// Observe the state; `f` runs now and after every change
    pub fn subscribe(&self, f: impl Fn(&WidgetState) + 'static) -> Unsubscribe {
        self.state.subscribe(f)
    }

    /// Shared handle to the state store
    ///
    /// Lets an embedder observe state while the widget itself is borrowed.
    pub fn state_store(&self) -> Store<WidgetState> {
        self.state.clone()
    }

    /// Shared handle to the message handler bus, keyed by prefixed type
    pub fn message_bus(&self) -> Bus {
        self.handlers.clone()
    }

    /// Resolved configuration
    #[inline]
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Attached drag/resize controllers
    #[inline]
    pub fn interactions(&self) -> Option<&Interactions<D>> {
        self.interactions.as_ref()
    }

    #[inline]
    fn is_destroyed(&self) -> bool {
        self.state.get().destroyed
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    pub fn pointer_down(&mut self, target: &D::Node, input: PointerInput) -> InputResult {
        let result = match &mut self.interactions {
            Some(interactions) => interactions.pointer_down(&self.dom, target, input),
            None => InputResult::Unhandled,
        };
        self.drain();
        result
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> InputResult {
        let result = match &mut self.interactions {
            Some(interactions) => interactions.pointer_move(&self.dom, input),
            None => InputResult::Unhandled,
        };
        self.drain();
        result
    }

    pub fn pointer_up(&mut self, input: PointerInput) -> InputResult {
        let result = match &mut self.interactions {
            Some(interactions) => {
                let dragging = interactions.is_dragging();
                let result = interactions.pointer_up(&self.dom, input);
                if dragging && result.is_handled() {
                    self.user_positioned = true;
                }
                result
            }
            None => InputResult::Unhandled,
        };
        self.drain();
        result
    }

    pub fn pointer_cancel(&mut self, input: PointerInput) -> InputResult {
        let result = match &mut self.interactions {
            Some(interactions) => interactions.pointer_cancel(&self.dom, input),
            None => InputResult::Unhandled,
        };
        self.drain();
        result
    }

    /// A click landed on `target`; the trigger button opens the widget
    pub fn click(&mut self, target: &D::Node) -> InputResult {
        if self.trigger.as_ref() != Some(target) {
            return InputResult::Unhandled;
        }
        self.open();
        self.drain();
        InputResult::Handled
    }

    /// The container finished a CSS transition
    pub fn transition_end(&mut self) {
        if self.hide_deadline.is_some() {
            self.finish_hide();
        }
    }

    /// The viewport was resized
    pub fn viewport_changed(&mut self) {
        if self.is_destroyed() {
            return;
        }
        let small = self.options.is_small_screen(self.dom.viewport().width);
        let changed = self.state.update(|s| WidgetState {
            is_small_screen: small,
            ..*s
        });
        if changed {
            debug!(small, "small screen status changed");
            self.send_verb(crate::protocol::Verb::IsSmallScreen, serde_json::Value::Bool(small));
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Run every timer whose deadline has passed
    pub fn tick(&mut self) {
        let now = self.dom.now_ms();
        if let Some(interactions) = &mut self.interactions {
            interactions.tick(&self.dom, now);
        }
        if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
            self.finish_hide();
        }
        self.expire_hash_requests(now);
        self.drain();
    }

    /// Earliest time [`tick`](Self::tick) has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        [
            self.interactions.as_ref().and_then(Interactions::next_deadline),
            self.hide_deadline,
            self.pending_hash.front().map(|pending| pending.deadline),
        ]
        .into_iter()
        .flatten()
        .reduce(f64::min)
    }

    // =========================================================================
    // Deferred commands
    // =========================================================================

    /// Run deferred callbacks and the commands they raise
    fn drain(&mut self) {
        loop {
            self.tasks.run_pending();
            let Some(command) = self.inbox.pop() else {
                break;
            };
            if self.is_destroyed() {
                self.inbox.clear();
                break;
            }
            debug!(?command, "running deferred command");
            match command {
                Command::EdgeSnap(edge) => {
                    for axis in edge.axes() {
                        self.maximize_axis(*axis, None);
                    }
                }
                Command::ResetSnap => self.reset(),
                Command::ResizeEnd => self.resize_ended(),
            }
        }
    }
}
