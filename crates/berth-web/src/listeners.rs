//! Page event wiring
//!
//! Browser events are translated into the widget's event entry points:
//!
//! | Target    | Event                                  | Entry point         |
//! |-----------|----------------------------------------|---------------------|
//! | window    | `message`                              | `handle_message`    |
//! | window    | `resize`                               | `viewport_changed`  |
//! | container | `pointerdown/move/up/cancel`           | `pointer_*`         |
//! | container | `transitionend`                        | `transition_end`    |
//! | trigger   | `click`                                | `click`             |

use std::cell::Cell;
use std::rc::{Rc, Weak};

use berth_widget::Widget;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MessageEvent, PointerEvent};

use crate::convert::{describe, inbound_message, pointer_input};
use crate::dom::WebDom;
use crate::runtime::Runtime;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Registered listeners; removed from the page on `unlisten` or drop
///
/// The closures themselves live until drop, so a listener can unlisten the
/// set it belongs to while running.
#[derive(Default)]
pub(crate) struct Listeners {
    registered: Vec<Listener>,
    active: Cell<bool>,
}

impl Listeners {
    fn add(&mut self, target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => {
                self.active.set(true);
                self.registered.push(Listener {
                    target: target.clone(),
                    kind,
                    closure,
                });
            }
            Err(err) => warn!(kind, error = %describe(&err), "cannot add event listener"),
        }
    }

    /// Remove every listener from the page
    pub fn unlisten(&self) {
        if !self.active.replace(false) {
            return;
        }
        for listener in &self.registered {
            let _ = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.unlisten();
    }
}

/// Forward to the widget if the runtime is still alive
fn forward(runtime: &Weak<Runtime>, op: impl FnOnce(&mut Widget<WebDom>) + 'static) {
    if let Some(runtime) = runtime.upgrade() {
        runtime.run(op);
    }
}

/// Forward a pointer event; the default action is suppressed when handled
fn forward_pointer<F>(runtime: &Weak<Runtime>, event: &Event, op: F)
where
    F: FnOnce(&mut Widget<WebDom>, berth_dom::PointerInput) -> berth_widget::InputResult,
{
    let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
        return;
    };
    let input = pointer_input(pointer);
    let handled = runtime
        .upgrade()
        .and_then(|runtime| runtime.try_run(|widget| op(widget, input)))
        .is_some_and(|result| result.is_handled());
    if handled {
        event.prevent_default();
    }
}

pub(crate) fn install(
    runtime: &Rc<Runtime>,
    dom: &WebDom,
    container: &HtmlElement,
    trigger: Option<&HtmlElement>,
) -> Listeners {
    let mut listeners = Listeners::default();
    let window: &EventTarget = dom.window().as_ref();

    // === Window ===

    let weak = Rc::downgrade(runtime);
    listeners.add(window, "message", move |event| {
        if let Some(event) = event.dyn_ref::<MessageEvent>() {
            let message = inbound_message(event);
            forward(&weak, move |widget| widget.handle_message(message));
        }
    });

    let weak = Rc::downgrade(runtime);
    listeners.add(window, "resize", move |_| {
        forward(&weak, |widget| widget.viewport_changed());
    });

    // === Container ===

    let target: &EventTarget = container.as_ref();

    let weak = Rc::downgrade(runtime);
    listeners.add(target, "pointerdown", move |event| {
        let Some(node) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        forward_pointer(&weak, &event, |widget, input| widget.pointer_down(&node, input));
    });

    let weak = Rc::downgrade(runtime);
    listeners.add(target, "pointermove", move |event| {
        forward_pointer(&weak, &event, |widget, input| widget.pointer_move(input));
    });

    let weak = Rc::downgrade(runtime);
    listeners.add(target, "pointerup", move |event| {
        forward_pointer(&weak, &event, |widget, input| widget.pointer_up(input));
    });

    let weak = Rc::downgrade(runtime);
    listeners.add(target, "pointercancel", move |event| {
        forward_pointer(&weak, &event, |widget, input| widget.pointer_cancel(input));
    });

    let weak = Rc::downgrade(runtime);
    let own = target.clone();
    listeners.add(target, "transitionend", move |event| {
        // Transitions of descendants bubble up too
        if event.target().as_ref() == Some(&own) {
            forward(&weak, |widget| widget.transition_end());
        }
    });

    // === Trigger ===

    if let Some(trigger) = trigger {
        let weak = Rc::downgrade(runtime);
        let node = trigger.clone();
        listeners.add(trigger.as_ref(), "click", move |_| {
            let node = node.clone();
            forward(&weak, move |widget| {
                widget.click(&node);
            });
        });
    }

    listeners
}
