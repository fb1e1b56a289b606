//! Shared widget cell, re-entrancy queue and deadline timer
//!
//! Script callbacks (message handlers, state subscribers) run while the
//! widget is borrowed and may call straight back into the provider. Such
//! calls cannot borrow the widget again; they are queued and run, in order,
//! before the outer borrow ends.
//!
//! After every entry the single `setTimeout` is re-armed for the widget's
//! next deadline, and the page listeners are released once the widget has
//! been destroyed.

use std::cell::{Cell, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use berth_dom::Dom;
use berth_widget::Widget;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::convert::describe;
use crate::dom::WebDom;
use crate::listeners::Listeners;

type Deferred = Box<dyn FnOnce(&mut Widget<WebDom>)>;

pub(crate) struct Runtime {
    widget: RefCell<Widget<WebDom>>,
    deferred: RefCell<VecDeque<Deferred>>,
    listeners: RefCell<Listeners>,
    window: Window,
    timer: Cell<Option<i32>>,
    wake: Closure<dyn FnMut()>,
}

impl Runtime {
    pub fn new(widget: Widget<WebDom>) -> Rc<Self> {
        let window = widget.dom().window().clone();
        Rc::new_cyclic(|weak: &std::rc::Weak<Self>| {
            let weak = weak.clone();
            let wake = Closure::wrap(Box::new(move || {
                if let Some(runtime) = weak.upgrade() {
                    runtime.timer.set(None);
                    runtime.run(|widget| widget.tick());
                }
            }) as Box<dyn FnMut()>);
            Self {
                widget: RefCell::new(widget),
                deferred: RefCell::new(VecDeque::new()),
                listeners: RefCell::new(Listeners::default()),
                window,
                timer: Cell::new(None),
                wake,
            }
        })
    }

    pub fn set_listeners(&self, listeners: Listeners) {
        *self.listeners.borrow_mut() = listeners;
    }

    /// Run `op` now, or after the call currently holding the widget
    pub fn run(&self, op: impl FnOnce(&mut Widget<WebDom>) + 'static) {
        match self.widget.try_borrow_mut() {
            Ok(mut widget) => {
                op(&mut widget);
                self.settle(widget);
            }
            Err(_) => self.deferred.borrow_mut().push_back(Box::new(op)),
        }
    }

    /// Run `op` now and return its result; `None` while the widget is busy
    pub fn try_run<R>(&self, op: impl FnOnce(&mut Widget<WebDom>) -> R) -> Option<R> {
        let mut widget = self.widget.try_borrow_mut().ok()?;
        let result = op(&mut widget);
        self.settle(widget);
        Some(result)
    }

    fn settle(&self, mut widget: RefMut<'_, Widget<WebDom>>) {
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            match next {
                Some(op) => op(&mut widget),
                None => break,
            }
        }
        let destroyed = widget.get().destroyed;
        let deadline = widget.next_deadline();
        let now = widget.dom().now_ms();
        drop(widget);

        if destroyed {
            self.listeners.borrow().unlisten();
        }
        self.arm(deadline, now);
    }

    fn arm(&self, deadline: Option<f64>, now: f64) {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let Some(deadline) = deadline else {
            return;
        };
        let delay = (deadline - now).max(0.0).ceil() as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(self.wake.as_ref().unchecked_ref(), delay)
        {
            Ok(handle) => self.timer.set(Some(handle)),
            Err(err) => warn!(error = %describe(&err), "cannot arm widget timer"),
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
