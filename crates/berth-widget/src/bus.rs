//! Topic-keyed publish/subscribe
//!
//! Each widget owns its own `Bus`; there is no process-wide registry. A
//! handler that returns an error is reported through the bus's error hook and
//! never interrupts delivery to the remaining handlers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

/// Error returned by a subscribed handler
pub type HandlerError = Box<dyn std::error::Error>;

/// Result of a subscribed handler
pub type HandlerResult = Result<(), HandlerError>;

type Handler<T> = Rc<dyn Fn(&T) -> HandlerResult>;
type ErrorHook = Rc<dyn Fn(&str, &HandlerError)>;

struct BusInner<T> {
    topics: RefCell<HashMap<String, Vec<(u64, Handler<T>)>>>,
    next_id: Cell<u64>,
    on_error: ErrorHook,
}

/// Publish/subscribe channel keyed by exact topic
pub struct Bus<T = serde_json::Value> {
    inner: Rc<BusInner<T>>,
}

impl<T> Clone for Bus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Bus<T> {
    /// Create a bus that logs handler errors as warnings
    pub fn new() -> Self {
        Self::with_error_hook(|topic, err| {
            warn!(topic, error = %err, "message handler failed");
        })
    }

    /// Create a bus with a custom handler-error hook
    pub fn with_error_hook(hook: impl Fn(&str, &HandlerError) + 'static) -> Self {
        Self {
            inner: Rc::new(BusInner {
                topics: RefCell::new(HashMap::new()),
                next_id: Cell::new(0),
                on_error: Rc::new(hook),
            }),
        }
    }

    /// Register a handler for an exact topic
    pub fn subscribe(
        &self,
        topic: &str,
        handler: impl Fn(&T) -> HandlerResult + 'static,
    ) -> Unsubscribe {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .topics
            .borrow_mut()
            .entry(topic.to_string())
            .or_default()
            .push((id, Rc::new(handler)));

        let weak: Weak<BusInner<T>> = Rc::downgrade(&self.inner);
        let topic = topic.to_string();
        Unsubscribe::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut topics = inner.topics.borrow_mut();
                if let Some(handlers) = topics.get_mut(&topic) {
                    handlers.retain(|(hid, _)| *hid != id);
                    if handlers.is_empty() {
                        topics.remove(&topic);
                    }
                }
            }
        })
    }

    /// Deliver `data` to every handler of `topic`
    ///
    /// Handlers may subscribe or unsubscribe while being notified; the set
    /// notified is the one registered when publishing started.
    pub fn publish(&self, topic: &str, data: &T) {
        let handlers: Vec<Handler<T>> = match self.inner.topics.borrow().get(topic) {
            Some(handlers) => handlers.iter().map(|(_, h)| Rc::clone(h)).collect(),
            None => return,
        };
        for handler in handlers {
            if let Err(err) = handler(data) {
                (self.inner.on_error)(topic, &err);
            }
        }
    }

    /// Remove every handler of every topic
    pub fn unsubscribe_all(&self) {
        self.inner.topics.borrow_mut().clear();
    }

    /// Number of handlers registered for a topic
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.inner
            .topics
            .borrow()
            .get(topic)
            .map_or(0, Vec::len)
    }
}

impl<T: 'static> Default for Bus<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle that removes a subscription when invoked
///
/// Dropping the handle keeps the subscription alive.
#[must_use = "dropping the handle keeps the subscription alive"]
pub struct Unsubscribe {
    f: Box<dyn FnOnce()>,
}

impl Unsubscribe {
    pub(crate) fn new(f: impl FnOnce() + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    /// Remove the subscription
    pub fn unsubscribe(self) {
        (self.f)()
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unsubscribe")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_publish_reaches_exact_topic_only() {
        let bus: Bus<i32> = Bus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = bus.subscribe("a", move |v| {
            sink.borrow_mut().push(*v);
            Ok(())
        });
        bus.publish("a", &1);
        bus.publish("b", &2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_unsubscribe_removes_handler() {
        let bus: Bus<i32> = Bus::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let sub = bus.subscribe("a", move |_| {
            c.set(c.get() + 1);
            Ok(())
        });
        bus.publish("a", &0);
        sub.unsubscribe();
        bus.publish("a", &0);
        assert_eq!(count.get(), 1);
        assert_eq!(bus.subscriber_count("a"), 0);
    }

    #[test]
    fn test_failing_handler_is_isolated() {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);
        let bus: Bus<i32> = Bus::with_error_hook(move |topic, err| {
            sink.borrow_mut().push(format!("{topic}: {err}"));
        });
        let reached = Rc::new(Cell::new(false));
        let r = Rc::clone(&reached);
        let _a = bus.subscribe("t", |_| Err("boom".into()));
        let _b = bus.subscribe("t", move |_| {
            r.set(true);
            Ok(())
        });
        bus.publish("t", &0);
        assert!(reached.get());
        assert_eq!(*errors.borrow(), vec!["t: boom".to_string()]);
    }

    #[test]
    fn test_unsubscribe_all() {
        let bus: Bus<i32> = Bus::new();
        let _a = bus.subscribe("a", |_| Ok(()));
        let _b = bus.subscribe("b", |_| Ok(()));
        bus.unsubscribe_all();
        assert_eq!(bus.subscriber_count("a"), 0);
        assert_eq!(bus.subscriber_count("b"), 0);
    }

    #[test]
    fn test_handler_may_subscribe_during_publish() {
        let bus: Bus<i32> = Bus::new();
        let inner_bus = bus.clone();
        let _a = bus.subscribe("a", move |_| {
            let _late = inner_bus.subscribe("a", |_| Ok(()));
            Ok(())
        });
        bus.publish("a", &0);
        assert_eq!(bus.subscriber_count("a"), 2);
    }
}
