//! Reactive value store

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::{Bus, Unsubscribe};

const CHANGE: &str = "change";

/// Shared value that notifies subscribers when it changes
///
/// Writes that leave the value equal to the current one are dropped without
/// notification. Clones share the same value.
pub struct Store<T> {
    value: Rc<RefCell<T>>,
    changes: Bus<T>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            changes: self.changes.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    /// Create a store holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            changes: Bus::new(),
        }
    }

    /// Current snapshot
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value; returns whether it changed
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.changes.publish(CHANGE, &value);
        true
    }

    /// Derive a new value from the current one; returns whether it changed
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value.borrow());
        self.set(next)
    }

    /// Call `f` now with the current value and again after every change
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Unsubscribe {
        f(&self.get());
        self.changes.subscribe(CHANGE, move |value| {
            f(value);
            Ok(())
        })
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count(CHANGE)
    }
}
