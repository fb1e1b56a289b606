//! Deferred execution
//!
//! Work queued here runs after the current event handler has returned, when
//! the widget drains the queue. Interaction controllers use it for release
//! callbacks that tear down the very controller that fired them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// FIFO queue of deferred callbacks
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a callback to run after the current turn
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Run queued callbacks until the queue is empty
    ///
    /// Callbacks queued while draining run in the same pass. Returns the
    /// number of callbacks run.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_deferred_tasks_run_in_order() {
        let queue = TaskQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            queue.defer(move || log.borrow_mut().push(i));
        }
        assert!(log.borrow().is_empty());
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_task_may_defer_more_work() {
        let queue = TaskQueue::new();
        let hits = Rc::new(Cell::new(0));
        let q = queue.clone();
        let h = Rc::clone(&hits);
        queue.defer(move || {
            h.set(h.get() + 1);
            let h = Rc::clone(&h);
            q.defer(move || h.set(h.get() + 1));
        });
        assert_eq!(queue.run_pending(), 2);
        assert_eq!(hits.get(), 2);
    }
}
