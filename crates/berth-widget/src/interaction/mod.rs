//! Pointer interactions for floating containers
//!
//! [`Interactions`] owns the optional drag and resize controllers of one
//! container and routes pointer events to them. Events are offered to the
//! drag controller first; whichever controller owns the active gesture
//! consumes the follow-up move and release events.

mod drag;
mod gesture;
mod resize;
mod snap;

pub use drag::{DragConfig, DragController, GhostBuilder, ResetSnap};
pub use resize::ResizeController;
pub use snap::SnapTarget;

use berth_dom::{Dom, PointerInput};

/// Whether an input event was consumed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Event was consumed
    Handled,
    /// Event was not consumed
    Unhandled,
}

impl InputResult {
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, InputResult::Handled)
    }

    #[inline]
    fn or_else(self, f: impl FnOnce() -> InputResult) -> InputResult {
        match self {
            InputResult::Handled => InputResult::Handled,
            InputResult::Unhandled => f(),
        }
    }
}

/// Drag and resize controllers attached to one container
pub struct Interactions<D: Dom> {
    drag: Option<DragController<D>>,
    resize: Option<ResizeController<D>>,
}

impl<D: Dom> Interactions<D> {
    pub fn new(drag: Option<DragController<D>>, resize: Option<ResizeController<D>>) -> Self {
        Self { drag, resize }
    }

    #[inline]
    pub fn drag(&self) -> Option<&DragController<D>> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn resize(&self) -> Option<&ResizeController<D>> {
        self.resize.as_ref()
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragController::is_dragging)
    }

    /// Whether a resize gesture is in progress
    pub fn is_resizing(&self) -> bool {
        self.resize.as_ref().is_some_and(ResizeController::is_resizing)
    }

    pub fn pointer_down(&mut self, dom: &D, target: &D::Node, input: PointerInput) -> InputResult {
        let Self { drag, resize } = self;
        drag.as_mut()
            .map_or(InputResult::Unhandled, |d| d.pointer_down(dom, target, input))
            .or_else(|| {
                resize
                    .as_mut()
                    .map_or(InputResult::Unhandled, |r| r.pointer_down(dom, target, input))
            })
    }

    pub fn pointer_move(&mut self, dom: &D, input: PointerInput) -> InputResult {
        let Self { drag, resize } = self;
        drag.as_mut()
            .map_or(InputResult::Unhandled, |d| d.pointer_move(dom, input))
            .or_else(|| {
                resize
                    .as_mut()
                    .map_or(InputResult::Unhandled, |r| r.pointer_move(dom, input))
            })
    }

    pub fn pointer_up(&mut self, dom: &D, input: PointerInput) -> InputResult {
        let Self { drag, resize } = self;
        drag.as_mut()
            .map_or(InputResult::Unhandled, |d| d.pointer_up(dom, input))
            .or_else(|| {
                resize
                    .as_mut()
                    .map_or(InputResult::Unhandled, |r| r.pointer_up(dom, input))
            })
    }

    pub fn pointer_cancel(&mut self, dom: &D, input: PointerInput) -> InputResult {
        let Self { drag, resize } = self;
        drag.as_mut()
            .map_or(InputResult::Unhandled, |d| d.pointer_cancel(dom, input))
            .or_else(|| {
                resize
                    .as_mut()
                    .map_or(InputResult::Unhandled, |r| r.pointer_cancel(dom, input))
            })
    }

    /// Advance snap dwell timers
    pub fn tick(&mut self, dom: &D, now: f64) {
        if let Some(drag) = &mut self.drag {
            drag.tick(dom, now);
        }
    }

    /// Earliest time `tick` has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        self.drag.as_ref().and_then(DragController::next_deadline)
    }

    /// Drop explicit position and size
    pub fn reset(&self, dom: &D) {
        if let Some(drag) = &self.drag {
            drag.reset_position(dom);
        }
        if let Some(resize) = &self.resize {
            resize.reset_size(dom);
        }
    }

    /// Remove every handle and preview
    pub fn destroy(self, dom: &D) {
        if let Some(drag) = self.drag {
            drag.destroy(dom);
        }
        if let Some(resize) = self.resize {
            resize.destroy(dom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DraggableOptions, ResizableOptions};
    use crate::task::TaskQueue;
    use berth_dom_mock::MemoryDom;

    #[test]
    fn test_events_route_to_owning_controller() {
        let dom = MemoryDom::new(1000.0, 800.0);
        let body = dom.body().unwrap();
        let container = dom.create_element("div").unwrap();
        let iframe = dom.create_element("iframe").unwrap();
        dom.append_child(&body, &container).unwrap();
        dom.append_child(&container, &iframe).unwrap();
        for (k, v) in [
            ("position", "fixed"),
            ("left", "100px"),
            ("top", "100px"),
            ("width", "300px"),
            ("height", "300px"),
        ] {
            dom.set_style(&container, k, v);
        }

        let drag = DragController::attach(
            &dom,
            &container,
            &iframe,
            DragConfig {
                options: DraggableOptions::default(),
                on_edge_snap: None,
                reset_snap: None,
                tasks: TaskQueue::new(),
            },
        )
        .unwrap();
        let resize =
            ResizeController::attach(&dom, &container, &iframe, ResizableOptions::default(), None)
                .unwrap();
        let grip = *resize.handle();
        let mut interactions = Interactions::new(Some(drag), Some(resize));

        let input = PointerInput::primary(390.0, 390.0);
        assert!(interactions.pointer_down(&dom, &grip, input).is_handled());
        assert!(interactions.is_resizing());
        assert!(!interactions.is_dragging());

        interactions.pointer_move(&dom, input.at(440.0, 420.0));
        assert_eq!(dom.style(&container, "width"), "350px");
        assert_eq!(dom.style(&container, "left"), "100px");

        interactions.pointer_up(&dom, input);
        assert!(!interactions.is_resizing());
        assert_eq!(
            interactions.pointer_move(&dom, input),
            InputResult::Unhandled
        );

        interactions.reset(&dom);
        assert_eq!(dom.style(&container, "width"), "");
        assert_eq!(dom.style(&container, "left"), "");

        interactions.destroy(&dom);
        assert_eq!(dom.children(container), vec![iframe]);
    }
}
