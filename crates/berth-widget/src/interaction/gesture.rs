//! Pointer gesture bookkeeping shared by drag and resize

use berth_dom::{Dom, PointerInput, Rect};

use crate::style::px;

/// An in-progress pointer gesture on a container handle
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Gesture {
    pub pointer_id: i32,
    /// Pointer position at pointer-down
    pub origin: (f64, f64),
    /// Container box at pointer-down
    pub start: Rect,
    /// Container transition to restore at the end
    saved_transition: String,
}

impl Gesture {
    /// Start a gesture
    ///
    /// Captures the pointer on `handle`, suspends container transitions, pins
    /// the container by its top-left corner, and stops `suppressed` from
    /// receiving pointer events.
    pub fn begin<D: Dom>(
        dom: &D,
        container: &D::Node,
        suppressed: &D::Node,
        handle: &D::Node,
        input: PointerInput,
    ) -> Self {
        dom.set_pointer_capture(handle, input.pointer_id);

        let saved_transition = dom.style(container, "transition");
        dom.set_style(container, "transition", "none");

        let start = dom.bounding_rect(container);
        dom.set_style(container, "top", &px(start.y));
        dom.set_style(container, "left", &px(start.x));
        dom.set_style(container, "bottom", "auto");
        dom.set_style(container, "right", "auto");

        dom.set_style(suppressed, "pointer-events", "none");

        Self {
            pointer_id: input.pointer_id,
            origin: (input.client_x, input.client_y),
            start,
            saved_transition,
        }
    }

    /// Pointer travel since pointer-down
    #[inline]
    pub fn delta(&self, input: PointerInput) -> (f64, f64) {
        (input.client_x - self.origin.0, input.client_y - self.origin.1)
    }

    /// End the gesture, undoing the temporary styles and the capture
    pub fn finish<D: Dom>(self, dom: &D, container: &D::Node, suppressed: &D::Node, handle: &D::Node) {
        dom.set_style(suppressed, "pointer-events", "");
        dom.set_style(container, "transition", &self.saved_transition);
        dom.release_pointer_capture(handle, self.pointer_id);
    }
}
