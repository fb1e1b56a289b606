//! Resize controller
//!
//! Resizes a floating container from a grip in its bottom-right corner. The
//! top-left corner stays pinned while the pointer drags the opposite corner.

use std::rc::Rc;

use berth_dom::{Dom, DomError, PointerInput};

use super::gesture::Gesture;
use super::InputResult;
use crate::config::ResizableOptions;
use crate::style::{apply_map, apply_rules, px, RESIZE_HANDLE_BASE, RESIZE_ICON};

/// Pointer-driven resizing of a floating container
pub struct ResizeController<D: Dom> {
    container: D::Node,
    suppressed: D::Node,
    handle: D::Node,
    options: ResizableOptions,
    on_resize_end: Option<Rc<dyn Fn()>>,
    gesture: Option<Gesture>,
}

impl<D: Dom> ResizeController<D> {
    /// Insert the grip into `container` and start accepting resizes
    pub fn attach(
        dom: &D,
        container: &D::Node,
        suppressed: &D::Node,
        options: ResizableOptions,
        on_resize_end: Option<Rc<dyn Fn()>>,
    ) -> Result<Self, DomError> {
        let handle = dom.create_element("div")?;
        apply_rules(dom, &handle, RESIZE_HANDLE_BASE);
        dom.set_style(&handle, "width", &px(options.handle_size));
        dom.set_style(&handle, "height", &px(options.handle_size));
        apply_map(dom, &handle, &options.handle_style);
        dom.set_inner_html(&handle, RESIZE_ICON);

        if dom.style(container, "position").is_empty() {
            dom.set_style(container, "position", "relative");
        }
        dom.append_child(container, &handle)?;

        Ok(Self {
            container: container.clone(),
            suppressed: suppressed.clone(),
            handle,
            options,
            on_resize_end,
            gesture: None,
        })
    }

    /// The grip element
    #[inline]
    pub fn handle(&self) -> &D::Node {
        &self.handle
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a resize when the primary button goes down on the grip
    pub fn pointer_down(&mut self, dom: &D, target: &D::Node, input: PointerInput) -> InputResult {
        if *target != self.handle || !input.is_primary() {
            return InputResult::Unhandled;
        }
        if self.gesture.is_some() {
            return InputResult::Handled;
        }
        self.gesture = Some(Gesture::begin(
            dom,
            &self.container,
            &self.suppressed,
            &self.handle,
            input,
        ));
        InputResult::Handled
    }

    /// Grow or shrink toward the pointer within the configured limits
    pub fn pointer_move(&mut self, dom: &D, input: PointerInput) -> InputResult {
        let Some(gesture) = &self.gesture else {
            return InputResult::Unhandled;
        };
        let (dx, dy) = gesture.delta(input);
        let viewport = dom.viewport();
        let opts = &self.options;
        let pad = opts.boundary_padding;

        let max_width = opts.max_width.unwrap_or(viewport.width - pad);
        let max_height = opts.max_height.unwrap_or(viewport.height - pad);

        let rect = dom.bounding_rect(&self.container);
        let width = (gesture.start.width + dx)
            .min(max_width)
            .max(opts.min_width)
            .min(viewport.width - rect.x - pad);
        let height = (gesture.start.height + dy)
            .min(max_height)
            .max(opts.min_height)
            .min(viewport.height - rect.y - pad);

        dom.set_style(&self.container, "width", &px(width));
        dom.set_style(&self.container, "height", &px(height));
        InputResult::Handled
    }

    /// Finish the resize and report it
    pub fn pointer_up(&mut self, dom: &D, _input: PointerInput) -> InputResult {
        self.release(dom)
    }

    /// Abort the resize; the size reached so far is kept
    pub fn pointer_cancel(&mut self, dom: &D, _input: PointerInput) -> InputResult {
        self.release(dom)
    }

    fn release(&mut self, dom: &D) -> InputResult {
        let Some(gesture) = self.gesture.take() else {
            return InputResult::Unhandled;
        };
        gesture.finish(dom, &self.container, &self.suppressed, &self.handle);
        if let Some(callback) = &self.on_resize_end {
            callback();
        }
        InputResult::Handled
    }

    /// Drop explicit size, returning to preset dimensions
    pub fn reset_size(&self, dom: &D) {
        dom.set_style(&self.container, "width", "");
        dom.set_style(&self.container, "height", "");
    }

    /// Remove the grip, undoing an in-progress resize
    pub fn destroy(mut self, dom: &D) {
        if let Some(gesture) = self.gesture.take() {
            gesture.finish(dom, &self.container, &self.suppressed, &self.handle);
        }
        dom.remove(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_dom_mock::{MemoryDom, NodeId};
    use std::cell::Cell;

    struct Fixture {
        dom: MemoryDom,
        container: NodeId,
        iframe: NodeId,
    }

    /// 1000x800 viewport, float-like box anchored 20px from the bottom-right
    fn fixture() -> Fixture {
        let dom = MemoryDom::new(1000.0, 800.0);
        let body = dom.body().unwrap();
        let container = dom.create_element("div").unwrap();
        let iframe = dom.create_element("iframe").unwrap();
        dom.append_child(&body, &container).unwrap();
        dom.append_child(&container, &iframe).unwrap();
        for (k, v) in [
            ("position", "fixed"),
            ("right", "20px"),
            ("bottom", "20px"),
            ("width", "380px"),
            ("height", "520px"),
        ] {
            dom.set_style(&container, k, v);
        }
        Fixture {
            dom,
            container,
            iframe,
        }
    }

    fn attach(fx: &Fixture, options: ResizableOptions, ends: Option<Rc<Cell<u32>>>) -> ResizeController<MemoryDom> {
        let on_end = ends.map(|c| Rc::new(move || c.set(c.get() + 1)) as Rc<dyn Fn()>);
        ResizeController::attach(&fx.dom, &fx.container, &fx.iframe, options, on_end).unwrap()
    }

    #[test]
    fn test_resize_pins_top_left() {
        let fx = fixture();
        let mut resize = attach(&fx, ResizableOptions::default(), None);
        let handle = *resize.handle();
        let input = PointerInput::primary(970.0, 770.0);
        assert_eq!(resize.pointer_down(&fx.dom, &handle, input), InputResult::Handled);
        assert_eq!(fx.dom.style(&fx.container, "top"), "260px");
        assert_eq!(fx.dom.style(&fx.container, "left"), "600px");
        assert_eq!(fx.dom.style(&fx.container, "right"), "auto");

        resize.pointer_move(&fx.dom, input.at(900.0, 700.0));
        assert_eq!(fx.dom.style(&fx.container, "width"), "310px");
        assert_eq!(fx.dom.style(&fx.container, "height"), "450px");
    }

    #[test]
    fn test_second_pointer_does_not_restart_resize() {
        let fx = fixture();
        fx.dom.set_style(&fx.container, "transition", "width 0.2s");
        let mut resize = attach(&fx, ResizableOptions::default(), None);
        let handle = *resize.handle();
        let input = PointerInput::primary(970.0, 770.0);
        resize.pointer_down(&fx.dom, &handle, input);

        let second = PointerInput {
            pointer_id: 2,
            ..PointerInput::primary(900.0, 700.0)
        };
        assert_eq!(resize.pointer_down(&fx.dom, &handle, second), InputResult::Handled);
        assert_eq!(fx.dom.capture_target(2), None);

        resize.pointer_up(&fx.dom, input);
        assert!(!resize.is_resizing());
        assert_eq!(fx.dom.style(&fx.container, "transition"), "width 0.2s");
    }

    #[test]
    fn test_resize_clamps_to_min_and_viewport() {
        let fx = fixture();
        let mut resize = attach(&fx, ResizableOptions::default(), None);
        let handle = *resize.handle();
        let input = PointerInput::primary(970.0, 770.0);
        resize.pointer_down(&fx.dom, &handle, input);

        resize.pointer_move(&fx.dom, input.at(0.0, 0.0));
        assert_eq!(fx.dom.style(&fx.container, "width"), "200px");
        assert_eq!(fx.dom.style(&fx.container, "height"), "150px");

        // Remaining space from (600, 260) with 20px padding is 380x520
        resize.pointer_move(&fx.dom, input.at(2000.0, 2000.0));
        assert_eq!(fx.dom.style(&fx.container, "width"), "380px");
        assert_eq!(fx.dom.style(&fx.container, "height"), "520px");
    }

    #[test]
    fn test_resize_respects_explicit_max() {
        let fx = fixture();
        let mut resize = attach(
            &fx,
            ResizableOptions {
                max_width: Some(300.0),
                max_height: Some(400.0),
                ..ResizableOptions::default()
            },
            None,
        );
        let handle = *resize.handle();
        let input = PointerInput::primary(970.0, 770.0);
        resize.pointer_down(&fx.dom, &handle, input);
        resize.pointer_move(&fx.dom, input.at(975.0, 775.0));
        assert_eq!(fx.dom.style(&fx.container, "width"), "300px");
        assert_eq!(fx.dom.style(&fx.container, "height"), "400px");
    }

    #[test]
    fn test_pointer_up_reports_end() {
        let fx = fixture();
        let ends = Rc::new(Cell::new(0));
        let mut resize = attach(&fx, ResizableOptions::default(), Some(Rc::clone(&ends)));
        let handle = *resize.handle();
        let input = PointerInput::primary(970.0, 770.0);
        resize.pointer_down(&fx.dom, &handle, input);
        assert!(resize.is_resizing());
        resize.pointer_up(&fx.dom, input);
        assert!(!resize.is_resizing());
        assert_eq!(ends.get(), 1);
        assert_eq!(fx.dom.style(&fx.iframe, "pointer-events"), "");
        // A stray release is not a second resize
        assert_eq!(resize.pointer_up(&fx.dom, input), InputResult::Unhandled);
        assert_eq!(ends.get(), 1);
    }

    #[test]
    fn test_reset_size_and_destroy() {
        let fx = fixture();
        let resize = attach(&fx, ResizableOptions::default(), None);
        let handle = *resize.handle();
        resize.reset_size(&fx.dom);
        assert_eq!(fx.dom.style(&fx.container, "width"), "");
        resize.destroy(&fx.dom);
        assert!(!fx.dom.is_attached(handle));
    }
}
