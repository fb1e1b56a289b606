//! Drag controller
//!
//! Moves a floating container by a grip in its top-left corner. While
//! dragging, the container is positioned by explicit `top`/`left` and kept
//! `boundary_padding` away from every viewport edge.
//!
//! # Snapping
//!
//! With edge snapping on, pressing the container against a viewport edge or
//! corner for the dwell time shows a preview of the maximized layout. A
//! reset-snap descriptor does the same for dragging away from a maximized
//! layout. Releasing while a preview is visible queues the matching callback
//! on the [`TaskQueue`]; it runs after the pointer handler has returned,
//! because it typically destroys this controller.

use std::rc::Rc;

use berth_dom::{Dom, DomError, PointerInput, Size};
use tracing::{debug, warn};

use super::gesture::Gesture;
use super::snap::{SnapSession, SnapTarget};
use super::InputResult;
use crate::config::{DraggableOptions, EdgeSnapOptions};
use crate::geometry::{boundary_flags, edge_ghost_rect, resolve_edge, SnapEdge};
use crate::style::{apply_map, apply_rules, px, DRAG_HANDLE_BASE, GHOST_BASE, GRIP_ICON};
use crate::task::TaskQueue;

/// Dwell used when only reset snapping is configured
const DEFAULT_DWELL_MS: f64 = 500.0;

/// Builds the preview element for a reset snap
pub type GhostBuilder<D> = Box<dyn Fn(&D) -> Result<<D as Dom>::Node, DomError>>;

/// Reset-snap descriptor
pub struct ResetSnap<D: Dom> {
    /// Whether a reset target is currently active
    pub is_active: Box<dyn Fn() -> bool>,
    /// Creates the (detached) preview element
    pub build_ghost: GhostBuilder<D>,
    /// Invoked after releasing on a visible reset preview
    pub on_reset: Option<Rc<dyn Fn()>>,
}

/// Everything a drag controller needs besides its elements
pub struct DragConfig<D: Dom> {
    pub options: DraggableOptions,
    /// Invoked after releasing on a visible edge preview
    pub on_edge_snap: Option<Rc<dyn Fn(SnapEdge)>>,
    pub reset_snap: Option<ResetSnap<D>>,
    /// Queue the release callbacks are deferred onto
    pub tasks: TaskQueue,
}

/// Pointer-driven repositioning of a floating container
pub struct DragController<D: Dom> {
    container: D::Node,
    suppressed: D::Node,
    handle: D::Node,
    boundary_padding: f64,
    edge_snap: Option<EdgeSnapOptions>,
    on_edge_snap: Option<Rc<dyn Fn(SnapEdge)>>,
    reset_snap: Option<ResetSnap<D>>,
    tasks: TaskQueue,
    gesture: Option<Gesture>,
    snap: SnapSession<D::Node>,
}

impl<D: Dom> DragController<D> {
    /// Insert the grip into `container` and start accepting drags
    ///
    /// `suppressed` stops receiving pointer events for the duration of a
    /// drag so an iframe cannot swallow the move events.
    pub fn attach(
        dom: &D,
        container: &D::Node,
        suppressed: &D::Node,
        config: DragConfig<D>,
    ) -> Result<Self, DomError> {
        let DragConfig {
            options,
            on_edge_snap,
            reset_snap,
            tasks,
        } = config;

        let handle = dom.create_element("div")?;
        apply_rules(dom, &handle, DRAG_HANDLE_BASE);
        dom.set_style(&handle, "width", &px(options.handle_size));
        dom.set_style(&handle, "height", &px(options.handle_size));
        apply_map(dom, &handle, &options.handle_style);
        dom.set_inner_html(&handle, GRIP_ICON);

        if dom.style(container, "position").is_empty() {
            dom.set_style(container, "position", "relative");
        }
        dom.append_child(container, &handle)?;

        Ok(Self {
            container: container.clone(),
            suppressed: suppressed.clone(),
            handle,
            boundary_padding: options.boundary_padding,
            edge_snap: options.edge_snap.resolve(),
            on_edge_snap,
            reset_snap,
            tasks,
            gesture: None,
            snap: SnapSession::default(),
        })
    }

    /// The grip element
    #[inline]
    pub fn handle(&self) -> &D::Node {
        &self.handle
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Current snap classification, if dwelling or previewing
    #[inline]
    pub fn snap_target(&self) -> Option<SnapTarget> {
        self.snap.target()
    }

    /// Classification of the visible preview, if any
    pub fn pending_snap(&self) -> Option<SnapTarget> {
        self.snap.pending()
    }

    /// Time at which the dwell elapses
    #[inline]
    pub fn next_deadline(&self) -> Option<f64> {
        self.snap.deadline()
    }

    fn dwell_ms(&self) -> f64 {
        self.edge_snap
            .as_ref()
            .map_or(DEFAULT_DWELL_MS, |snap| snap.dwell_ms)
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Start a drag when the primary button goes down on the grip
    pub fn pointer_down(&mut self, dom: &D, target: &D::Node, input: PointerInput) -> InputResult {
        if *target != self.handle || !input.is_primary() {
            return InputResult::Unhandled;
        }
        // One pointer at a time; a second press must not replace the gesture
        if self.gesture.is_some() {
            return InputResult::Handled;
        }
        self.cancel_snap(dom);
        self.gesture = Some(Gesture::begin(
            dom,
            &self.container,
            &self.suppressed,
            &self.handle,
            input,
        ));
        dom.set_style(&self.handle, "cursor", "grabbing");
        InputResult::Handled
    }

    /// Follow the pointer, clamped inside the viewport padding
    pub fn pointer_move(&mut self, dom: &D, input: PointerInput) -> InputResult {
        let Some(gesture) = &self.gesture else {
            return InputResult::Unhandled;
        };
        let (dx, dy) = gesture.delta(input);
        let viewport = dom.viewport();
        let size = dom.bounding_rect(&self.container).size();
        let pad = self.boundary_padding;

        let left = (gesture.start.x + dx)
            .min(viewport.width - size.width - pad)
            .max(pad);
        let top = (gesture.start.y + dy)
            .min(viewport.height - size.height - pad)
            .max(pad);

        dom.set_style(&self.container, "left", &px(left));
        dom.set_style(&self.container, "top", &px(top));

        self.update_snap(dom, left, top, size, viewport);
        InputResult::Handled
    }

    /// Finish the drag, firing a pending snap
    pub fn pointer_up(&mut self, dom: &D, _input: PointerInput) -> InputResult {
        self.release(dom, false)
    }

    /// Abort the drag; no snap fires
    pub fn pointer_cancel(&mut self, dom: &D, _input: PointerInput) -> InputResult {
        self.release(dom, true)
    }

    fn release(&mut self, dom: &D, cancelled: bool) -> InputResult {
        let Some(gesture) = self.gesture.take() else {
            return InputResult::Unhandled;
        };
        dom.set_style(&self.handle, "cursor", "grab");
        gesture.finish(dom, &self.container, &self.suppressed, &self.handle);

        let released = if cancelled { None } else { self.snap.pending() };
        self.cancel_snap(dom);

        match released {
            Some(SnapTarget::Edge(edge)) => {
                if let Some(callback) = &self.on_edge_snap {
                    debug!(%edge, "edge snap released");
                    let callback = Rc::clone(callback);
                    self.tasks.defer(move || callback(edge));
                }
            }
            Some(SnapTarget::Reset) => {
                if let Some(callback) = self.reset_snap.as_ref().and_then(|r| r.on_reset.clone()) {
                    debug!("reset snap released");
                    self.tasks.defer(move || callback());
                }
            }
            None => {}
        }
        InputResult::Handled
    }

    // =========================================================================
    // Snapping
    // =========================================================================

    fn update_snap(&mut self, dom: &D, left: f64, top: f64, size: Size, viewport: Size) {
        if self.edge_snap.is_none() && self.reset_snap.is_none() {
            return;
        }

        let edge = if self.edge_snap.is_some() {
            let [l, r, t, b] = boundary_flags(left, top, size, viewport, self.boundary_padding);
            resolve_edge(l, r, t, b)
        } else {
            None
        };
        let want_reset = edge.is_none()
            && self
                .reset_snap
                .as_ref()
                .is_some_and(|reset| (reset.is_active)());

        let candidate = match edge {
            Some(edge) => Some(SnapTarget::Edge(edge)),
            None if want_reset => Some(SnapTarget::Reset),
            None => None,
        };

        // Stable classification keeps its dwell timer and preview
        if candidate.is_some() && candidate == self.snap.target() {
            return;
        }

        self.cancel_snap(dom);
        if let Some(target) = candidate {
            self.snap.arm(target, dom.now_ms() + self.dwell_ms());
        }
    }

    /// Show the preview once the dwell has elapsed
    pub fn tick(&mut self, dom: &D, now: f64) {
        let Some(target) = self.snap.due(now) else {
            return;
        };
        let ghost = match target {
            SnapTarget::Edge(edge) => self.create_edge_ghost(dom, edge),
            SnapTarget::Reset => self.create_reset_ghost(dom),
        };
        match ghost {
            Ok(ghost) => {
                dom.set_style_next_frame(&ghost, "opacity", "1");
                self.snap.show(ghost);
            }
            Err(err) => {
                warn!(error = %err, "cannot show snap preview");
                self.cancel_snap(dom);
            }
        }
    }

    fn create_edge_ghost(&self, dom: &D, edge: SnapEdge) -> Result<D::Node, DomError> {
        let ghost = dom.create_element("div")?;
        apply_rules(dom, &ghost, GHOST_BASE);

        let rect = edge_ghost_rect(
            edge,
            dom.bounding_rect(&self.container),
            dom.viewport(),
            self.boundary_padding,
        );
        dom.set_style(&ghost, "top", &px(rect.y));
        dom.set_style(&ghost, "left", &px(rect.x));
        dom.set_style(&ghost, "width", &px(rect.width));
        dom.set_style(&ghost, "height", &px(rect.height));

        if let Some(snap) = &self.edge_snap {
            apply_map(dom, &ghost, &snap.ghost_style);
        }
        dom.append_child(&dom.body()?, &ghost)?;
        Ok(ghost)
    }

    fn create_reset_ghost(&self, dom: &D) -> Result<D::Node, DomError> {
        let Some(reset) = &self.reset_snap else {
            return Err(DomError::Tree("no reset snap configured".to_string()));
        };
        let ghost = (reset.build_ghost)(dom)?;
        dom.append_child(&dom.body()?, &ghost)?;
        Ok(ghost)
    }

    fn cancel_snap(&mut self, dom: &D) {
        if let Some(ghost) = self.snap.clear() {
            dom.remove(&ghost);
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Drop explicit `top`/`left`, returning to preset anchoring
    pub fn reset_position(&self, dom: &D) {
        for property in ["top", "left", "bottom", "right"] {
            dom.set_style(&self.container, property, "");
        }
    }

    /// Remove the grip and any preview, undoing an in-progress drag
    pub fn destroy(mut self, dom: &D) {
        self.cancel_snap(dom);
        if let Some(gesture) = self.gesture.take() {
            gesture.finish(dom, &self.container, &self.suppressed, &self.handle);
        }
        dom.remove(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_dom::Rect;
    use berth_dom_mock::{MemoryDom, NodeId};
    use std::cell::{Cell, RefCell};

    struct Fixture {
        dom: MemoryDom,
        container: NodeId,
        iframe: NodeId,
        tasks: TaskQueue,
        snapped: Rc<RefCell<Vec<SnapEdge>>>,
    }

    /// 1000x800 viewport with a 300x200 box at (400, 300)
    fn fixture() -> Fixture {
        let dom = MemoryDom::new(1000.0, 800.0);
        let body = dom.body().unwrap();
        let container = dom.create_element("div").unwrap();
        let iframe = dom.create_element("iframe").unwrap();
        dom.append_child(&body, &container).unwrap();
        dom.append_child(&container, &iframe).unwrap();
        for (k, v) in [
            ("position", "fixed"),
            ("left", "400px"),
            ("top", "300px"),
            ("width", "300px"),
            ("height", "200px"),
        ] {
            dom.set_style(&container, k, v);
        }
        Fixture {
            dom,
            container,
            iframe,
            tasks: TaskQueue::new(),
            snapped: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn attach(fx: &Fixture, options: DraggableOptions) -> DragController<MemoryDom> {
        let snapped = Rc::clone(&fx.snapped);
        DragController::attach(
            &fx.dom,
            &fx.container,
            &fx.iframe,
            DragConfig {
                options,
                on_edge_snap: Some(Rc::new(move |edge| snapped.borrow_mut().push(edge))),
                reset_snap: None,
                tasks: fx.tasks.clone(),
            },
        )
        .unwrap()
    }

    fn start_drag(fx: &Fixture, drag: &mut DragController<MemoryDom>) -> PointerInput {
        let input = PointerInput::primary(410.0, 310.0);
        let handle = *drag.handle();
        assert_eq!(drag.pointer_down(&fx.dom, &handle, input), InputResult::Handled);
        input
    }

    #[test]
    fn test_attach_inserts_grip() {
        let fx = fixture();
        let drag = attach(&fx, DraggableOptions::default());
        assert_eq!(fx.dom.parent(drag.handle()), Some(fx.container));
        assert_eq!(fx.dom.style(drag.handle(), "width"), "24px");
        assert_eq!(fx.dom.style(drag.handle(), "cursor"), "grab");
        assert_eq!(fx.dom.inner_html(*drag.handle()), GRIP_ICON);
    }

    #[test]
    fn test_pointer_down_elsewhere_is_ignored() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let result = drag.pointer_down(&fx.dom, &fx.iframe, PointerInput::primary(0.0, 0.0));
        assert_eq!(result, InputResult::Unhandled);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let handle = *drag.handle();
        let input = PointerInput {
            button: 2,
            ..PointerInput::primary(0.0, 0.0)
        };
        assert_eq!(drag.pointer_down(&fx.dom, &handle, input), InputResult::Unhandled);
    }

    #[test]
    fn test_pointer_down_pins_top_left_and_suppresses_iframe() {
        let fx = fixture();
        fx.dom.set_style(&fx.container, "transition", "opacity 1s");
        let mut drag = attach(&fx, DraggableOptions::default());
        start_drag(&fx, &mut drag);

        assert!(drag.is_dragging());
        assert_eq!(fx.dom.style(&fx.container, "top"), "300px");
        assert_eq!(fx.dom.style(&fx.container, "left"), "400px");
        assert_eq!(fx.dom.style(&fx.container, "bottom"), "auto");
        assert_eq!(fx.dom.style(&fx.container, "transition"), "none");
        assert_eq!(fx.dom.style(&fx.iframe, "pointer-events"), "none");
        assert_eq!(fx.dom.capture_target(1), Some(*drag.handle()));
    }

    #[test]
    fn test_second_pointer_keeps_first_gesture() {
        let fx = fixture();
        fx.dom.set_style(&fx.container, "transition", "opacity 1s");
        let mut drag = attach(&fx, DraggableOptions::default());
        let first = start_drag(&fx, &mut drag);

        let handle = *drag.handle();
        let second = PointerInput {
            pointer_id: 2,
            ..PointerInput::primary(600.0, 500.0)
        };
        assert_eq!(drag.pointer_down(&fx.dom, &handle, second), InputResult::Handled);
        assert_eq!(fx.dom.capture_target(1), Some(handle));
        assert_eq!(fx.dom.capture_target(2), None);

        assert_eq!(drag.pointer_up(&fx.dom, first), InputResult::Handled);
        assert!(!drag.is_dragging());
        assert_eq!(fx.dom.style(&fx.container, "transition"), "opacity 1s");
        assert_eq!(fx.dom.capture_target(1), None);
    }

    #[test]
    fn test_move_is_clamped_to_padding() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);

        drag.pointer_move(&fx.dom, input.at(-500.0, -500.0));
        assert_eq!(fx.dom.style(&fx.container, "left"), "20px");
        assert_eq!(fx.dom.style(&fx.container, "top"), "20px");

        drag.pointer_move(&fx.dom, input.at(5000.0, 5000.0));
        assert_eq!(fx.dom.style(&fx.container, "left"), "680px");
        assert_eq!(fx.dom.style(&fx.container, "top"), "580px");

        drag.pointer_move(&fx.dom, input.at(460.0, 290.0));
        assert_eq!(fx.dom.style(&fx.container, "left"), "450px");
        assert_eq!(fx.dom.style(&fx.container, "top"), "280px");
    }

    #[test]
    fn test_release_restores_transient_styles() {
        let fx = fixture();
        fx.dom.set_style(&fx.container, "transition", "opacity 1s");
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);
        drag.pointer_up(&fx.dom, input);

        assert!(!drag.is_dragging());
        assert_eq!(fx.dom.style(&fx.container, "transition"), "opacity 1s");
        assert_eq!(fx.dom.style(&fx.iframe, "pointer-events"), "");
        assert_eq!(fx.dom.capture_target(1), None);
    }

    #[test]
    fn test_edge_dwell_shows_ghost_and_release_defers_callback() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);

        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        assert_eq!(drag.snap_target(), Some(SnapTarget::Edge(SnapEdge::Left)));
        assert_eq!(drag.next_deadline(), Some(500.0));

        fx.dom.advance(499.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        assert_eq!(drag.pending_snap(), None);

        fx.dom.advance(1.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        assert_eq!(drag.pending_snap(), Some(SnapTarget::Edge(SnapEdge::Left)));
        let body = fx.dom.body().unwrap();
        let ghost = *fx.dom.children(body).last().unwrap();
        assert_eq!(fx.dom.style(&ghost, "opacity"), "1");
        assert_eq!(fx.dom.style(&ghost, "height"), "760px");
        assert_eq!(fx.dom.style(&ghost, "width"), "300px");

        drag.pointer_up(&fx.dom, input);
        assert!(!fx.dom.is_attached(ghost));
        assert!(fx.snapped.borrow().is_empty());
        assert_eq!(fx.tasks.run_pending(), 1);
        assert_eq!(*fx.snapped.borrow(), vec![SnapEdge::Left]);
    }

    #[test]
    fn test_release_before_dwell_does_not_snap() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        fx.dom.advance(200.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        drag.pointer_up(&fx.dom, input);
        assert!(fx.tasks.is_empty());
        assert_eq!(drag.next_deadline(), None);
    }

    #[test]
    fn test_changing_edge_restarts_dwell() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        fx.dom.advance(300.0);
        // Same edge: deadline unchanged
        drag.pointer_move(&fx.dom, input.at(-600.0, 320.0));
        assert_eq!(drag.next_deadline(), Some(500.0));
        // Corner: restart
        drag.pointer_move(&fx.dom, input.at(-600.0, -600.0));
        assert_eq!(drag.snap_target(), Some(SnapTarget::Edge(SnapEdge::TopLeft)));
        assert_eq!(drag.next_deadline(), Some(800.0));
        // Away from every edge: cancelled
        drag.pointer_move(&fx.dom, input);
        assert_eq!(drag.snap_target(), None);
        assert_eq!(drag.next_deadline(), None);
    }

    #[test]
    fn test_cancel_never_fires_callback() {
        let fx = fixture();
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(5000.0, 310.0));
        fx.dom.advance(500.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        assert!(drag.pending_snap().is_some());

        drag.pointer_cancel(&fx.dom, input);
        assert!(fx.tasks.is_empty());
        assert_eq!(drag.pending_snap(), None);
        assert_eq!(fx.dom.style(&fx.iframe, "pointer-events"), "");
    }

    #[test]
    fn test_edge_snap_disabled() {
        let fx = fixture();
        let mut drag = attach(
            &fx,
            DraggableOptions {
                edge_snap: crate::config::Toggle::Off,
                ..DraggableOptions::default()
            },
        );
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        assert_eq!(drag.snap_target(), None);
    }

    #[test]
    fn test_reset_snap_dwell_and_release() {
        let fx = fixture();
        let active = Rc::new(Cell::new(true));
        let resets = Rc::new(Cell::new(0));
        let (a, r) = (Rc::clone(&active), Rc::clone(&resets));
        let mut drag = DragController::attach(
            &fx.dom,
            &fx.container,
            &fx.iframe,
            DragConfig {
                options: DraggableOptions::default(),
                on_edge_snap: None,
                reset_snap: Some(ResetSnap {
                    is_active: Box::new(move || a.get()),
                    build_ghost: Box::new(|dom: &MemoryDom| dom.create_element("div")),
                    on_reset: Some(Rc::new(move || r.set(r.get() + 1))),
                }),
                tasks: fx.tasks.clone(),
            },
        )
        .unwrap();

        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(420.0, 320.0));
        assert_eq!(drag.snap_target(), Some(SnapTarget::Reset));
        fx.dom.advance(500.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        assert_eq!(drag.pending_snap(), Some(SnapTarget::Reset));

        drag.pointer_up(&fx.dom, input);
        fx.tasks.run_pending();
        assert_eq!(resets.get(), 1);
    }

    #[test]
    fn test_edge_wins_over_reset() {
        let fx = fixture();
        let mut drag = DragController::attach(
            &fx.dom,
            &fx.container,
            &fx.iframe,
            DragConfig {
                options: DraggableOptions::default(),
                on_edge_snap: None,
                reset_snap: Some(ResetSnap {
                    is_active: Box::new(|| true),
                    build_ghost: Box::new(|dom: &MemoryDom| dom.create_element("div")),
                    on_reset: None,
                }),
                tasks: fx.tasks.clone(),
            },
        )
        .unwrap();
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        assert_eq!(drag.snap_target(), Some(SnapTarget::Edge(SnapEdge::Left)));
    }

    #[test]
    fn test_reset_position_clears_anchors() {
        let fx = fixture();
        let drag = attach(&fx, DraggableOptions::default());
        drag.reset_position(&fx.dom);
        assert_eq!(fx.dom.style(&fx.container, "left"), "");
        assert_eq!(fx.dom.style(&fx.container, "top"), "");
    }

    #[test]
    fn test_destroy_mid_drag_restores_styles() {
        let fx = fixture();
        fx.dom.set_style(&fx.container, "transition", "opacity 1s");
        let mut drag = attach(&fx, DraggableOptions::default());
        let input = start_drag(&fx, &mut drag);
        drag.pointer_move(&fx.dom, input.at(-500.0, 310.0));
        fx.dom.advance(500.0);
        drag.tick(&fx.dom, fx.dom.now_ms());
        let handle = *drag.handle();
        let body_children = fx.dom.children(fx.dom.body().unwrap()).len();

        drag.destroy(&fx.dom);
        assert!(!fx.dom.is_attached(handle));
        assert_eq!(fx.dom.children(fx.dom.body().unwrap()).len(), body_children - 1);
        assert_eq!(fx.dom.style(&fx.iframe, "pointer-events"), "");
        assert_eq!(fx.dom.style(&fx.container, "transition"), "opacity 1s");
        assert_eq!(fx.dom.bounding_rect(&fx.container), Rect::new(20.0, 300.0, 300.0, 200.0));
    }
}
