//! Viewport geometry helpers

mod edge;

pub use edge::{resolve_edge, SnapEdge};

use berth_dom::{Rect, Size};

/// Proximity flags `[left, right, top, bottom]` for a box against the viewport
///
/// A side counts as reached when the box sits at the clamped limit for it.
pub fn boundary_flags(left: f64, top: f64, size: Size, viewport: Size, padding: f64) -> [bool; 4] {
    [
        left <= padding,
        left >= viewport.width - size.width - padding,
        top <= padding,
        top >= viewport.height - size.height - padding,
    ]
}

/// Preview box for an edge snap
///
/// Corners cover the viewport inset by `padding`. Left and right previews span
/// the full height while keeping the container's horizontal extent; top and
/// bottom previews span the full width while keeping its vertical extent.
pub fn edge_ghost_rect(edge: SnapEdge, container: Rect, viewport: Size, padding: f64) -> Rect {
    let full_width = viewport.width - 2.0 * padding;
    let full_height = viewport.height - 2.0 * padding;
    if edge.is_corner() {
        return Rect::new(padding, padding, full_width, full_height);
    }
    match edge {
        SnapEdge::Left | SnapEdge::Right => {
            Rect::new(container.x, padding, container.width, full_height)
        }
        _ => Rect::new(padding, container.y, full_width, container.height),
    }
}
