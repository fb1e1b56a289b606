//! Snap edge classification

use serde::{Deserialize, Serialize};

use crate::layout::Axis;

/// Viewport edge or corner a dragged container is pressed against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SnapEdge {
    /// Wire name of the edge
    pub fn as_str(self) -> &'static str {
        match self {
            SnapEdge::Left => "left",
            SnapEdge::Right => "right",
            SnapEdge::Top => "top",
            SnapEdge::Bottom => "bottom",
            SnapEdge::TopLeft => "top-left",
            SnapEdge::TopRight => "top-right",
            SnapEdge::BottomLeft => "bottom-left",
            SnapEdge::BottomRight => "bottom-right",
        }
    }

    /// Check if this is a corner
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            SnapEdge::TopLeft | SnapEdge::TopRight | SnapEdge::BottomLeft | SnapEdge::BottomRight
        )
    }

    /// Axes maximized when the snap is released
    ///
    /// Side edges stretch the perpendicular axis; corners stretch both.
    pub fn axes(self) -> &'static [Axis] {
        match self {
            SnapEdge::Left | SnapEdge::Right => &[Axis::Height],
            SnapEdge::Top | SnapEdge::Bottom => &[Axis::Width],
            _ => &[Axis::Height, Axis::Width],
        }
    }
}

impl std::fmt::Display for SnapEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify boundary proximity into a snap edge
///
/// One flag yields that edge, two adjacent flags yield the corner between
/// them. Anything else (none, opposing sides, three or four) is ambiguous.
pub fn resolve_edge(at_left: bool, at_right: bool, at_top: bool, at_bottom: bool) -> Option<SnapEdge> {
    match (at_left, at_right, at_top, at_bottom) {
        (true, false, false, false) => Some(SnapEdge::Left),
        (false, true, false, false) => Some(SnapEdge::Right),
        (false, false, true, false) => Some(SnapEdge::Top),
        (false, false, false, true) => Some(SnapEdge::Bottom),
        (true, false, true, false) => Some(SnapEdge::TopLeft),
        (false, true, true, false) => Some(SnapEdge::TopRight),
        (true, false, false, true) => Some(SnapEdge::BottomLeft),
        (false, true, false, true) => Some(SnapEdge::BottomRight),
        _ => None,
    }
}
