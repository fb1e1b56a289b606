//! Axis table

use berth_dom::{Rect, Size};
use serde::{Deserialize, Serialize};

/// A layout dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Height,
    Width,
}

/// Override state of one axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisState {
    /// Preset geometry
    #[default]
    Normal,
    /// Collapsed to a fixed size
    Minimized,
    /// Stretched across the viewport
    Maximized,
}

impl AxisState {
    pub fn as_str(self) -> &'static str {
        match self {
            AxisState::Normal => "normal",
            AxisState::Minimized => "minimized",
            AxisState::Maximized => "maximized",
        }
    }
}

/// CSS vocabulary of one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisProps {
    /// Leading position property
    pub start: &'static str,
    /// Trailing position property
    pub end: &'static str,
    /// Size property
    pub size: &'static str,
    /// Viewport unit matching the axis
    pub viewport_unit: &'static str,
}

const HEIGHT: AxisProps = AxisProps {
    start: "top",
    end: "bottom",
    size: "height",
    viewport_unit: "vh",
};

const WIDTH: AxisProps = AxisProps {
    start: "left",
    end: "right",
    size: "width",
    viewport_unit: "vw",
};

impl Axis {
    /// Both axes
    pub const ALL: [Axis; 2] = [Axis::Height, Axis::Width];

    /// CSS vocabulary for this axis
    #[inline]
    pub fn props(self) -> &'static AxisProps {
        match self {
            Axis::Height => &HEIGHT,
            Axis::Width => &WIDTH,
        }
    }

    /// The perpendicular axis
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::Height => Axis::Width,
            Axis::Width => Axis::Height,
        }
    }

    /// Viewport extent along this axis
    #[inline]
    pub fn viewport_extent(self, viewport: Size) -> f64 {
        match self {
            Axis::Height => viewport.height,
            Axis::Width => viewport.width,
        }
    }

    /// Start coordinate and extent of a rectangle along this axis
    #[inline]
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Axis::Height => (rect.y, rect.height),
            Axis::Width => (rect.x, rect.width),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Height => "height",
            Axis::Width => "width",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_props_are_symmetric() {
        assert_eq!(Axis::Height.props().start, "top");
        assert_eq!(Axis::Height.props().viewport_unit, "vh");
        assert_eq!(Axis::Width.props().end, "right");
        assert_eq!(Axis::Width.props().size, "width");
        assert_eq!(Axis::Height.other(), Axis::Width);
        assert_eq!(Axis::Width.other().other(), Axis::Width);
    }

    #[test]
    fn test_span() {
        let rect = Rect::new(10.0, 20.0, 300.0, 400.0);
        assert_eq!(Axis::Height.span(rect), (20.0, 400.0));
        assert_eq!(Axis::Width.span(rect), (10.0, 300.0));
    }
}
