//! Axis override records

use berth_dom::{Dom, Rect, Size};

use super::Axis;
use crate::style::px;

/// Offset used when the container has no measurable size yet
pub const DEFAULT_AXIS_OFFSET: f64 = 20.0;

/// Size of a minimized axis when none is given
pub const DEFAULT_MINIMIZED_SIZE: f64 = 48.0;

/// CSS declarations making up one axis override
pub type OverrideRules = Vec<(&'static str, String)>;

/// Remembered overrides for both axes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOverrides {
    height: Option<OverrideRules>,
    width: Option<OverrideRules>,
}

impl AxisOverrides {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, axis: Axis) -> &mut Option<OverrideRules> {
        match axis {
            Axis::Height => &mut self.height,
            Axis::Width => &mut self.width,
        }
    }

    /// Override of an axis, if any
    pub fn get(&self, axis: Axis) -> Option<&OverrideRules> {
        match axis {
            Axis::Height => self.height.as_ref(),
            Axis::Width => self.width.as_ref(),
        }
    }

    /// Remember an axis override, replacing any previous one
    pub fn record(&mut self, axis: Axis, rules: OverrideRules) {
        *self.slot(axis) = Some(rules);
    }

    /// Forget both overrides
    pub fn clear(&mut self) {
        self.height = None;
        self.width = None;
    }

    /// Check if neither axis is overridden
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.width.is_none()
    }

    /// Write an axis override onto a node
    pub fn apply<D: Dom>(&self, dom: &D, node: &D::Node, axis: Axis) {
        if let Some(rules) = self.get(axis) {
            for (property, value) in rules {
                dom.set_style(node, property, value);
            }
        }
    }
}

/// Declarations stretching an axis across the viewport
///
/// The start edge is pinned at `offset`, the end edge is released, and the
/// size fills the viewport minus `offset` on both sides.
pub fn maximize_rules(axis: Axis, offset: f64) -> OverrideRules {
    let props = axis.props();
    vec![
        (props.start, px(offset)),
        (props.end, String::new()),
        (
            props.size,
            format!("calc(100{} - {})", props.viewport_unit, px(2.0 * offset)),
        ),
    ]
}

/// Declarations collapsing an axis to `size`
pub fn minimize_rules(axis: Axis, size: f64) -> OverrideRules {
    vec![(axis.props().size, px(size))]
}

/// Offset a maximized axis keeps from the viewport edges
///
/// The smaller of the container's distances to the two viewport edges along
/// the axis, or [`DEFAULT_AXIS_OFFSET`] when the container has no extent.
pub fn default_offset(axis: Axis, rect: Rect, viewport: Size) -> f64 {
    let (start, extent) = axis.span(rect);
    if extent <= 0.0 {
        return DEFAULT_AXIS_OFFSET;
    }
    let end_gap = axis.viewport_extent(viewport) - (start + extent);
    start.min(end_gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_maximize_height_rules() {
        assert_eq!(
            maximize_rules(Axis::Height, 20.0),
            vec![
                ("top", "20px".to_string()),
                ("bottom", String::new()),
                ("height", "calc(100vh - 40px)".to_string()),
            ]
        );
    }

    #[test]
    fn test_maximize_width_rules() {
        assert_eq!(
            maximize_rules(Axis::Width, 0.0),
            vec![
                ("left", "0px".to_string()),
                ("right", String::new()),
                ("width", "calc(100vw - 0px)".to_string()),
            ]
        );
    }

    #[test]
    fn test_minimize_rules() {
        assert_eq!(
            minimize_rules(Axis::Height, 48.0),
            vec![("height", "48px".to_string())]
        );
    }

    #[test]
    fn test_default_offset_picks_nearest_edge() {
        let viewport = Size::new(1000.0, 800.0);
        // float preset: bottom 20px, height 520px
        let rect = Rect::new(600.0, 260.0, 380.0, 520.0);
        assert_eq!(default_offset(Axis::Height, rect, viewport), 20.0);
        let rect = Rect::new(600.0, 50.0, 380.0, 520.0);
        assert_eq!(default_offset(Axis::Height, rect, viewport), 50.0);
    }

    #[test]
    fn test_default_offset_without_size() {
        let viewport = Size::new(1000.0, 800.0);
        assert_eq!(
            default_offset(Axis::Width, Rect::ZERO, viewport),
            DEFAULT_AXIS_OFFSET
        );
    }

    #[test]
    fn test_record_and_clear() {
        let mut overrides = AxisOverrides::new();
        assert!(overrides.is_empty());
        overrides.record(Axis::Width, minimize_rules(Axis::Width, 48.0));
        assert!(overrides.get(Axis::Width).is_some());
        assert!(overrides.get(Axis::Height).is_none());
        overrides.clear();
        assert!(overrides.is_empty());
    }
}
