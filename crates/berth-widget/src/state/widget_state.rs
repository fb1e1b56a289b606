//! Widget state snapshot

use serde::Serialize;

use crate::layout::{Axis, AxisState};
use crate::style::StylePreset;

/// Complete observable state of a widget
///
/// Every transition replaces the whole snapshot. `destroyed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetState {
    pub visible: bool,
    pub ready: bool,
    pub destroyed: bool,
    pub preset: StylePreset,
    pub height_state: AxisState,
    pub width_state: AxisState,
    pub detached: bool,
    pub is_small_screen: bool,
}

impl WidgetState {
    /// Initial state of a freshly provided widget
    pub fn initial(preset: StylePreset, visible: bool, is_small_screen: bool) -> Self {
        Self {
            visible,
            ready: false,
            destroyed: false,
            preset,
            height_state: AxisState::Normal,
            width_state: AxisState::Normal,
            detached: false,
            is_small_screen,
        }
    }

    /// Override state of an axis
    #[inline]
    pub fn axis(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::Height => self.height_state,
            Axis::Width => self.width_state,
        }
    }

    /// Copy with one axis state replaced
    pub fn with_axis(self, axis: Axis, state: AxisState) -> Self {
        match axis {
            Axis::Height => Self {
                height_state: state,
                ..self
            },
            Axis::Width => Self {
                width_state: state,
                ..self
            },
        }
    }

    /// Whether any axis is stretched across the viewport
    #[inline]
    pub fn any_axis_maximized(&self) -> bool {
        self.height_state == AxisState::Maximized || self.width_state == AxisState::Maximized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let state = WidgetState::initial(StylePreset::Float, true, false);
        assert_eq!(
            serde_json::to_value(state).unwrap(),
            json!({
                "visible": true,
                "ready": false,
                "destroyed": false,
                "preset": "float",
                "heightState": "normal",
                "widthState": "normal",
                "detached": false,
                "isSmallScreen": false,
            })
        );
    }

    #[test]
    fn test_with_axis() {
        let state = WidgetState::initial(StylePreset::Float, true, false)
            .with_axis(Axis::Width, AxisState::Minimized);
        assert_eq!(state.axis(Axis::Width), AxisState::Minimized);
        assert_eq!(state.axis(Axis::Height), AxisState::Normal);
        assert!(!state.any_axis_maximized());
        assert!(state
            .with_axis(Axis::Height, AxisState::Maximized)
            .any_axis_maximized());
    }
}
