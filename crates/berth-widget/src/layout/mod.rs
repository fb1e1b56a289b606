//! Per-axis layout overrides
//!
//! Height and width are maximized or minimized independently on top of the
//! fixed presets. Both axes share one implementation driven by [`AxisProps`];
//! every override is remembered in [`AxisOverrides`] so that re-applying the
//! preset baseline for one axis can restore the other axis's override.

mod axis;
mod overrides;

pub use axis::{Axis, AxisProps, AxisState};
pub use overrides::{
    default_offset, maximize_rules, minimize_rules, AxisOverrides, OverrideRules,
    DEFAULT_AXIS_OFFSET, DEFAULT_MINIMIZED_SIZE,
};
