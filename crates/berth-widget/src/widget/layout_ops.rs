//! Preset and axis operations

use berth_dom::Dom;
use tracing::debug;

use super::Widget;
use crate::layout::{
    default_offset, maximize_rules, minimize_rules, Axis, AxisState, OverrideRules,
    DEFAULT_MINIMIZED_SIZE,
};
use crate::state::WidgetState;
use crate::style::{apply_map, apply_rules, StylePreset};

impl<D: Dom> Widget<D> {
    /// Replace the container's inline style with a preset baseline
    ///
    /// Caller overrides, the animation transition and the hidden styling are
    /// layered on top. Any position left by a drag is discarded.
    pub(super) fn apply_preset(&mut self, preset: StylePreset) {
        let dom = &self.dom;
        let container = &self.container;
        dom.clear_style(container);
        apply_rules(dom, container, preset.rules());
        apply_map(dom, container, &self.options.style_overrides);
        if let Some(animate) = &self.options.animate {
            dom.set_style(container, "transition", &animate.transition);
        }
        if !self.state.get().visible {
            dom.set_style(container, "display", "none");
            if let Some(animate) = &self.options.animate {
                apply_rules(dom, container, animate.hidden);
            }
        }
        self.user_positioned = false;
    }

    /// Switch layout mode
    ///
    /// Switching a detached widget to inline docks it instead.
    pub fn set_preset(&mut self, preset: StylePreset) {
        let before = self.state.get();
        if before.destroyed {
            return;
        }
        if before.detached && preset == StylePreset::Inline {
            self.dock();
            return;
        }

        self.teardown_interactions();
        self.overrides.clear();
        self.apply_preset(preset);
        self.state.set(WidgetState {
            preset,
            height_state: AxisState::Normal,
            width_state: AxisState::Normal,
            ..before
        });
        self.attach_interactions();
        self.push_axis_changes(&before);
        debug!(%preset, "preset applied");
    }

    /// Switch to fullscreen
    pub fn maximize(&mut self) {
        self.set_preset(StylePreset::Fullscreen);
    }

    /// Return to the configured preset
    pub fn restore(&mut self) {
        self.set_preset(self.options.initial_preset);
    }

    /// Alias of [`restore`](Self::restore)
    pub fn minimize(&mut self) {
        self.restore();
    }

    /// Stretch one axis across the viewport
    ///
    /// The axis keeps `offset` from both viewport edges. Without an explicit
    /// offset the container keeps its current smallest gap. Ignored while
    /// inline.
    pub fn maximize_axis(&mut self, axis: Axis, offset: Option<f64>) {
        let Some(before) = self.begin_axis_change(axis) else {
            return;
        };
        let offset = offset.unwrap_or_else(|| {
            default_offset(axis, self.dom.bounding_rect(&self.container), self.dom.viewport())
        });
        self.commit_axis(axis, maximize_rules(axis, offset), AxisState::Maximized, before);
    }

    /// Collapse one axis to `size` pixels (48 by default); ignored while inline
    pub fn minimize_axis(&mut self, axis: Axis, size: Option<f64>) {
        let Some(before) = self.begin_axis_change(axis) else {
            return;
        };
        let size = size.unwrap_or(DEFAULT_MINIMIZED_SIZE);
        self.commit_axis(axis, minimize_rules(axis, size), AxisState::Minimized, before);
    }

    /// Drop both axis overrides and re-apply the current preset
    pub fn reset(&mut self) {
        let state = self.state.get();
        if state.destroyed || state.preset == StylePreset::Inline {
            return;
        }
        self.set_preset(state.preset);
    }

    /// Same as [`reset`](Self::reset)
    pub fn reset_height(&mut self) {
        self.reset();
    }

    /// Same as [`reset`](Self::reset)
    pub fn reset_width(&mut self) {
        self.reset();
    }

    /// Tear down interactions and return to the baseline, keeping the
    /// override of the other axis
    fn begin_axis_change(&mut self, axis: Axis) -> Option<WidgetState> {
        let state = self.state.get();
        if state.destroyed || state.preset == StylePreset::Inline {
            return None;
        }
        self.teardown_interactions();
        self.apply_preset(state.preset);
        self.overrides.apply(&self.dom, &self.container, axis.other());
        Some(state)
    }

    fn commit_axis(&mut self, axis: Axis, rules: OverrideRules, axis_state: AxisState, before: WidgetState) {
        for (property, value) in &rules {
            self.dom.set_style(&self.container, property, value);
        }
        self.overrides.record(axis, rules);
        self.state.set(before.with_axis(axis, axis_state));
        self.attach_interactions();
        self.send_axis_state(axis);
        debug!(%axis, state = axis_state.as_str(), "axis override applied");
    }

    /// A manual resize supersedes every axis override
    pub(super) fn resize_ended(&mut self) {
        let before = self.state.get();
        if before.destroyed {
            return;
        }
        self.overrides.clear();
        self.state.set(WidgetState {
            height_state: AxisState::Normal,
            width_state: AxisState::Normal,
            ..before
        });
        self.push_axis_changes(&before);
    }
}
