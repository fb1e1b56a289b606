//! Showing and hiding

use berth_dom::Dom;

use super::{Widget, HIDE_FALLBACK_MS};
use crate::state::WidgetState;
use crate::style::{apply_rules, StylePreset};

impl<D: Dom> Widget<D> {
    /// Make the widget visible, animating in when configured
    pub fn show(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.hide_deadline = None;

        let dom = &self.dom;
        let container = &self.container;
        match &self.options.animate {
            Some(animate) => {
                apply_rules(dom, container, animate.hidden);
                dom.set_style(container, "display", "");
                dom.force_reflow(container);
                apply_rules(dom, container, animate.visible);
            }
            None => dom.set_style(container, "display", ""),
        }
        if let Some(trigger) = &self.trigger {
            dom.set_style(trigger, "display", "none");
        }
        self.state.update(|s| WidgetState { visible: true, ..*s });
    }

    /// Hide the widget
    ///
    /// With an animation the container fades out and is removed from layout
    /// on `transitionend`, or after [`HIDE_FALLBACK_MS`] if that never fires.
    pub fn hide(&mut self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(trigger) = &self.trigger {
            self.dom.set_style(trigger, "display", "");
        }
        self.state.update(|s| WidgetState { visible: false, ..*s });

        match &self.options.animate {
            Some(animate) => {
                apply_rules(&self.dom, &self.container, animate.hidden);
                self.hide_deadline = Some(self.dom.now_ms() + HIDE_FALLBACK_MS);
            }
            None => self.dom.set_style(&self.container, "display", "none"),
        }
    }

    pub fn toggle(&mut self) {
        if self.state.get().visible {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Show the widget in the layout that suits the screen
    ///
    /// Small screens always get fullscreen. Otherwise the configured preset
    /// comes back, unless the user has dragged the widget somewhere.
    pub fn open(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.show();

        let state = self.state.get();
        if self.options.is_small_screen(self.dom.viewport().width) {
            if state.preset != StylePreset::Fullscreen {
                self.set_preset(StylePreset::Fullscreen);
            }
        } else if !self.user_positioned
            && !state.detached
            && state.preset != self.options.initial_preset
        {
            self.set_preset(self.options.initial_preset);
        }
    }

    /// Take a hidden container out of layout
    pub(super) fn finish_hide(&mut self) {
        self.hide_deadline = None;
        if !self.state.get().visible {
            self.dom.set_style(&self.container, "display", "none");
        }
    }
}
