//! Detach and dock
//!
//! Detaching moves the container from its mount point to the document body,
//! leaving a placeholder behind; docking moves it back. Moving an iframe
//! reloads it, so the embedded page's location fragment is captured first and
//! carried over to the reloaded source.
//!
//! A same-origin fragment is read directly. Otherwise the embedded page is
//! asked for it with a request/report message pair; without a report within
//! the configured timeout the move proceeds with an empty fragment.
//!
//! Preconditions are checked once, when the operation is requested. A second
//! request arriving while a fragment is awaited passes that check too.
//!
//! Reports are matched to requests in order. A report arriving after its
//! request timed out resolves the next queued request instead, which then
//! carries that stale fragment.

use berth_dom::{Dom, Rect};
use tracing::{debug, warn};
use url::Url;

use super::Widget;
use crate::error::WidgetError;
use crate::layout::AxisState;
use crate::protocol::Verb;
use crate::state::WidgetState;
use crate::style::{apply_map, apply_rules, px, StylePreset, PLACEHOLDER_BASE};

/// Placement change waiting for the embedded page's fragment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HashOp {
    Detach,
    Dock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PendingHash {
    pub op: HashOp,
    /// When to give up and proceed with an empty fragment
    pub deadline: f64,
}

impl<D: Dom> Widget<D> {
    /// Move an inline widget out of its parent into a floating layout
    ///
    /// Requires a reparent target and an inline, docked widget; otherwise
    /// logs a warning and does nothing.
    pub fn detach(&mut self) {
        let state = self.state.get();
        if state.destroyed {
            return;
        }
        if state.detached {
            warn!("widget is already detached");
            return;
        }
        if state.preset != StylePreset::Inline {
            warn!(preset = %state.preset, "only an inline widget can detach");
            return;
        }
        if self.parent.is_none() {
            warn!("widget has no reparent target; cannot detach");
            return;
        }
        self.exchange_hash(HashOp::Detach);
    }

    /// Move a detached widget back to its original place
    pub fn dock(&mut self) {
        let state = self.state.get();
        if state.destroyed {
            return;
        }
        if !state.detached {
            warn!("widget is not detached; cannot dock");
            return;
        }
        self.exchange_hash(HashOp::Dock);
    }

    fn exchange_hash(&mut self, op: HashOp) {
        match self.dom.frame_location_hash(&self.iframe) {
            Some(hash) => self.complete(op, &hash),
            None => {
                let deadline = self.dom.now_ms() + self.options.hash_timeout_ms;
                self.pending_hash.push_back(PendingHash { op, deadline });
                debug!(?op, "requesting location hash");
                self.send(Verb::RequestHash.as_str(), None);
            }
        }
    }

    /// The embedded page answered a hash request
    pub(super) fn resolve_hash(&mut self, hash: &str) {
        match self.pending_hash.pop_front() {
            Some(pending) => self.complete(pending.op, hash),
            None => debug!("ignoring unsolicited hash report"),
        }
    }

    /// Proceed with an empty fragment for every request past its deadline
    pub(super) fn expire_hash_requests(&mut self, now: f64) {
        while let Some(pending) = self.pending_hash.front().copied() {
            if now < pending.deadline {
                break;
            }
            self.pending_hash.pop_front();
            debug!(op = ?pending.op, "hash request timed out");
            self.complete(pending.op, "");
        }
    }

    fn complete(&mut self, op: HashOp, hash: &str) {
        if self.is_destroyed() {
            return;
        }
        let result = match op {
            HashOp::Detach => self.complete_detach(hash),
            HashOp::Dock => self.complete_dock(hash),
        };
        if let Err(err) = result {
            warn!(?op, error = %err, "placement change failed");
        }
    }

    fn complete_detach(&mut self, hash: &str) -> Result<(), WidgetError> {
        let parent = self.parent.clone().ok_or(WidgetError::NoReparentTarget)?;
        let placeholder = self.build_placeholder(self.dom.bounding_rect(&self.container))?;
        self.dom.insert_before(&parent, &placeholder, &self.container)?;
        self.placeholder = Some(placeholder);

        self.teardown_interactions();
        let body = self.dom.body()?;
        self.dom.append_child(&body, &self.container)?;
        self.restore_location(hash);

        let before = self.state.get();
        let preset = if self.options.is_small_screen(self.dom.viewport().width) {
            StylePreset::Fullscreen
        } else {
            StylePreset::Float
        };
        self.pre_detach_preset = Some(before.preset);
        self.overrides.clear();
        self.apply_preset(preset);
        self.state.set(WidgetState {
            preset,
            detached: true,
            height_state: AxisState::Normal,
            width_state: AxisState::Normal,
            ..before
        });
        self.attach_interactions();
        self.push_placement();
        debug!(%preset, "widget detached");
        Ok(())
    }

    fn complete_dock(&mut self, hash: &str) -> Result<(), WidgetError> {
        let placeholder = self.placeholder.clone().ok_or(WidgetError::NoPlaceholder)?;
        let parent = self
            .dom
            .parent(&placeholder)
            .or_else(|| self.parent.clone())
            .ok_or(WidgetError::NoReparentTarget)?;

        self.teardown_interactions();
        self.dom.insert_before(&parent, &self.container, &placeholder)?;
        self.dom.remove(&placeholder);
        self.placeholder = None;
        self.restore_location(hash);

        let before = self.state.get();
        let preset = self
            .pre_detach_preset
            .take()
            .unwrap_or(self.options.initial_preset);
        self.overrides.clear();
        self.apply_preset(preset);
        self.state.set(WidgetState {
            preset,
            detached: false,
            height_state: AxisState::Normal,
            width_state: AxisState::Normal,
            ..before
        });
        self.attach_interactions();
        self.push_placement();
        debug!(%preset, "widget docked");
        Ok(())
    }

    fn build_placeholder(&self, rect: Rect) -> Result<D::Node, WidgetError> {
        let placeholder = self.dom.create_element("div")?;
        apply_rules(&self.dom, &placeholder, PLACEHOLDER_BASE);
        self.dom.set_style(&placeholder, "width", &px(rect.width));
        self.dom.set_style(&placeholder, "height", &px(rect.height));
        let options = &self.options.placeholder;
        apply_map(&self.dom, &placeholder, &options.style);
        if let Some(content) = &options.content {
            self.dom.set_inner_html(&placeholder, content);
        }
        Ok(placeholder)
    }

    /// Point the reloaded iframe at the widget URL with `hash` as fragment
    fn restore_location(&self, hash: &str) {
        let src = with_fragment(&self.options.widget_url, hash);
        self.dom.set_frame_src(&self.iframe, &src);
    }
}

/// Replace the fragment of `url`; an empty `hash` removes it
pub(crate) fn with_fragment(url: &str, hash: &str) -> String {
    let fragment = hash.trim_start_matches('#');
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment((!fragment.is_empty()).then_some(fragment));
            parsed.into()
        }
        Err(_) => {
            let base = url.split('#').next().unwrap_or(url);
            if fragment.is_empty() {
                base.to_string()
            } else {
                format!("{base}#{fragment}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_fragment() {
        assert_eq!(
            with_fragment("https://example.com/app", "#/inbox"),
            "https://example.com/app#/inbox"
        );
        assert_eq!(
            with_fragment("https://example.com/app#/old", "/new"),
            "https://example.com/app#/new"
        );
        assert_eq!(
            with_fragment("https://example.com/app#/old", ""),
            "https://example.com/app"
        );
    }

    #[test]
    fn test_with_fragment_relative_url() {
        assert_eq!(with_fragment("/widget#a", "#b"), "/widget#b");
        assert_eq!(with_fragment("/widget", ""), "/widget");
    }
}
