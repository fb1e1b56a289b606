//! Minimal CSS box resolution
//!
//! Supports the subset of CSS the widget writes: `position: fixed` versus
//! in-flow boxes, `left`/`top`/`right`/`bottom` anchoring, lengths in `px`,
//! `%`, `vw`, `vh`, `rem`, single-operator `calc()`, and `display: none`.
//! Padding and borders are ignored, matching `box-sizing: border-box`.

use berth_dom::Rect;

use crate::{Document, NodeId};

/// Root font size used for `rem`
const ROOT_FONT_SIZE: f64 = 16.0;

pub(crate) fn resolve(doc: &Document, id: NodeId) -> Rect {
    let viewport = Rect::new(0.0, 0.0, doc.viewport.width, doc.viewport.height);
    if id == doc.body {
        return viewport;
    }

    let node = doc.node(id);
    let style = |name: &str| node.style.get(name).map(String::as_str).unwrap_or("");
    if style("display") == "none" {
        return Rect::ZERO;
    }

    let parent_rect = node
        .parent
        .map(|parent| resolve(doc, parent))
        .unwrap_or(viewport);
    let containing = if style("position") == "fixed" {
        viewport
    } else {
        parent_rect
    };
    let fallback = node
        .layout
        .unwrap_or(Rect::new(containing.x, containing.y, 0.0, 0.0));

    let units = Units {
        vw: doc.viewport.width,
        vh: doc.viewport.height,
    };
    let width = units
        .length(style("width"), containing.width)
        .unwrap_or(fallback.width);
    let height = units
        .length(style("height"), containing.height)
        .unwrap_or(fallback.height);

    let x = match (
        units.length(style("left"), containing.width),
        units.length(style("right"), containing.width),
    ) {
        (Some(left), _) => containing.x + left,
        (None, Some(right)) => containing.right() - right - width,
        (None, None) => fallback.x,
    };
    let y = match (
        units.length(style("top"), containing.height),
        units.length(style("bottom"), containing.height),
    ) {
        (Some(top), _) => containing.y + top,
        (None, Some(bottom)) => containing.bottom() - bottom - height,
        (None, None) => fallback.y,
    };

    Rect::new(x, y, width, height)
}

struct Units {
    vw: f64,
    vh: f64,
}

impl Units {
    /// Resolve a CSS length; `reference` is the base for percentages
    fn length(&self, value: &str, reference: f64) -> Option<f64> {
        let value = value.trim();
        if value.is_empty() || value == "auto" {
            return None;
        }
        if let Some(inner) = value.strip_prefix("calc(").and_then(|v| v.strip_suffix(')')) {
            return self.calc(inner, reference);
        }
        let number = |suffix: &str| value.strip_suffix(suffix)?.trim().parse::<f64>().ok();
        if let Some(v) = number("px") {
            return Some(v);
        }
        if let Some(v) = number("vw") {
            return Some(v * self.vw / 100.0);
        }
        if let Some(v) = number("vh") {
            return Some(v * self.vh / 100.0);
        }
        if let Some(v) = number("rem") {
            return Some(v * ROOT_FONT_SIZE);
        }
        if let Some(v) = number("%") {
            return Some(v * reference / 100.0);
        }
        value.parse().ok()
    }

    fn calc(&self, expr: &str, reference: f64) -> Option<f64> {
        if let Some((lhs, rhs)) = expr.split_once(" - ") {
            return Some(self.length(lhs, reference)? - self.length(rhs, reference)?);
        }
        if let Some((lhs, rhs)) = expr.split_once(" + ") {
            return Some(self.length(lhs, reference)? + self.length(rhs, reference)?);
        }
        self.length(expr, reference)
    }
}
