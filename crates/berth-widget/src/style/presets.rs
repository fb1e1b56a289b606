//! CSS rule tables

use serde::{Deserialize, Serialize};

use super::Rules;

pub(crate) const FLOAT: Rules = &[
    ("box-sizing", "border-box"),
    ("overflow", "hidden"),
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("width", "380px"),
    ("height", "520px"),
    ("z-index", "10000"),
    ("border-radius", "12px"),
    ("box-shadow", "0 4px 24px rgba(0,0,0,0.15)"),
];

pub(crate) const FULLSCREEN: Rules = &[
    ("box-sizing", "border-box"),
    ("overflow", "hidden"),
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100vw"),
    ("height", "100vh"),
    ("z-index", "10000"),
    ("padding", "2rem"),
    ("background-color", "rgba(0,0,0,0.5)"),
];

pub(crate) const INLINE: Rules = &[
    ("box-sizing", "border-box"),
    ("overflow", "hidden"),
    ("position", "relative"),
    ("width", "100%"),
    ("height", "100%"),
];

pub const IFRAME_BASE: Rules = &[
    ("width", "100%"),
    ("height", "100%"),
    ("border", "none"),
    ("display", "block"),
];

pub const TRIGGER_BASE: Rules = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("width", "56px"),
    ("height", "56px"),
    ("border-radius", "50%"),
    ("border", "none"),
    ("background", "#1a73e8"),
    ("color", "white"),
    ("cursor", "pointer"),
    ("z-index", "10001"),
    ("box-shadow", "0 4px 12px rgba(0,0,0,0.15)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("padding", "0"),
];

/// Stand-in left at the original position while detached
pub const PLACEHOLDER_BASE: Rules = &[
    ("box-sizing", "border-box"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("border", "2px dashed rgba(128,128,128,0.4)"),
    ("border-radius", "8px"),
    ("color", "#808080"),
];

/// Grip overlay in the container's top-left corner
pub const DRAG_HANDLE_BASE: Rules = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "1"),
    ("cursor", "grab"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("user-select", "none"),
    ("touch-action", "none"),
    ("opacity", "0.4"),
    ("color", "inherit"),
];

/// Corner grip in the container's bottom-right corner
pub const RESIZE_HANDLE_BASE: Rules = &[
    ("position", "absolute"),
    ("bottom", "2px"),
    ("right", "2px"),
    ("z-index", "1"),
    ("cursor", "nwse-resize"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("user-select", "none"),
    ("touch-action", "none"),
    ("opacity", "0.6"),
    ("color", "#808080"),
];

/// Snap preview; starts transparent and fades in on the next frame
pub const GHOST_BASE: Rules = &[
    ("position", "fixed"),
    ("box-sizing", "border-box"),
    ("border", "2px dashed rgba(128, 128, 128, 0.5)"),
    ("border-radius", "8px"),
    ("background", "rgba(128, 128, 128, 0.1)"),
    ("z-index", "9999"),
    ("pointer-events", "none"),
    ("transition", "opacity 150ms ease"),
    ("opacity", "0"),
];

pub const DEFAULT_TRIGGER_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/></svg>"#;

pub const GRIP_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" style="width:100%;height:100%;pointer-events:none"><circle cx="9" cy="6" r="1.5"/><circle cx="15" cy="6" r="1.5"/><circle cx="9" cy="12" r="1.5"/><circle cx="15" cy="12" r="1.5"/><circle cx="9" cy="18" r="1.5"/><circle cx="15" cy="18" r="1.5"/></svg>"#;

pub const RESIZE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" style="width:100%;height:100%;pointer-events:none"><path d="M20 10L10 20"/><path d="M20 16l-4 4"/></svg>"#;

/// Named show/hide animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimatePreset {
    /// Fade with a slight scale-up
    #[default]
    FadeScale,
    /// Fade while sliding up
    SlideUp,
}

impl AnimatePreset {
    /// Parse a preset name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fade-scale" => Some(AnimatePreset::FadeScale),
            "slide-up" => Some(AnimatePreset::SlideUp),
            _ => None,
        }
    }

    /// Concrete transition and endpoint styles
    pub fn config(self) -> AnimateConfig {
        let (hidden, visible) = match self {
            AnimatePreset::FadeScale => (FADE_SCALE_HIDDEN, FADE_SCALE_VISIBLE),
            AnimatePreset::SlideUp => (SLIDE_UP_HIDDEN, SLIDE_UP_VISIBLE),
        };
        AnimateConfig {
            transition: ANIMATE_TRANSITION.to_string(),
            hidden,
            visible,
        }
    }
}

const ANIMATE_TRANSITION: &str = "opacity 200ms ease, transform 200ms ease";
const FADE_SCALE_HIDDEN: Rules = &[("opacity", "0"), ("transform", "scale(0.9)")];
const FADE_SCALE_VISIBLE: Rules = &[("opacity", "1"), ("transform", "scale(1)")];
const SLIDE_UP_HIDDEN: Rules = &[("opacity", "0"), ("transform", "translateY(20px)")];
const SLIDE_UP_VISIBLE: Rules = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Resolved show/hide animation
#[derive(Clone, Debug, PartialEq)]
pub struct AnimateConfig {
    /// CSS `transition` applied to the container
    pub transition: String,
    /// Styles of the hidden end state
    pub hidden: Rules,
    /// Styles of the visible end state
    pub visible: Rules,
}
