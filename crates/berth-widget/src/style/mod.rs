//! Style presets and CSS rule tables

mod css;
mod presets;

pub use css::{apply_map, apply_rules, property_name, px, Rules, StyleMap};
pub use presets::{
    AnimateConfig, AnimatePreset, DEFAULT_TRIGGER_ICON, DRAG_HANDLE_BASE, GHOST_BASE, GRIP_ICON,
    IFRAME_BASE, PLACEHOLDER_BASE, RESIZE_HANDLE_BASE, RESIZE_ICON, TRIGGER_BASE,
};

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Layout mode of the widget container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Flows inside its parent element
    #[default]
    Inline,
    /// Fixed panel anchored to the bottom-right corner
    Float,
    /// Covers the whole viewport
    Fullscreen,
}

impl StylePreset {
    /// Preset name as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            StylePreset::Inline => "inline",
            StylePreset::Float => "float",
            StylePreset::Fullscreen => "fullscreen",
        }
    }

    /// Base CSS rules of the preset
    pub fn rules(self) -> Rules {
        match self {
            StylePreset::Inline => presets::INLINE,
            StylePreset::Float => presets::FLOAT,
            StylePreset::Fullscreen => presets::FULLSCREEN,
        }
    }

    /// Whether the preset is positioned against the viewport
    #[inline]
    pub fn is_fixed(self) -> bool {
        !matches!(self, StylePreset::Inline)
    }
}

impl std::str::FromStr for StylePreset {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(StylePreset::Inline),
            "float" => Ok(StylePreset::Float),
            "fullscreen" => Ok(StylePreset::Fullscreen),
            other => Err(WidgetError::UnknownPreset(other.to_string())),
        }
    }
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!("float".parse::<StylePreset>().unwrap(), StylePreset::Float);
        assert!(matches!(
            "sidebar".parse::<StylePreset>(),
            Err(WidgetError::UnknownPreset(name)) if name == "sidebar"
        ));
    }

    #[test]
    fn test_preset_rules_position() {
        let position = |p: StylePreset| {
            p.rules()
                .iter()
                .find(|(k, _)| *k == "position")
                .map(|(_, v)| *v)
        };
        assert_eq!(position(StylePreset::Inline), Some("relative"));
        assert_eq!(position(StylePreset::Float), Some("fixed"));
        assert_eq!(position(StylePreset::Fullscreen), Some("fixed"));
    }

    #[test]
    fn test_preset_serde_names() {
        assert_eq!(
            serde_json::to_string(&StylePreset::Fullscreen).unwrap(),
            "\"fullscreen\""
        );
        let parsed: StylePreset = serde_json::from_str("\"inline\"").unwrap();
        assert_eq!(parsed, StylePreset::Inline);
    }
}
