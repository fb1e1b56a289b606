//! Widget configuration records

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Toggle;
use crate::protocol::AllowedOrigin;
use crate::style::{StyleMap, StylePreset};

/// Default small-screen breakpoint in CSS pixels
pub const DEFAULT_SMALL_SCREEN_BREAKPOINT: f64 = 640.0;

/// Default wait for a cross-origin hash report
pub const DEFAULT_HASH_TIMEOUT_MS: f64 = 50.0;

/// Default iframe sandbox
pub const DEFAULT_SANDBOX: &str = "allow-scripts allow-same-origin";

/// Options accepted when providing a widget
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    /// URL of the embedded application
    pub widget_url: String,
    /// Initial layout preset
    pub style_preset: StylePreset,
    /// Declarations applied on top of every preset
    pub style_overrides: StyleMap,
    /// Origins messages are accepted from and posted to
    pub allowed_origin: Option<AllowedOrigin>,
    /// Whether the widget starts visible
    pub visible: bool,
    /// Iframe sandbox attribute; `None` omits it
    pub sandbox: Option<String>,
    /// Extra iframe attributes
    pub iframe_attrs: BTreeMap<String, String>,
    /// Show/hide animation
    pub animate: AnimateOption,
    /// Launcher button shown while hidden
    pub trigger: Toggle<TriggerOptions>,
    /// Drag handle for floating layouts
    pub draggable: Toggle<DraggableOptions>,
    /// Resize handle for floating layouts
    pub resizable: Toggle<ResizableOptions>,
    /// Stand-in element left behind on detach
    pub placeholder: Toggle<PlaceholderOptions>,
    /// Viewport width below which the widget goes fullscreen; `0` disables
    pub small_screen_breakpoint: f64,
    /// Wait for a cross-origin hash report during detach/dock
    pub hash_timeout_ms: f64,
}

impl WidgetOptions {
    /// Options for the given URL with every other field defaulted
    pub fn new(widget_url: impl Into<String>) -> Self {
        Self {
            widget_url: widget_url.into(),
            ..Self::default()
        }
    }
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            widget_url: String::new(),
            style_preset: StylePreset::Inline,
            style_overrides: StyleMap::new(),
            allowed_origin: None,
            visible: true,
            sandbox: Some(DEFAULT_SANDBOX.to_string()),
            iframe_attrs: BTreeMap::new(),
            animate: AnimateOption::default(),
            trigger: Toggle::Off,
            draggable: Toggle::Off,
            resizable: Toggle::Off,
            placeholder: Toggle::Off,
            small_screen_breakpoint: DEFAULT_SMALL_SCREEN_BREAKPOINT,
            hash_timeout_ms: DEFAULT_HASH_TIMEOUT_MS,
        }
    }
}

/// Animation setting: `false`, `true`, a preset name, or `{ preset, transition }`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnimateOption {
    Flag(bool),
    Named(String),
    Custom {
        #[serde(default)]
        preset: Option<String>,
        #[serde(default)]
        transition: Option<String>,
    },
}

impl Default for AnimateOption {
    fn default() -> Self {
        AnimateOption::Flag(false)
    }
}

/// Launcher button options
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerOptions {
    /// Button markup; a chat icon when unset
    pub content: Option<String>,
    pub style: StyleMap,
}

/// Placeholder options
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceholderOptions {
    /// Markup shown inside the placeholder
    pub content: Option<String>,
    pub style: StyleMap,
}

/// Drag handle options
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraggableOptions {
    /// Side of the square grip
    pub handle_size: f64,
    pub handle_style: StyleMap,
    /// Minimum gap kept from every viewport edge
    pub boundary_padding: f64,
    /// Edge snapping, enabled unless set to `false`
    pub edge_snap: Toggle<EdgeSnapOptions>,
}

impl Default for DraggableOptions {
    fn default() -> Self {
        Self {
            handle_size: 24.0,
            handle_style: StyleMap::new(),
            boundary_padding: 20.0,
            edge_snap: Toggle::Defaults,
        }
    }
}

/// Edge snapping options
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeSnapOptions {
    /// Time a classification must stay stable before the preview shows
    pub dwell_ms: f64,
    /// Declarations applied to the preview box
    pub ghost_style: StyleMap,
}

impl Default for EdgeSnapOptions {
    fn default() -> Self {
        Self {
            dwell_ms: 500.0,
            ghost_style: StyleMap::new(),
        }
    }
}

/// Resize handle options
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizableOptions {
    /// Side of the square grip
    pub handle_size: f64,
    pub handle_style: StyleMap,
    /// Minimum gap kept from the right and bottom viewport edges
    pub boundary_padding: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Defaults to the viewport width minus the padding
    pub max_width: Option<f64>,
    /// Defaults to the viewport height minus the padding
    pub max_height: Option<f64>,
}

impl Default for ResizableOptions {
    fn default() -> Self {
        Self {
            handle_size: 20.0,
            handle_style: StyleMap::new(),
            boundary_padding: 20.0,
            min_width: 200.0,
            min_height: 150.0,
            max_width: None,
            max_height: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_minimal_options() {
        let options: WidgetOptions =
            serde_json::from_value(json!({"widgetUrl": "https://w.example/app"})).unwrap();
        assert_eq!(options, WidgetOptions::new("https://w.example/app"));
        assert!(options.visible);
        assert_eq!(options.sandbox.as_deref(), Some(DEFAULT_SANDBOX));
        assert_eq!(options.small_screen_breakpoint, 640.0);
    }

    #[test]
    fn test_null_sandbox_disables_attribute() {
        let options: WidgetOptions =
            serde_json::from_value(json!({"widgetUrl": "u", "sandbox": null})).unwrap();
        assert_eq!(options.sandbox, None);
    }

    #[test]
    fn test_draggable_variants() {
        let options: WidgetOptions = serde_json::from_value(json!({
            "widgetUrl": "u",
            "stylePreset": "float",
            "draggable": {"boundaryPadding": 8, "edgeSnap": {"dwellMs": 100}},
            "resizable": true,
        }))
        .unwrap();
        let Toggle::Custom(drag) = options.draggable else {
            panic!("expected custom draggable");
        };
        assert_eq!(drag.boundary_padding, 8.0);
        assert_eq!(drag.handle_size, 24.0);
        assert_eq!(
            drag.edge_snap,
            Toggle::Custom(EdgeSnapOptions {
                dwell_ms: 100.0,
                ghost_style: StyleMap::new(),
            })
        );
        assert_eq!(options.resizable, Toggle::Defaults);
    }

    #[test]
    fn test_edge_snap_can_be_disabled() {
        let drag: DraggableOptions = serde_json::from_value(json!({"edgeSnap": false})).unwrap();
        assert_eq!(drag.edge_snap, Toggle::Off);
        let drag: DraggableOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(drag.edge_snap, Toggle::Defaults);
    }

    #[test]
    fn test_animate_variants() {
        let parse = |v| serde_json::from_value::<AnimateOption>(v).unwrap();
        assert_eq!(parse(json!(true)), AnimateOption::Flag(true));
        assert_eq!(parse(json!("slide-up")), AnimateOption::Named("slide-up".into()));
        assert_eq!(
            parse(json!({"transition": "opacity 1s"})),
            AnimateOption::Custom {
                preset: None,
                transition: Some("opacity 1s".into()),
            }
        );
    }

    #[test]
    fn test_allowed_origin_list() {
        let options: WidgetOptions = serde_json::from_value(json!({
            "widgetUrl": "u",
            "allowedOrigin": ["https://a", "https://b"],
        }))
        .unwrap();
        assert_eq!(
            options.allowed_origin,
            Some(AllowedOrigin::Many(vec!["https://a".into(), "https://b".into()]))
        );
    }
}
