//! Widget configuration
//!
//! [`WidgetOptions`] is what callers supply. It is resolved once, at
//! construction, into [`ResolvedOptions`]: toggles become concrete option
//! records, the animation becomes a rule set, and the origin allow-list is
//! computed.

mod options;
mod toggle;

pub use options::{
    AnimateOption, DraggableOptions, EdgeSnapOptions, PlaceholderOptions, ResizableOptions,
    TriggerOptions, WidgetOptions, DEFAULT_HASH_TIMEOUT_MS, DEFAULT_SANDBOX,
    DEFAULT_SMALL_SCREEN_BREAKPOINT,
};
pub use toggle::Toggle;

use std::collections::BTreeMap;

use crate::error::WidgetError;
use crate::protocol::resolve_allowed_origins;
use crate::style::{AnimateConfig, AnimatePreset, StyleMap, StylePreset};

/// Options after defaults and toggles have been applied
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub widget_url: String,
    pub initial_preset: StylePreset,
    pub style_overrides: StyleMap,
    pub origins: Vec<String>,
    pub visible: bool,
    pub sandbox: Option<String>,
    pub iframe_attrs: BTreeMap<String, String>,
    pub animate: Option<AnimateConfig>,
    pub trigger: Option<TriggerOptions>,
    pub draggable: Option<DraggableOptions>,
    pub resizable: Option<ResizableOptions>,
    pub placeholder: PlaceholderOptions,
    pub small_screen_breakpoint: f64,
    pub hash_timeout_ms: f64,
}

impl ResolvedOptions {
    /// Validate and resolve caller options
    pub fn resolve(options: WidgetOptions) -> Result<Self, WidgetError> {
        if options.widget_url.trim().is_empty() {
            return Err(WidgetError::MissingWidgetUrl);
        }
        let origins = resolve_allowed_origins(options.allowed_origin.as_ref(), &options.widget_url);
        Ok(Self {
            origins,
            animate: resolve_animate(&options.animate),
            initial_preset: options.style_preset,
            style_overrides: options.style_overrides,
            visible: options.visible,
            sandbox: options.sandbox.filter(|s| !s.is_empty()),
            iframe_attrs: options.iframe_attrs,
            trigger: options.trigger.resolve(),
            draggable: options.draggable.resolve(),
            resizable: options.resizable.resolve(),
            placeholder: options.placeholder.resolve().unwrap_or_default(),
            small_screen_breakpoint: options.small_screen_breakpoint.max(0.0),
            hash_timeout_ms: options.hash_timeout_ms.max(0.0),
            widget_url: options.widget_url,
        })
    }

    /// Whether a viewport of the given width counts as a small screen
    #[inline]
    pub fn is_small_screen(&self, viewport_width: f64) -> bool {
        self.small_screen_breakpoint > 0.0 && viewport_width < self.small_screen_breakpoint
    }

    /// Whether any pointer interaction is configured
    #[inline]
    pub fn has_interactions(&self) -> bool {
        self.draggable.is_some() || self.resizable.is_some()
    }
}

/// Resolve the animation setting; unknown preset names disable animation
pub fn resolve_animate(option: &AnimateOption) -> Option<AnimateConfig> {
    match option {
        AnimateOption::Flag(false) => None,
        AnimateOption::Flag(true) => Some(AnimatePreset::FadeScale.config()),
        AnimateOption::Named(name) => AnimatePreset::from_name(name).map(AnimatePreset::config),
        AnimateOption::Custom { preset, transition } => {
            let preset = match preset {
                Some(name) => AnimatePreset::from_name(name)?,
                None => AnimatePreset::FadeScale,
            };
            let mut config = preset.config();
            if let Some(transition) = transition.as_ref().filter(|t| !t.is_empty()) {
                config.transition = transition.clone();
            }
            Some(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_rejected() {
        assert!(matches!(
            ResolvedOptions::resolve(WidgetOptions::default()),
            Err(WidgetError::MissingWidgetUrl)
        ));
    }

    #[test]
    fn test_toggles_resolve_to_concrete_records() {
        let resolved = ResolvedOptions::resolve(WidgetOptions {
            draggable: Toggle::Defaults,
            ..WidgetOptions::new("https://example.com/app")
        })
        .unwrap();
        assert_eq!(resolved.draggable, Some(DraggableOptions::default()));
        assert_eq!(resolved.resizable, None);
        assert_eq!(resolved.origins, vec!["https://example.com".to_string()]);
        assert!(resolved.has_interactions());
    }

    #[test]
    fn test_small_screen_breakpoint() {
        let resolved = ResolvedOptions::resolve(WidgetOptions::new("u")).unwrap();
        assert!(resolved.is_small_screen(500.0));
        assert!(!resolved.is_small_screen(640.0));

        let disabled = ResolvedOptions::resolve(WidgetOptions {
            small_screen_breakpoint: 0.0,
            ..WidgetOptions::new("u")
        })
        .unwrap();
        assert!(!disabled.is_small_screen(10.0));
    }

    #[test]
    fn test_resolve_animate() {
        assert_eq!(resolve_animate(&AnimateOption::Flag(false)), None);
        assert_eq!(
            resolve_animate(&AnimateOption::Flag(true)),
            Some(AnimatePreset::FadeScale.config())
        );
        assert_eq!(
            resolve_animate(&AnimateOption::Named("slide-up".into())),
            Some(AnimatePreset::SlideUp.config())
        );
        assert_eq!(resolve_animate(&AnimateOption::Named("spin".into())), None);

        let custom = resolve_animate(&AnimateOption::Custom {
            preset: None,
            transition: Some("opacity 1s linear".into()),
        })
        .unwrap();
        assert_eq!(custom.transition, "opacity 1s linear");
        assert_eq!(custom.hidden, AnimatePreset::FadeScale.config().hidden);
    }
}
