//! Widget error types

use berth_dom::DomError;
use thiserror::Error;

/// Errors raised while constructing or driving a widget
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Configuration did not name the embedded URL
    #[error("widgetUrl is required")]
    MissingWidgetUrl,
    /// A preset name was not one of inline, float or fullscreen
    #[error("unknown style preset `{0}`")]
    UnknownPreset(String),
    /// Options could not be decoded
    #[error("invalid widget options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    /// The operation needs a mounted reparent target
    #[error("widget has no reparent target")]
    NoReparentTarget,
    /// Docking found no placeholder to return to
    #[error("widget has no placeholder to dock into")]
    NoPlaceholder,
    /// A document operation failed
    #[error(transparent)]
    Dom(#[from] DomError),
}
