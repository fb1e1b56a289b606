//! Berth widget core
//!
//! Embeds an application inside a host page through a sandboxed iframe and
//! manages its presentation and control channel. Everything here runs against
//! the [`Dom`](berth_dom::Dom) trait, so it is fully testable without a browser.
//!
//! # Architecture
//!
//! - [`geometry`]: pure edge classification for snap gestures
//! - [`interaction`]: drag and resize controllers with edge/reset snapping
//! - [`layout`]: per-axis override algebra layered on the style presets
//! - [`widget`]: the lifecycle controller and public control surface
//! - [`protocol`]: namespaced message envelope, verbs and origin checks
//! - [`state`]: the reactive widget state snapshot and its store
//! - [`bus`], [`task`]: pub/sub and deferred execution primitives
//! - [`config`], [`style`]: options and CSS rule tables

pub mod bus;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod protocol;
pub mod state;
pub mod style;
pub mod task;
pub mod widget;

pub use bus::{Bus, HandlerError, HandlerResult, Unsubscribe};
pub use config::{Toggle, WidgetOptions};
pub use error::WidgetError;
pub use geometry::{resolve_edge, SnapEdge};
pub use interaction::InputResult;
pub use layout::{Axis, AxisState};
pub use protocol::{InboundMessage, Verb, MSG_PREFIX};
pub use state::{Store, WidgetState};
pub use style::StylePreset;
pub use task::TaskQueue;
pub use widget::Widget;

// Re-export the platform crate for embedders
pub use berth_dom as dom;
