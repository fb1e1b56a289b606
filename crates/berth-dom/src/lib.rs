//! DOM abstraction trait for Berth
//!
//! This crate defines the `Dom` trait that lets the widget core run both
//! in a browser and in plain unit tests by abstracting every document
//! operation it performs.
//!
//! # Implementations
//!
//! - **Browser**: `berth-web` wraps `web_sys` elements
//! - **Tests**: `berth-dom-mock` keeps an in-memory node tree with a manual clock

mod error;
mod geometry;
mod pointer;

pub use error::DomError;
pub use geometry::{Rect, Size};
pub use pointer::PointerInput;

use serde_json::Value;

/// Document abstraction used by the widget core
///
/// Structural operations can fail and return `DomError`. Style writes are
/// infallible: a rejected declaration is simply not applied, the same way
/// a browser ignores an invalid CSS value.
///
/// # Associated Types
///
/// - `Node`: handle to an element (an `HtmlElement` in the browser)
/// - `FrameWindow`: identity of an iframe's content window, compared
///   against the source of inbound messages
pub trait Dom {
    /// Handle to an element
    type Node: Clone + PartialEq + std::fmt::Debug;
    /// Identity of an iframe's browsing context
    type FrameWindow: Clone + PartialEq;

    // === Tree ===

    /// Create a detached element with the given tag
    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

    /// The document body
    fn body(&self) -> Result<Self::Node, DomError>;

    /// Append `child` as the last child of `parent`, moving it if already attached
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Insert `node` into `parent` immediately before `reference`
    fn insert_before(
        &self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: &Self::Node,
    ) -> Result<(), DomError>;

    /// Parent element, if attached
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Detach a node from its parent. No-op when already detached.
    fn remove(&self, node: &Self::Node);

    // === Content ===

    /// Set an attribute
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Replace the node's children with parsed markup
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    // === Style ===

    /// Read an inline style property (empty when unset)
    fn style(&self, node: &Self::Node, property: &str) -> String;

    /// Write an inline style property. An empty value removes it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Remove every inline style declaration
    fn clear_style(&self, node: &Self::Node);

    /// Write a style property on the next animation frame
    ///
    /// Used to fade in freshly inserted elements. Implementations without
    /// frames apply the value immediately.
    fn set_style_next_frame(&self, node: &Self::Node, property: &str, value: &str) {
        self.set_style(node, property, value);
    }

    /// Flush pending style changes so the next write starts a transition
    fn force_reflow(&self, _node: &Self::Node) {}

    // === Geometry ===

    /// Border box of the node in viewport coordinates
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Inner size of the viewport
    fn viewport(&self) -> Size;

    // === Frames ===

    /// Content window of an iframe
    fn frame_window(&self, iframe: &Self::Node) -> Option<Self::FrameWindow>;

    /// Location hash of an iframe's document
    ///
    /// Returns `None` when the document is cross-origin and cannot be read.
    fn frame_location_hash(&self, iframe: &Self::Node) -> Option<String>;

    /// Navigate an iframe
    fn set_frame_src(&self, iframe: &Self::Node, url: &str);

    /// Post a structured message into an iframe
    fn post_to_frame(
        &self,
        iframe: &Self::Node,
        message: &Value,
        target_origin: &str,
    ) -> Result<(), DomError>;

    // === Pointer ===

    /// Route all events of a pointer to `node`
    fn set_pointer_capture(&self, node: &Self::Node, pointer_id: i32);

    /// Release a pointer capture
    fn release_pointer_capture(&self, node: &Self::Node, pointer_id: i32);

    // === Fullscreen ===

    /// Ask the platform to show `node` fullscreen
    fn request_fullscreen(&self, node: &Self::Node);

    /// Leave platform fullscreen
    fn exit_fullscreen(&self);

    /// Whether any element is currently fullscreen
    fn fullscreen_active(&self) -> bool;

    // === Time ===

    /// Monotonic time in milliseconds
    fn now_ms(&self) -> f64;
}
