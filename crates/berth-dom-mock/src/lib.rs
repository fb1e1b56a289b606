//! In-memory DOM for testing Berth
//!
//! This provides an implementation of the `Dom` trait that keeps a node tree,
//! inline styles and attributes in memory, resolves enough CSS layout to make
//! geometry assertions meaningful, and exposes a manual clock. The widget core
//! can be exercised end to end without a browser.

mod layout;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use berth_dom::{Dom, DomError, Rect, Size};
use serde_json::Value;

/// Handle to a node in a `MemoryDom`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Identity of a mock iframe's content window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockWindow(NodeId);

/// A message posted into a frame
#[derive(Clone, Debug, PartialEq)]
pub struct PostedMessage {
    /// Iframe the message was posted to
    pub frame: NodeId,
    /// Structured message body
    pub message: Value,
    /// Target origin passed to postMessage
    pub target_origin: String,
}

impl PostedMessage {
    /// The `type` field of the message, if any
    pub fn kind(&self) -> Option<&str> {
        self.message.get("type").and_then(Value::as_str)
    }

    /// The `payload` field of the message, if any
    pub fn payload(&self) -> Option<&Value> {
        self.message.get("payload")
    }
}

/// Simulated element
#[derive(Clone, Debug, Default)]
struct MockNode {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    /// Fallback box used when styles do not determine geometry
    layout: Option<Rect>,
    /// Readable location hash for same-origin frames
    frame_hash: Option<String>,
    /// Every URL the frame was navigated to
    navigations: Vec<String>,
}

/// Document state shared by every clone of a `MemoryDom`
struct Document {
    nodes: Vec<MockNode>,
    body: NodeId,
    viewport: Size,
    now: f64,
    fullscreen: Option<NodeId>,
    fullscreen_requests: Vec<NodeId>,
    posted: Vec<PostedMessage>,
    captures: BTreeMap<i32, NodeId>,
    reflows: usize,
}

impl Document {
    fn node(&self, id: NodeId) -> &MockNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut MockNode {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.node(node).parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn is_attached(&self, id: NodeId) -> bool {
        self.is_ancestor(self.body, id)
    }
}

/// In-memory DOM for unit testing
///
/// Cloning yields another handle to the same document, so a test can keep a
/// handle for assertions while the widget owns its own.
#[derive(Clone)]
pub struct MemoryDom {
    doc: Rc<RefCell<Document>>,
}

impl MemoryDom {
    /// Create a document with the given viewport size
    pub fn new(width: f64, height: f64) -> Self {
        let body = MockNode {
            tag: "body".to_string(),
            ..MockNode::default()
        };
        Self {
            doc: Rc::new(RefCell::new(Document {
                nodes: vec![body],
                body: NodeId(0),
                viewport: Size::new(width, height),
                now: 0.0,
                fullscreen: None,
                fullscreen_requests: Vec::new(),
                posted: Vec::new(),
                captures: BTreeMap::new(),
                reflows: 0,
            })),
        }
    }

    // === Clock ===

    /// Advance the simulated clock
    pub fn advance(&self, ms: f64) {
        self.doc.borrow_mut().now += ms;
    }

    /// Set the simulated clock
    pub fn set_now(&self, ms: f64) {
        self.doc.borrow_mut().now = ms;
    }

    // === Viewport ===

    /// Resize the simulated viewport
    pub fn set_viewport(&self, width: f64, height: f64) {
        self.doc.borrow_mut().viewport = Size::new(width, height);
    }

    /// Give a node a fallback layout box
    ///
    /// Styles that set position or size still win over the fallback.
    pub fn set_layout(&self, node: NodeId, rect: Rect) {
        self.doc.borrow_mut().node_mut(node).layout = Some(rect);
    }

    /// Create an element, attach it to the body, and give it a layout box
    pub fn mount_host(&self, rect: Rect) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        let body = doc.body;
        doc.nodes.push(MockNode {
            tag: "div".to_string(),
            parent: Some(body),
            layout: Some(rect),
            ..MockNode::default()
        });
        doc.node_mut(body).children.push(id);
        id
    }

    // === Frames ===

    /// Make a frame same-origin with the given readable hash
    pub fn set_frame_hash(&self, iframe: NodeId, hash: &str) {
        self.doc.borrow_mut().node_mut(iframe).frame_hash = Some(hash.to_string());
    }

    /// Every URL a frame was navigated to, oldest first
    pub fn frame_navigations(&self, iframe: NodeId) -> Vec<String> {
        self.doc.borrow().node(iframe).navigations.clone()
    }

    /// Current source of a frame
    pub fn frame_src(&self, iframe: NodeId) -> Option<String> {
        self.attribute(iframe, "src")
    }

    /// All messages posted so far
    pub fn posted(&self) -> Vec<PostedMessage> {
        self.doc.borrow().posted.clone()
    }

    /// Drain the posted message log
    pub fn take_posted(&self) -> Vec<PostedMessage> {
        std::mem::take(&mut self.doc.borrow_mut().posted)
    }

    /// Types of all posted messages, in order
    pub fn posted_kinds(&self) -> Vec<String> {
        self.doc
            .borrow()
            .posted
            .iter()
            .filter_map(|m| m.kind().map(str::to_string))
            .collect()
    }

    // === Inspection ===

    /// Tag name of a node
    pub fn tag(&self, node: NodeId) -> String {
        self.doc.borrow().node(node).tag.clone()
    }

    /// Children of a node in document order
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc.borrow().node(node).children.clone()
    }

    /// Whether the node is reachable from the body
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.doc.borrow().is_attached(node)
    }

    /// Attribute value of a node
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.doc.borrow().node(node).attributes.get(name).cloned()
    }

    /// Markup last written with `set_inner_html`
    pub fn inner_html(&self, node: NodeId) -> String {
        self.doc.borrow().node(node).inner_html.clone()
    }

    /// All inline styles of a node
    pub fn styles(&self, node: NodeId) -> BTreeMap<String, String> {
        self.doc.borrow().node(node).style.clone()
    }

    /// Pointer currently captured by a node, if any
    pub fn capture_target(&self, pointer_id: i32) -> Option<NodeId> {
        self.doc.borrow().captures.get(&pointer_id).copied()
    }

    /// Nodes passed to `request_fullscreen`, oldest first
    pub fn fullscreen_requests(&self) -> Vec<NodeId> {
        self.doc.borrow().fullscreen_requests.clone()
    }

    /// Simulate the user leaving fullscreen with the platform control
    pub fn leave_fullscreen(&self) {
        self.doc.borrow_mut().fullscreen = None;
    }

    /// Number of forced reflows
    pub fn reflow_count(&self) -> usize {
        self.doc.borrow().reflows
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;
    type FrameWindow = MockWindow;

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if tag.is_empty() {
            return Err(DomError::CreateElement(tag.to_string()));
        }
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        doc.nodes.push(MockNode {
            tag: tag.to_ascii_lowercase(),
            ..MockNode::default()
        });
        Ok(id)
    }

    fn body(&self) -> Result<NodeId, DomError> {
        Ok(self.doc.borrow().body)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let mut doc = self.doc.borrow_mut();
        if doc.is_ancestor(*child, *parent) {
            return Err(DomError::Tree("cannot append an ancestor".to_string()));
        }
        doc.detach(*child);
        doc.node_mut(*child).parent = Some(*parent);
        doc.node_mut(*parent).children.push(*child);
        Ok(())
    }

    fn insert_before(&self, parent: &NodeId, node: &NodeId, reference: &NodeId) -> Result<(), DomError> {
        let mut doc = self.doc.borrow_mut();
        if doc.node(*reference).parent != Some(*parent) {
            return Err(DomError::Tree("reference is not a child of parent".to_string()));
        }
        if doc.is_ancestor(*node, *parent) {
            return Err(DomError::Tree("cannot insert an ancestor".to_string()));
        }
        doc.detach(*node);
        let index = doc
            .node(*parent)
            .children
            .iter()
            .position(|c| c == reference)
            .unwrap_or(0);
        doc.node_mut(*parent).children.insert(index, *node);
        doc.node_mut(*node).parent = Some(*parent);
        Ok(())
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.doc.borrow().node(*node).parent
    }

    fn remove(&self, node: &NodeId) {
        self.doc.borrow_mut().detach(*node);
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DomError::Attribute {
                name: name.to_string(),
                reason: "invalid attribute name".to_string(),
            });
        }
        self.doc
            .borrow_mut()
            .node_mut(*node)
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.doc.borrow_mut().node_mut(*node).inner_html = html.to_string();
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.doc
            .borrow()
            .node(*node)
            .style
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut doc = self.doc.borrow_mut();
        let style = &mut doc.node_mut(*node).style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
    }

    fn clear_style(&self, node: &NodeId) {
        self.doc.borrow_mut().node_mut(*node).style.clear();
    }

    fn force_reflow(&self, _node: &NodeId) {
        self.doc.borrow_mut().reflows += 1;
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let doc = self.doc.borrow();
        if !doc.is_attached(*node) {
            return Rect::ZERO;
        }
        layout::resolve(&doc, *node)
    }

    fn viewport(&self) -> Size {
        self.doc.borrow().viewport
    }

    fn frame_window(&self, iframe: &NodeId) -> Option<MockWindow> {
        let doc = self.doc.borrow();
        (doc.node(*iframe).tag == "iframe").then_some(MockWindow(*iframe))
    }

    fn frame_location_hash(&self, iframe: &NodeId) -> Option<String> {
        self.doc.borrow().node(*iframe).frame_hash.clone()
    }

    fn set_frame_src(&self, iframe: &NodeId, url: &str) {
        let mut doc = self.doc.borrow_mut();
        let node = doc.node_mut(*iframe);
        node.attributes.insert("src".to_string(), url.to_string());
        node.navigations.push(url.to_string());
    }

    fn post_to_frame(&self, iframe: &NodeId, message: &Value, target_origin: &str) -> Result<(), DomError> {
        let mut doc = self.doc.borrow_mut();
        if doc.node(*iframe).tag != "iframe" {
            return Err(DomError::PostMessage("target is not a frame".to_string()));
        }
        doc.posted.push(PostedMessage {
            frame: *iframe,
            message: message.clone(),
            target_origin: target_origin.to_string(),
        });
        Ok(())
    }

    fn set_pointer_capture(&self, node: &NodeId, pointer_id: i32) {
        self.doc.borrow_mut().captures.insert(pointer_id, *node);
    }

    fn release_pointer_capture(&self, node: &NodeId, pointer_id: i32) {
        let mut doc = self.doc.borrow_mut();
        if doc.captures.get(&pointer_id) == Some(node) {
            doc.captures.remove(&pointer_id);
        }
    }

    fn request_fullscreen(&self, node: &NodeId) {
        let mut doc = self.doc.borrow_mut();
        doc.fullscreen = Some(*node);
        doc.fullscreen_requests.push(*node);
    }

    fn exit_fullscreen(&self) {
        self.doc.borrow_mut().fullscreen = None;
    }

    fn fullscreen_active(&self) -> bool {
        self.doc.borrow().fullscreen.is_some()
    }

    fn now_ms(&self) -> f64 {
        self.doc.borrow().now
    }
}
