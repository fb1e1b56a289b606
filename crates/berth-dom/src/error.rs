//! DOM error types

use thiserror::Error;

/// Errors from structural DOM operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomError {
    /// No document or body is available
    #[error("document is not available")]
    NoDocument,
    /// Element creation was rejected
    #[error("cannot create <{0}> element")]
    CreateElement(String),
    /// A tree mutation was rejected
    #[error("tree mutation failed: {0}")]
    Tree(String),
    /// An attribute could not be set
    #[error("cannot set attribute `{name}`: {reason}")]
    Attribute { name: String, reason: String },
    /// Posting into a frame failed
    #[error("postMessage failed: {0}")]
    PostMessage(String),
}
