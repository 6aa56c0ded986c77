//! Host document capability
//!
//! The builder never touches a concrete document. Everything it needs from
//! the environment goes through [`HostDocument`]:
//!
//! - [`MemoryDocument`]: arena-backed document for native use and tests
//! - [`WebDocument`]: the browser DOM through `web-sys`

pub mod memory;
pub mod web;

pub use memory::{MemoryDocument, NodeId};
pub use web::WebDocument;

use thiserror::Error;

/// Failures reported by a host document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// Tag or attribute name the host refuses
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Appending a node into itself or one of its descendants
    #[error("hierarchy request error: {0}")]
    HierarchyRequest(String),

    /// Element-only operation attempted on another kind of node
    #[error("node is not an element")]
    NotAnElement,

    #[error("no document available")]
    NoDocument,

    /// Handle that does not belong to this document
    #[error("unknown node")]
    UnknownNode,

    /// No handle left for another node
    #[error("document is full")]
    CapacityExceeded,

    /// Exception raised by the script host
    #[error("javascript error: {0}")]
    Js(String),
}

/// Node-manipulation primitives supplied by the environment.
pub trait HostDocument {
    /// Handle to a node owned by the document
    type Node: Clone;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, HostError>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError>;

    fn class_name(&self, node: &Self::Node) -> String;

    fn set_class_name(&mut self, node: &Self::Node, class_name: &str) -> Result<(), HostError>;

    fn id(&self, node: &Self::Node) -> String;

    fn set_id(&mut self, node: &Self::Node, id: &str) -> Result<(), HostError>;

    fn inner_html(&self, node: &Self::Node) -> String;

    /// Set raw markup content. Callers are trusted; nothing is escaped.
    fn set_inner_html(&mut self, node: &Self::Node, markup: &str) -> Result<(), HostError>;

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Remove all existing content of `node`.
    fn clear_content(&mut self, node: &Self::Node) -> Result<(), HostError>;
}

/// Names the host accepts for tags and attributes.
///
/// Mirrors the characters a browser rejects in `createElement` and
/// `setAttribute`.
pub fn validate_name(name: &str) -> Result<(), HostError> {
    let bad = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '='));
    if bad {
        return Err(HostError::InvalidName(name.to_string()));
    }
    Ok(())
}
