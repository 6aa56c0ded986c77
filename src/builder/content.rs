//! Content resolution
//!
//! A record's content resolves to exactly one of: raw markup to set, a node
//! to append, or nothing.

use crate::models::{format_number, Content, ContentValue};

#[derive(Debug, PartialEq)]
pub enum ResolvedContent<N> {
    /// Set verbatim as the element's raw content
    Markup(String),
    /// Append as a child of the element
    Node(N),
    Empty,
}

/// Resolve content, invoking a producer at most once.
pub fn resolve_content<N>(content: Option<Content<N>>) -> ResolvedContent<N> {
    let value = match content {
        None => None,
        Some(Content::Value(value)) => Some(value),
        Some(Content::Producer(produce)) => produce(),
    };

    match value {
        None => ResolvedContent::Empty,
        Some(ContentValue::Node(node)) => ResolvedContent::Node(node),
        Some(ContentValue::Text(text)) => ResolvedContent::Markup(text),
        Some(ContentValue::Number(n)) => ResolvedContent::Markup(format_number(n)),
    }
}
