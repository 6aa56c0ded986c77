//! In-memory host document
//!
//! An arena of element nodes addressed by [`NodeId`]. It follows DOM
//! semantics where the builder can observe them: `className`/`id` reflect the
//! `class`/`id` attributes, setting raw content drops existing children, and
//! appending an attached node moves it.

use super::{validate_name, HostDocument, HostError};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    /// Raw content set through `set_inner_html`, emitted before children
    markup: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// Elements that serialize without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes ever created (attached or not).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.tag.as_str())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        self.get(node).map(|n| n.attributes.as_slice()).unwrap_or(&[])
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    /// Serialize `node` and its subtree.
    ///
    /// Attribute values are escaped; raw content is emitted verbatim.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0 as usize)
    }

    fn get_mut(&mut self, node: NodeId) -> Result<&mut NodeData, HostError> {
        self.nodes.get_mut(node.0 as usize).ok_or(HostError::UnknownNode)
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), HostError> {
        let data = self.get_mut(node)?;
        match data.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn detach_children(&mut self, node: NodeId) -> Result<(), HostError> {
        let children = std::mem::take(&mut self.get_mut(node)?.children);
        for child in children {
            self.get_mut(child)?.parent = None;
        }
        Ok(())
    }

    /// True when `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.get(node) else {
            return;
        };
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&data.tag.as_str()) {
            return;
        }
        out.push_str(&data.markup);
        for child in &data.children {
            self.write_node(*child, out);
        }
        out.push_str("</");
        out.push_str(&data.tag);
        out.push('>');
    }
}

/// Handle for the node stored at `index`.
fn next_id(index: usize) -> Result<NodeId, HostError> {
    u32::try_from(index)
        .map(NodeId)
        .map_err(|_| HostError::CapacityExceeded)
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

impl HostDocument for MemoryDocument {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, HostError> {
        validate_name(tag)?;
        let id = next_id(self.nodes.len())?;
        self.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            markup: String::new(),
            children: Vec::new(),
            parent: None,
        });
        Ok(id)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), HostError> {
        validate_name(name)?;
        self.set_attr(*node, &name.to_ascii_lowercase(), value)
    }

    fn class_name(&self, node: &NodeId) -> String {
        self.attribute(*node, "class").unwrap_or_default().to_string()
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) -> Result<(), HostError> {
        self.set_attr(*node, "class", class_name)
    }

    fn id(&self, node: &NodeId) -> String {
        self.attribute(*node, "id").unwrap_or_default().to_string()
    }

    fn set_id(&mut self, node: &NodeId, id: &str) -> Result<(), HostError> {
        self.set_attr(*node, "id", id)
    }

    fn inner_html(&self, node: &NodeId) -> String {
        let Some(data) = self.get(*node) else {
            return String::new();
        };
        let mut out = data.markup.clone();
        for child in &data.children {
            self.write_node(*child, &mut out);
        }
        out
    }

    fn set_inner_html(&mut self, node: &NodeId, markup: &str) -> Result<(), HostError> {
        self.detach_children(*node)?;
        self.get_mut(*node)?.markup = markup.to_string();
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        let (parent, child) = (*parent, *child);
        self.get_mut(parent)?;
        self.get_mut(child)?;

        if self.is_inclusive_ancestor(child, parent) {
            return Err(HostError::HierarchyRequest(format!(
                "node {} cannot be appended inside itself",
                child.0
            )));
        }

        if let Some(old_parent) = self.parent(child) {
            self.get_mut(old_parent)?.children.retain(|c| *c != child);
        }
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    fn clear_content(&mut self, node: &NodeId) -> Result<(), HostError> {
        self.set_inner_html(node, "")
    }
}
