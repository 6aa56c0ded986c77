//! Browser DOM host backed by `web-sys`

use super::{HostDocument, HostError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};

/// [`HostDocument`] over a browser `Document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current `window`.
    pub fn current() -> Result<Self, HostError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(HostError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn as_element(node: &Node) -> Result<&Element, HostError> {
    node.dyn_ref::<Element>().ok_or(HostError::NotAnElement)
}

/// Convert a thrown JS value into a [`HostError`].
pub(crate) fn js_error(value: JsValue) -> HostError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    HostError::Js(message)
}

impl HostDocument for WebDocument {
    type Node = Node;

    fn create_element(&mut self, tag: &str) -> Result<Node, HostError> {
        let element = self.document.create_element(tag).map_err(js_error)?;
        Ok(element.into())
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<(), HostError> {
        as_element(node)?.set_attribute(name, value).map_err(js_error)
    }

    fn class_name(&self, node: &Node) -> String {
        node.dyn_ref::<Element>().map(|e| e.class_name()).unwrap_or_default()
    }

    fn set_class_name(&mut self, node: &Node, class_name: &str) -> Result<(), HostError> {
        as_element(node)?.set_class_name(class_name);
        Ok(())
    }

    fn id(&self, node: &Node) -> String {
        node.dyn_ref::<Element>().map(|e| e.id()).unwrap_or_default()
    }

    fn set_id(&mut self, node: &Node, id: &str) -> Result<(), HostError> {
        as_element(node)?.set_id(id);
        Ok(())
    }

    fn inner_html(&self, node: &Node) -> String {
        node.dyn_ref::<Element>().map(|e| e.inner_html()).unwrap_or_default()
    }

    fn set_inner_html(&mut self, node: &Node, markup: &str) -> Result<(), HostError> {
        as_element(node)?.set_inner_html(markup);
        Ok(())
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<(), HostError> {
        parent.append_child(child).map(|_| ()).map_err(js_error)
    }

    fn clear_content(&mut self, node: &Node) -> Result<(), HostError> {
        // Works for elements, fragments and text nodes alike
        node.set_text_content(None);
        Ok(())
    }
}
