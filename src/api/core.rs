//! Core WASM API
//!
//! JavaScript entry points for parsing the compact element syntax, building
//! trees into the browser document and decorating existing nodes.

use crate::api::helpers::{deserialize_or_default, host_error, serialize};
use crate::api::lower::{items_from_js, record_from_js};
use crate::builder::{self, BuildOptions, TreeBuilder};
use crate::host::WebDocument;
use crate::parse;
use crate::wasm_log;
use wasm_bindgen::prelude::*;
use web_sys::Node;

/// Parse a compact element string
///
/// # Arguments
/// * `dom_string` - e.g. `"p#main.info(role:button) text"`
///
/// # Returns
/// `{ tag, id, className, attrs, content }` with `null` for absent fields
#[wasm_bindgen(js_name = parse)]
pub fn parse_element(dom_string: &str) -> Result<JsValue, JsValue> {
    serialize(&parse::parse(dom_string), "Serialization error")
}

/// Build items into the current document
///
/// # Arguments
/// * `items` - Array of strings and item objects
/// * `parent` - Node the top-level items are appended to (optional)
/// * `options` - `{ emptyParent }` (optional)
///
/// # Returns
/// The first element created, or `null` when nothing was built
#[wasm_bindgen(js_name = build)]
pub fn build_tree(
    items: JsValue,
    parent: Option<Node>,
    options: JsValue,
) -> Result<Option<Node>, JsValue> {
    let options: BuildOptions = deserialize_or_default(options, "Invalid build options")?;
    let items = items_from_js(&items)?;
    wasm_log!("build called: {} items, options={:?}", items.len(), options);

    let mut document = WebDocument::current().map_err(|e| host_error("build", e))?;
    TreeBuilder::new(&mut document)
        .build(items, parent.as_ref(), options)
        .map_err(|e| host_error("build", e))
}

/// Apply attrs, class and id from an item object to an existing node
///
/// # Returns
/// The same node
#[wasm_bindgen(js_name = decorate)]
pub fn decorate_node(node: Node, spec: JsValue) -> Result<Node, JsValue> {
    let record = record_from_js(&spec)?;
    let mut document = WebDocument::current().map_err(|e| host_error("decorate", e))?;
    builder::decorate(&mut document, &node, &record).map_err(|e| host_error("decorate", e))?;
    Ok(node)
}
