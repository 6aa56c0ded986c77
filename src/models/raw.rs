//! JSON item documents
//!
//! Raw shapes as they appear in a JSON document, and their lowering into
//! [`Item`]s. JSON can only describe data, so records built this way never
//! carry producers, callbacks or host nodes.
//!
//! JSON shape:
//! ```json
//! [
//!   "h1#title Welcome",
//!   null,
//!   {
//!     "tag": ["nav.menu", "ul"],
//!     "className": ["list", null, "compact"],
//!     "attrs": { "role": "menu" },
//!     "children": ["li Home", "li About"]
//!   }
//! ]
//! ```

use super::attrs::Attrs;
use super::spec::{ClassName, Content, Children, Item, SpecRecord, Tag};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid item document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw item: string, record, or null (dropped).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawItem {
    Null,
    Text(String),
    Record(Box<RawRecord>),
}

/// Raw record shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub tag: Option<RawTag>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub class_name: Option<RawClassName>,

    #[serde(default)]
    pub class: Option<RawClassName>,

    #[serde(default)]
    pub attrs: Option<Attrs>,

    #[serde(default)]
    pub content: Option<RawContent>,

    #[serde(default = "default_condition")]
    pub condition: bool,

    /// Kept loose so a non-list value can be reported at build time
    #[serde(default)]
    pub children: Option<Value>,
}

fn default_condition() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTag {
    Name(String),
    Chain(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawClassName {
    One(String),
    Many(Vec<Option<String>>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Number(f64),
}

/// Parse a JSON array of items.
pub fn items_from_json<N>(json: &str) -> Result<Vec<Item<N>>, SpecError> {
    let value: Value = serde_json::from_str(json)?;
    items_from_value(value)
}

/// Lower an already-parsed JSON array of items.
pub fn items_from_value<N>(value: Value) -> Result<Vec<Item<N>>, SpecError> {
    let raw: Vec<RawItem> = serde_json::from_value(value)?;
    raw.into_iter()
        .filter_map(|item| item.into_item().transpose())
        .collect()
}

impl RawItem {
    /// `Ok(None)` for null items.
    pub fn into_item<N>(self) -> Result<Option<Item<N>>, SpecError> {
        match self {
            RawItem::Null => Ok(None),
            RawItem::Text(s) => Ok(Some(Item::Text(s))),
            RawItem::Record(record) => Ok(Some(Item::from(record.into_record()?))),
        }
    }
}

impl RawRecord {
    pub fn into_record<N>(self) -> Result<SpecRecord<N>, SpecError> {
        let children = match self.children {
            None | Some(Value::Null) => None,
            Some(Value::Array(list)) => Some(Children::Items(items_from_value(Value::Array(list))?)),
            Some(other) => Some(Children::Invalid(describe(&other).to_string())),
        };

        Ok(SpecRecord {
            tag: self.tag.map(|t| match t {
                RawTag::Name(name) => Tag::Name(name),
                RawTag::Chain(chain) => Tag::Chain(chain),
            }),
            id: self.id,
            class_name: self.class_name.map(RawClassName::into_class_name),
            class: self.class.map(RawClassName::into_class_name),
            attrs: self.attrs,
            content: self.content.map(|c| match c {
                RawContent::Text(s) => Content::text(s),
                RawContent::Number(n) => Content::number(n),
            }),
            condition: self.condition,
            callback: None,
            children,
        })
    }
}

impl RawClassName {
    fn into_class_name(self) -> ClassName {
        match self {
            RawClassName::One(s) => ClassName::One(s),
            RawClassName::Many(v) => ClassName::Many(v),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
