//! Lowering duck-typed JavaScript items into builder items
//!
//! Items arrive as plain JS values: strings, or objects carrying any of
//! `tag`, `id`, `className`/`class`, `attrs`, `content`, `condition`,
//! `callback` and `children`. Fields are read by reflection; anything absent
//! or of an unexpected type falls back to its default.

use crate::models::{
    format_number, AttrMap, AttrValue, Attrs, Callback, Children, ClassName, Content, ContentValue,
    Item, SpecRecord, Tag,
};
use crate::{wasm_error, wasm_warn};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Node;

/// Lower a JS array of items.
///
/// # Returns
/// The items in order; `null`/`undefined` entries are dropped
pub fn items_from_js(value: &JsValue) -> Result<Vec<Item<Node>>, JsValue> {
    let list = value
        .dyn_ref::<Array>()
        .ok_or_else(|| JsValue::from_str("items must be an array"))?;

    let mut items = Vec::with_capacity(list.length() as usize);
    for entry in list.iter() {
        if entry.is_null() || entry.is_undefined() {
            continue;
        }
        if let Some(text) = entry.as_string() {
            items.push(Item::Text(text));
        } else if entry.is_object() {
            items.push(Item::from(record_from_js(&entry)?));
        } else {
            wasm_warn!("ignoring item of type {}", type_of(&entry));
        }
    }
    Ok(items)
}

/// Lower one JS object into a record.
pub fn record_from_js(value: &JsValue) -> Result<SpecRecord<Node>, JsValue> {
    let condition = field(value, "condition")?;
    let children = field(value, "children")?;

    Ok(SpecRecord {
        tag: tag_from_js(&field(value, "tag")?),
        id: text_of(&field(value, "id")?),
        class_name: class_from_js(&field(value, "className")?),
        class: class_from_js(&field(value, "class")?),
        attrs: attrs_from_js(&field(value, "attrs")?)?,
        content: content_from_js(field(value, "content")?),
        condition: condition.is_undefined() || condition.is_truthy(),
        callback: callback_from_js(field(value, "callback")?),
        children: if children.is_null() || children.is_undefined() {
            None
        } else if Array::is_array(&children) {
            Some(Children::Items(items_from_js(&children)?))
        } else {
            Some(Children::Invalid(type_of(&children)))
        },
    })
}

// ── internal ──────────────────────────────────────────────────────────────

fn field(value: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    Reflect::get(value, &JsValue::from_str(name))
}

fn type_of(value: &JsValue) -> String {
    if Array::is_array(value) {
        return "array".to_string();
    }
    value.js_typeof().as_string().unwrap_or_default()
}

/// Scalar rendered as text; `None` for everything else.
fn text_of(value: &JsValue) -> Option<String> {
    if let Some(text) = value.as_string() {
        Some(text)
    } else if let Some(n) = value.as_f64() {
        Some(format_number(n))
    } else {
        value.as_bool().map(|b| b.to_string())
    }
}

fn tag_from_js(value: &JsValue) -> Option<Tag> {
    if let Some(segments) = value.dyn_ref::<Array>() {
        return Some(Tag::Chain(
            segments.iter().map(|s| text_of(&s).unwrap_or_default()).collect(),
        ));
    }
    text_of(value).map(Tag::Name)
}

fn class_from_js(value: &JsValue) -> Option<ClassName> {
    if let Some(entries) = value.dyn_ref::<Array>() {
        return Some(ClassName::Many(
            entries
                .iter()
                .map(|e| if e.is_truthy() { text_of(&e) } else { None })
                .collect(),
        ));
    }
    text_of(value).map(ClassName::One)
}

fn attr_value(value: &JsValue) -> AttrValue {
    if value.is_null() || value.is_undefined() {
        AttrValue::Null
    } else if let Some(b) = value.as_bool() {
        AttrValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        AttrValue::Number(n)
    } else if let Some(text) = value.as_string() {
        AttrValue::Text(text)
    } else {
        AttrValue::Text(String::from(Object::from(value.clone()).to_string()))
    }
}

fn pair_from_js(value: &JsValue) -> Option<(String, AttrValue)> {
    let pair = value.dyn_ref::<Array>()?;
    let name = pair.get(0).as_string()?;
    Some((name, attr_value(&pair.get(1))))
}

/// `[name, value]`, `[[name, value], ...]` or `{ name: value }`.
fn attrs_from_js(value: &JsValue) -> Result<Option<Attrs>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    if let Some(list) = value.dyn_ref::<Array>() {
        if list.get(0).is_string() {
            return Ok(pair_from_js(value).map(|(name, v)| Attrs::Pair(name, v)));
        }
        let pairs = list.iter().filter_map(|p| pair_from_js(&p)).collect();
        return Ok(Some(Attrs::Pairs(pairs)));
    }

    if !value.is_object() {
        wasm_warn!("ignoring attrs of type {}", type_of(value));
        return Ok(None);
    }

    let mut map = AttrMap::new();
    for entry in Object::entries(value.unchecked_ref::<Object>()).iter() {
        if let Some((name, v)) = pair_from_js(&entry) {
            map.insert(name, v);
        }
    }
    Ok(Some(Attrs::Map(map)))
}

fn content_value(value: &JsValue) -> Option<ContentValue<Node>> {
    if let Some(node) = value.dyn_ref::<Node>() {
        Some(ContentValue::Node(node.clone()))
    } else if let Some(text) = value.as_string() {
        Some(ContentValue::Text(text))
    } else if let Some(n) = value.as_f64() {
        Some(ContentValue::Number(n))
    } else {
        if !(value.is_null() || value.is_undefined()) {
            wasm_warn!("ignoring content of type {}", type_of(value));
        }
        None
    }
}

fn content_from_js(value: JsValue) -> Option<Content<Node>> {
    match value.dyn_into::<Function>() {
        Ok(producer) => Some(Content::producer(move || {
            match producer.call0(&JsValue::NULL) {
                Ok(produced) => content_value(&produced),
                Err(e) => {
                    wasm_error!("content producer threw: {:?}", e);
                    None
                }
            }
        })),
        Err(value) => content_value(&value).map(Content::Value),
    }
}

fn callback_from_js(value: JsValue) -> Option<Callback<Node>> {
    let callback = value.dyn_into::<Function>().ok()?;
    Some(Callback::new(move |node: &Node| {
        if let Err(e) = callback.call1(&JsValue::NULL, node) {
            wasm_error!("callback threw: {:?}", e);
        }
    }))
}
