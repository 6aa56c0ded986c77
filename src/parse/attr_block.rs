//! Attribute block body: `name:value, name=value, flag`

use crate::models::{AttrMap, AttrValue};

/// Split an attribute block body into an ordered attribute map.
///
/// Each comma-separated piece is split on its first `:` or `=`. A piece
/// without a separator is a flag and gets the value `true`. Names and values
/// are trimmed; pieces with an empty name are dropped.
pub fn parse_attr_block(body: &str) -> AttrMap {
    let mut attrs = AttrMap::new();

    for piece in body.split(',') {
        let (name, value) = match piece.find([':', '=']) {
            Some(pos) => (
                piece[..pos].trim(),
                AttrValue::Text(piece[pos + 1..].trim().to_string()),
            ),
            None => (piece.trim(), AttrValue::Bool(true)),
        };

        if name.is_empty() {
            continue;
        }
        attrs.insert(name, value);
    }

    attrs
}
