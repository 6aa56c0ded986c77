//! Attribute values and the three accepted `attrs` input shapes
//!
//! Records may carry attributes as a single `[name, value]` pair, a list of
//! pairs, or a name→value mapping. Everything downstream consumes only the
//! normalized ordered-pairs form produced by [`Attrs::normalize`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single attribute value as supplied by the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Null/undefined: never applied to a node
    Null,
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// String form used when setting the attribute on a host node.
    ///
    /// Returns `None` for [`AttrValue::Null`].
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Number(n) => Some(format_number(*n)),
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Null => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// Format a number the way a script host stringifies it (`123`, `1.5`,
/// `NaN`, `Infinity`, `1e+21`, `1e-7`).
///
/// Magnitudes in `[1e-6, 1e21)` print as plain decimals, everything else in
/// exponent form with an explicit exponent sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // -0 prints as "0"
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    }
}

// ============================================================================
// AttrMap
// ============================================================================

/// Insertion-ordered attribute map with unique names.
///
/// Inserting an existing name replaces its value in place, so the original
/// position is kept.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct AttrMap(IndexMap<String, AttrValue>);

impl AttrMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn into_pairs(self) -> Vec<(String, AttrValue)> {
        self.0.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Attrs (input shapes)
// ============================================================================

/// Attribute data in any of its three equivalent input shapes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Attrs {
    /// `["role", "button"]`
    Pair(String, AttrValue),
    /// `[["role", "button"], ["tabindex", 0]]`
    Pairs(Vec<(String, AttrValue)>),
    /// `{ "role": "button", "tabindex": 0 }`
    Map(AttrMap),
}

impl Attrs {
    /// Canonical ordered-pairs form.
    pub fn normalize(&self) -> Vec<(String, AttrValue)> {
        match self {
            Attrs::Pair(name, value) => vec![(name.clone(), value.clone())],
            Attrs::Pairs(pairs) => pairs.clone(),
            Attrs::Map(map) => map.clone().into_pairs(),
        }
    }
}

impl From<AttrMap> for Attrs {
    fn from(map: AttrMap) -> Self {
        Attrs::Map(map)
    }
}
