//! Specification records: the canonical shape every item is lowered into
//!
//! A record describes one node to build. It is generic over the host node
//! type `N` because content may carry a ready-made host node and callbacks
//! receive the created one.

use super::attrs::{AttrValue, Attrs, AttrMap};
use super::fragment::SpecFragment;
use std::fmt;

/// Tag name or parent→child tag chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Name(String),
    /// Each segment nests inside the previous one; only the last absorbs the
    /// record's other fields.
    Chain(Vec<String>),
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::Name(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::Name(value)
    }
}

/// Class list as a single string or a list of entries.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassName {
    One(String),
    /// Empty and missing entries are dropped when joined
    Many(Vec<Option<String>>),
}

impl ClassName {
    /// Space-joined class string with falsy entries dropped.
    pub fn joined(&self) -> String {
        match self {
            ClassName::One(s) => s.clone(),
            ClassName::Many(entries) => entries
                .iter()
                .filter_map(|e| e.as_deref())
                .filter(|e| !e.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        ClassName::One(value.to_string())
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        ClassName::One(value)
    }
}

impl From<Vec<&str>> for ClassName {
    fn from(value: Vec<&str>) -> Self {
        ClassName::Many(value.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

// ============================================================================
// Content
// ============================================================================

/// A concrete content value.
pub enum ContentValue<N> {
    Text(String),
    Number(f64),
    Node(N),
}

/// Content of a record: a value, or a producer invoked once at build time.
pub enum Content<N> {
    Value(ContentValue<N>),
    Producer(Box<dyn FnOnce() -> Option<ContentValue<N>>>),
}

impl<N> Content<N> {
    pub fn text(value: impl Into<String>) -> Self {
        Content::Value(ContentValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Content::Value(ContentValue::Number(value))
    }

    pub fn node(node: N) -> Self {
        Content::Value(ContentValue::Node(node))
    }

    pub fn producer(f: impl FnOnce() -> Option<ContentValue<N>> + 'static) -> Self {
        Content::Producer(Box::new(f))
    }
}

impl<N: fmt::Debug> fmt::Debug for ContentValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            ContentValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            ContentValue::Node(n) => f.debug_tuple("Node").field(n).finish(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Content<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Value(v) => v.fmt(f),
            Content::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Invoked with the created node once it is decorated, filled and appended.
pub struct Callback<N>(pub Box<dyn FnOnce(&N)>);

impl<N> Callback<N> {
    pub fn new(f: impl FnOnce(&N) + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn call(self, node: &N) {
        (self.0)(node)
    }
}

impl<N> fmt::Debug for Callback<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Children field: a list of items, or whatever non-list value was supplied.
#[derive(Debug)]
pub enum Children<N> {
    Items(Vec<Item<N>>),
    /// Present but not a sequence; carries a description of what was found
    Invalid(String),
}

// ============================================================================
// Items and records
// ============================================================================

/// One entry of a build sequence.
#[derive(Debug)]
pub enum Item<N> {
    /// Compact syntax string, e.g. `"li.item Hello"`
    Text(String),
    Record(Box<SpecRecord<N>>),
}

impl<N> From<&str> for Item<N> {
    fn from(value: &str) -> Self {
        Item::Text(value.to_string())
    }
}

impl<N> From<String> for Item<N> {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl<N> From<SpecRecord<N>> for Item<N> {
    fn from(record: SpecRecord<N>) -> Self {
        Item::Record(Box::new(record))
    }
}

/// Canonical description of one node to build.
#[derive(Debug)]
pub struct SpecRecord<N> {
    /// `None` means `"div"`
    pub tag: Option<Tag>,
    pub id: Option<String>,
    pub class_name: Option<ClassName>,
    /// Alias of `class_name`; ignored when `class_name` is set
    pub class: Option<ClassName>,
    pub attrs: Option<Attrs>,
    pub content: Option<Content<N>>,
    pub condition: bool,
    pub callback: Option<Callback<N>>,
    pub children: Option<Children<N>>,
}

impl<N> Default for SpecRecord<N> {
    fn default() -> Self {
        Self {
            tag: None,
            id: None,
            class_name: None,
            class: None,
            attrs: None,
            content: None,
            condition: true,
            callback: None,
            children: None,
        }
    }
}

impl<N> SpecRecord<N> {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self { tag: Some(tag.into()), ..Self::default() }
    }

    /// Record whose tag is a parent→child chain.
    pub fn chain<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            tag: Some(Tag::Chain(segments.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn class(mut self, class: impl Into<ClassName>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attrs(mut self, attrs: impl Into<Attrs>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    /// Add one attribute, keeping any already present.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let mut pairs = self.attrs.take().map(|a| a.normalize()).unwrap_or_default();
        pairs.push((name.into(), value.into()));
        self.attrs = Some(Attrs::Pairs(pairs));
        self
    }

    pub fn content(mut self, content: Content<N>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.content(Content::text(text))
    }

    pub fn condition(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    pub fn callback(mut self, f: impl FnOnce(&N) + 'static) -> Self {
        self.callback = Some(Callback::new(f));
        self
    }

    pub fn children(mut self, children: Vec<Item<N>>) -> Self {
        self.children = Some(Children::Items(children));
        self
    }

    /// `className` if set, otherwise the `class` alias.
    pub fn resolved_class(&self) -> Option<&ClassName> {
        self.class_name.as_ref().or(self.class.as_ref())
    }

    pub fn tag_name(&self) -> &str {
        match &self.tag {
            Some(Tag::Name(name)) if !name.is_empty() => name,
            _ => "div",
        }
    }
}

impl<N> From<SpecFragment> for SpecRecord<N> {
    fn from(fragment: SpecFragment) -> Self {
        let attrs = if fragment.attrs.is_empty() {
            None
        } else {
            Some(Attrs::Map(fragment.attrs))
        };
        Self {
            tag: Some(Tag::Name(fragment.tag)),
            id: fragment.id,
            class_name: fragment.class_name.map(ClassName::One),
            attrs,
            content: fragment.content.map(Content::text),
            ..Self::default()
        }
    }
}

impl<N> From<AttrMap> for SpecRecord<N> {
    fn from(attrs: AttrMap) -> Self {
        Self { attrs: Some(Attrs::Map(attrs)), ..Self::default() }
    }
}
