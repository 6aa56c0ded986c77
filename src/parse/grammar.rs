//! Compact element syntax parser
//!
//! Grammar, matched left to right from the start of the string, every
//! segment optional:
//!
//! ```text
//! tag  #id  .class.class  (name:value,name=value,flag)  content
//! ```
//!
//! The attribute block may open with any of `(`, `[`, `{` and close with any
//! of `)`, `]`, `}`; the two delimiters are not required to match.

use crate::models::SpecFragment;
use crate::parse::attr_block::parse_attr_block;
use once_cell::sync::Lazy;
use regex::Regex;

// Capture groups:
// 1) tag: ASCII letter, then letters or digits
// 2) id: after '#'
// 3) classes: zero or more '.token'
// 4) attribute block body, between any opening and any closing bracket
// 5) content: everything after the first run of spaces
const ELEMENT_RE: &str =
    r"^([A-Za-z][A-Za-z0-9]*)?(?:#([A-Za-z0-9_-]+))?((?:\.[A-Za-z0-9_-]+)*)(?:[(\[{]([^)\]}]*)[)\]}])?(?: +(.*))?";

static ELEMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(ELEMENT_RE).expect("element pattern compiles"));

/// Parse a compact element string into a [`SpecFragment`].
///
/// The pattern is anchored only at the start and every segment is optional,
/// so malformed input degrades to defaults (`div`, no id, no classes, no
/// attributes, no content) instead of failing. `None` is returned only if
/// the pattern does not match at all.
///
/// # Example
/// ```
/// use dom_builder_wasm::parse;
///
/// let frag = parse("input#search-field[type=text,disabled]").unwrap();
/// assert_eq!(frag.tag, "input");
/// assert_eq!(frag.id.as_deref(), Some("search-field"));
/// ```
pub fn parse(dom_string: &str) -> Option<SpecFragment> {
    let caps = ELEMENT_PATTERN.captures(dom_string)?;

    let tag = caps
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_else(|| "div".to_string());

    let id = caps.get(2).map(|m| m.as_str().to_string());

    let class_name = caps.get(3).and_then(|m| {
        let classes: Vec<&str> = m.as_str().split('.').filter(|c| !c.is_empty()).collect();
        if classes.is_empty() {
            None
        } else {
            Some(classes.join(" "))
        }
    });

    let attrs = caps
        .get(4)
        .map(|m| parse_attr_block(m.as_str()))
        .unwrap_or_default();

    let content = caps
        .get(5)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    log::trace!("parse({:?}) -> <{}> id={:?} class={:?}", dom_string, tag, id, class_name);

    Some(SpecFragment {
        tag,
        id,
        class_name,
        attrs,
        content,
    })
}
