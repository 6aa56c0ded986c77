//! Merging a record over the fragment parsed from a tag-chain segment
//!
//! Field-by-field winner:
//!
//! | field       | result                                                  |
//! |-------------|---------------------------------------------------------|
//! | `tag`       | fragment (the segment's own tag)                        |
//! | `id`        | outer, else fragment                                    |
//! | `className` | fragment classes followed by outer classes              |
//! | `attrs`     | fragment pairs; outer pairs replace same names in place |
//! | `content`   | outer, else fragment                                    |
//! | the rest    | outer                                                   |

use crate::models::{AttrMap, Attrs, ClassName, Content, SpecFragment, SpecRecord, Tag};

/// Overlay `outer` onto `fragment`.
pub fn merge_over<N>(fragment: SpecFragment, outer: SpecRecord<N>) -> SpecRecord<N> {
    let SpecRecord {
        tag: _,
        id,
        class_name,
        class,
        attrs,
        content,
        condition,
        callback,
        children,
    } = outer;

    let outer_class = class_name.or(class).map(|c| c.joined());
    let classes: Vec<String> = fragment
        .class_name
        .into_iter()
        .chain(outer_class)
        .filter(|c| !c.is_empty())
        .collect();

    let mut merged_attrs: AttrMap = fragment.attrs;
    if let Some(attrs) = attrs {
        for (name, value) in attrs.normalize() {
            merged_attrs.insert(name, value);
        }
    }

    SpecRecord {
        tag: Some(Tag::Name(fragment.tag)),
        id: id.or(fragment.id),
        class_name: (!classes.is_empty()).then(|| ClassName::One(classes.join(" "))),
        class: None,
        attrs: (!merged_attrs.is_empty()).then_some(Attrs::Map(merged_attrs)),
        content: content.or_else(|| fragment.content.map(Content::text)),
        condition,
        callback,
        children,
    }
}
