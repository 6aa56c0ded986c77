//! Element setup: apply attributes, class and id from a record
//!
//! The order of the steps is the precedence mechanism. Attributes go first so
//! that the record's own `className` and `id` overwrite anything an
//! attribute of the same name set.

use crate::host::{HostDocument, HostError};
use crate::models::SpecRecord;

/// Decorate `node` with the attributes, class and id described by `spec`.
///
/// 1. `className` wins over its `class` alias
/// 2. `attrs` are normalized to ordered pairs
/// 3. each pair is set as an attribute; null values are skipped
/// 4. the class string overwrites any `class` attribute from step 3
/// 5. the id overwrites any `id` attribute from step 3
///
/// Children and content are not touched. Decorating twice with the same
/// record leaves the node as one call would.
///
/// # Returns
/// The same node, for chaining
pub fn decorate<'n, H: HostDocument>(
    host: &mut H,
    node: &'n H::Node,
    spec: &SpecRecord<H::Node>,
) -> Result<&'n H::Node, HostError> {
    let class_name = spec.resolved_class();

    if let Some(attrs) = &spec.attrs {
        for (name, value) in attrs.normalize() {
            if let Some(value) = value.to_attr_string() {
                host.set_attribute(node, &name, &value)?;
            }
        }
    }

    if let Some(class_name) = class_name {
        let joined = class_name.joined();
        if !joined.is_empty() {
            host.set_class_name(node, &joined)?;
        }
    }

    if let Some(id) = spec.id.as_deref().filter(|id| !id.is_empty()) {
        host.set_id(node, id)?;
    }

    Ok(node)
}
