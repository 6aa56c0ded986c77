//! Parser output for one compact syntax string

use super::attrs::AttrMap;
use serde::Serialize;

/// Result of parsing `tag#id.class1.class2(attr:val,...) content`.
///
/// Absent fields serialize as `null`, matching what script callers expect.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecFragment {
    /// Lower-cased tag name, `"div"` when the string has none
    pub tag: String,
    pub id: Option<String>,
    /// Space-joined class tokens; `None` when the string has no `.class`
    pub class_name: Option<String>,
    pub attrs: AttrMap,
    pub content: Option<String>,
}

impl Default for SpecFragment {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            class_name: None,
            attrs: AttrMap::new(),
            content: None,
        }
    }
}
