//! Data model for declarative tree building
//!
//! Everything a caller can hand to the builder is lowered into a
//! [`SpecRecord`] before any further logic runs.

pub mod attrs;
pub mod fragment;
pub mod raw;
pub mod spec;

pub use attrs::{format_number, AttrMap, AttrValue, Attrs};
pub use fragment::SpecFragment;
pub use raw::{items_from_json, items_from_value, SpecError};
pub use spec::{Callback, Children, ClassName, Content, ContentValue, Item, SpecRecord, Tag};
