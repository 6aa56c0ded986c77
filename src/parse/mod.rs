//! Parsing module for the compact element syntax
//!
//! Turns strings such as `"ul#menu.nav[role=menu]"` into
//! [`SpecFragment`](crate::models::SpecFragment)s.

pub mod attr_block;
pub mod grammar;

// Re-export commonly used functions
pub use attr_block::parse_attr_block;
pub use grammar::parse;
