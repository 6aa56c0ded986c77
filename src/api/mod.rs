//! DOM builder WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion and error mapping
//! - `lower`: reflective conversion of JS items into builder items
//! - `core`: exported `parse`, `build` and `decorate`

pub mod helpers;
pub mod lower;
pub mod core;

pub use core::*;
