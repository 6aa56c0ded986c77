//! Declarative DOM tree builder
//!
//! Builds element trees from a compact string syntax
//! (`tag#id.class(attr:val) content`) and from nested item records, against
//! any [`HostDocument`]: the in-memory [`MemoryDocument`] or the browser
//! [`WebDocument`].

pub mod api;
pub mod builder;
pub mod diagnostics;
pub mod host;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use builder::{build, decorate, BuildOptions, TreeBuilder};
pub use diagnostics::{BuildDiagnostic, DiagnosticSeverity, Diagnostics};
pub use host::{HostDocument, HostError, MemoryDocument, NodeId, WebDocument};
pub use models::{
    items_from_json, items_from_value, AttrMap, AttrValue, Attrs, Callback, Children, ClassName,
    Content, ContentValue, Item, SpecError, SpecFragment, SpecRecord, Tag,
};
pub use parse::parse;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    log::info!("DOM builder WASM module initialized");
}
