//! Tree builder
//!
//! Walks a sequence of items, lowers each to a [`SpecRecord`], creates and
//! decorates host nodes, resolves content and children, and wires the result
//! into the parent. Items are processed strictly in order and a child subtree
//! is complete before the next sibling starts.
//!
//! ```
//! use dom_builder_wasm::{build, BuildOptions, HostDocument, Item, MemoryDocument, SpecRecord};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.create_element("body").unwrap();
//! let items: Vec<Item<_>> = vec![
//!     "h1#title Welcome".into(),
//!     SpecRecord::new("ul")
//!         .class_name("menu")
//!         .children(vec!["li Home".into(), "li About".into()])
//!         .into(),
//! ];
//! build(&mut doc, items, Some(&body), BuildOptions::default()).unwrap();
//! assert_eq!(
//!     doc.outer_html(body),
//!     r#"<body><h1 id="title">Welcome</h1><ul class="menu"><li>Home</li><li>About</li></ul></body>"#
//! );
//! ```

pub mod content;
pub mod merge;
pub mod setup;

pub use content::{resolve_content, ResolvedContent};
pub use merge::merge_over;
pub use setup::decorate;

use crate::diagnostics::{BuildDiagnostic, DiagnosticSeverity, Diagnostics};
use crate::host::{HostDocument, HostError};
use crate::models::{Children, Item, SpecRecord, Tag};
use crate::parse::parse;
use serde::{Deserialize, Serialize};

/// Options for a build call
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Clear the parent's existing content before processing any item
    pub empty_parent: bool,
}

/// Build `items` under `parent` and return the first element created.
///
/// Convenience wrapper around [`TreeBuilder`] for callers that do not need
/// the diagnostics.
pub fn build<H: HostDocument>(
    host: &mut H,
    items: impl IntoIterator<Item = Item<H::Node>>,
    parent: Option<&H::Node>,
    options: BuildOptions,
) -> Result<Option<H::Node>, HostError> {
    TreeBuilder::new(host).build(items, parent, options)
}

/// Stateful builder over a host document.
pub struct TreeBuilder<'h, H: HostDocument> {
    host: &'h mut H,
    diagnostics: Diagnostics,
}

impl<'h, H: HostDocument> TreeBuilder<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self {
            host,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Recoverable problems met by every build so far
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Build `items` in order under `parent`.
    ///
    /// # Returns
    /// The first element created by this call (for a tag-chain item, the
    /// node of its last segment), or `None` when every item was skipped
    pub fn build(
        &mut self,
        items: impl IntoIterator<Item = Item<H::Node>>,
        parent: Option<&H::Node>,
        options: BuildOptions,
    ) -> Result<Option<H::Node>, HostError> {
        self.build_items(items, parent, options, &[])
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn build_items(
        &mut self,
        items: impl IntoIterator<Item = Item<H::Node>>,
        parent: Option<&H::Node>,
        options: BuildOptions,
        path: &[usize],
    ) -> Result<Option<H::Node>, HostError> {
        if options.empty_parent {
            if let Some(parent) = parent {
                self.host.clear_content(parent)?;
            }
        }

        let mut first = None;
        for (index, item) in items.into_iter().enumerate() {
            let mut item_path = path.to_vec();
            item_path.push(index);

            let Some(record) = lower_item(item) else {
                continue;
            };
            if !record.condition {
                log::debug!("item {:?} skipped: condition is false", item_path);
                continue;
            }

            let element = self.build_record(record, parent, &item_path)?;
            if first.is_none() {
                first = Some(element);
            }
        }

        Ok(first)
    }

    /// Build one record. `parent` doubles as the restore point: tag-chain
    /// ancestors only ever become the parent of this record's element.
    fn build_record(
        &mut self,
        mut record: SpecRecord<H::Node>,
        parent: Option<&H::Node>,
        path: &[usize],
    ) -> Result<H::Node, HostError> {
        let mut chain_parent: Option<H::Node> = None;

        let record = match record.tag.take() {
            Some(Tag::Chain(segments)) => {
                let (last, ancestors) = match segments.split_last() {
                    Some((last, ancestors)) => (last.as_str(), ancestors),
                    None => {
                        self.report(
                            path,
                            DiagnosticSeverity::Warning,
                            "empty_tag_chain",
                            "tag chain has no segments, using div".to_string(),
                        );
                        ("", &[][..])
                    }
                };

                for segment in ancestors {
                    let fragment = parse(segment).unwrap_or_default();
                    let node = self.host.create_element(&fragment.tag)?;
                    decorate(&mut *self.host, &node, &SpecRecord::from(fragment))?;
                    if let Some(current) = chain_parent.as_ref().or(parent) {
                        self.host.append_child(current, &node)?;
                    }
                    chain_parent = Some(node);
                }

                merge_over(parse(last).unwrap_or_default(), record)
            }
            tag => {
                record.tag = tag;
                record
            }
        };

        let element = self.host.create_element(record.tag_name())?;
        decorate(&mut *self.host, &element, &record)?;
        log::debug!("created <{}> at {:?}", record.tag_name(), path);

        let SpecRecord { content, callback, children, .. } = record;

        match resolve_content(content) {
            ResolvedContent::Markup(markup) => self.host.set_inner_html(&element, &markup)?,
            ResolvedContent::Node(node) => self.host.append_child(&element, &node)?,
            ResolvedContent::Empty => {}
        }

        match children {
            None => {}
            Some(Children::Items(items)) => {
                self.build_items(items, Some(&element), BuildOptions::default(), path)?;
            }
            Some(Children::Invalid(found)) => {
                let message = format!("children must be a sequence, got {}; children skipped", found);
                self.report(path, DiagnosticSeverity::Error, "children_not_a_sequence", message);
            }
        }

        if let Some(target) = chain_parent.as_ref().or(parent) {
            self.host.append_child(target, &element)?;
        }

        if let Some(callback) = callback {
            callback.call(&element);
        }

        Ok(element)
    }

    /// Log a recoverable problem once and keep it for the caller.
    fn report(&mut self, path: &[usize], severity: DiagnosticSeverity, kind: &str, message: String) {
        match severity {
            DiagnosticSeverity::Error => log::error!("item {:?}: {}", path, message),
            DiagnosticSeverity::Warning => log::warn!("item {:?}: {}", path, message),
        }
        self.diagnostics
            .add(BuildDiagnostic::new(path.to_vec(), severity, kind, message));
    }
}

/// Lower an item to a record; `None` for items that produce nothing.
fn lower_item<N>(item: Item<N>) -> Option<SpecRecord<N>> {
    match item {
        Item::Text(text) if text.is_empty() => None,
        Item::Text(text) => parse(&text).map(SpecRecord::from),
        Item::Record(record) => Some(*record),
    }
}
