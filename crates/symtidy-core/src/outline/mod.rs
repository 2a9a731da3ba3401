//! Outline construction
//!
//! Runs the symbol policy over a whole documentSymbol result:
//! - top-level symbols pass through the visibility filter
//! - each survivor's children are normalized
//! - every node gets its kind label and weight
//! - siblings are ordered by weight (optional) and depth is capped (optional)
//!
//! The result is an [`Outline`], ready for JSON output or [`TextRenderer`].

pub mod render;

use std::vec;

use lsp_types::{DocumentSymbol, DocumentSymbolResponse, SymbolInformation, SymbolKind};
use serde::Serialize;
use tracing::debug;

use crate::config::OutlineSettings;
use crate::error::Result;
use crate::symbols::{is_visible_at_top_level, label_of, normalize_children, weight_of};

pub use render::TextRenderer;

/// One displayed outline node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub name: String,
    pub kind: SymbolKind,
    pub label: &'static str,
    pub weight: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Zero-based start line, as reported by the server
    pub line: u32,
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    fn from_symbol(symbol: &DocumentSymbol) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            label: label_of(symbol.kind),
            weight: weight_of(symbol.kind),
            detail: symbol.detail.clone().filter(|d| !d.is_empty()),
            line: symbol.range.start.line,
            children: Vec::new(),
        }
    }
}

/// A built outline: the visible root entries with their normalized subtrees
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Root entries in display order
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<OutlineEntry> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at every level
    pub fn entry_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&OutlineEntry> = self.entries.iter().collect();
        while let Some(entry) = pending.pop() {
            count += 1;
            pending.extend(entry.children.iter());
        }
        count
    }
}

/// A normalized symbol whose children are still being converted
struct Level {
    entry: Option<OutlineEntry>,
    pending: vec::IntoIter<DocumentSymbol>,
    built: Vec<OutlineEntry>,
    depth: usize,
}

/// Builds outlines from raw documentSymbol trees
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    settings: OutlineSettings,
}

impl OutlineBuilder {
    pub fn new(settings: OutlineSettings) -> Self {
        Self { settings }
    }

    /// Build the outline of a document's symbols
    ///
    /// The input is left untouched.
    pub fn build(&self, symbols: &[DocumentSymbol]) -> Outline {
        let roots: Vec<DocumentSymbol> = symbols
            .iter()
            .filter(|symbol| is_visible_at_top_level(symbol))
            .map(|symbol| {
                let mut root = without_children(symbol);
                root.children = Some(normalize_children(symbol));
                root
            })
            .collect();
        debug!(
            "Kept {} of {} top-level symbols",
            roots.len(),
            symbols.len()
        );

        let outline = Outline {
            entries: self.convert(roots),
        };
        debug!("Built outline with {} entries", outline.entry_count());
        outline
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.settings.max_depth.map_or(true, |max| depth <= max)
    }

    fn finish(&self, mut built: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
        if self.settings.sort {
            built.sort_by_key(|entry| entry.weight);
        }
        built
    }

    /// Convert normalized symbols into entries without recursing
    fn convert(&self, roots: Vec<DocumentSymbol>) -> Vec<OutlineEntry> {
        let mut stack = vec![Level {
            entry: None,
            pending: roots.into_iter(),
            built: Vec::new(),
            depth: 0,
        }];

        while let Some(level) = stack.last_mut() {
            let depth = level.depth + 1;
            if let Some(mut symbol) = level.pending.next() {
                let children = symbol.children.take().unwrap_or_default();
                let pending = if self.within_depth(depth + 1) {
                    children
                } else {
                    Vec::new()
                };
                if self.within_depth(depth) {
                    stack.push(Level {
                        entry: Some(OutlineEntry::from_symbol(&symbol)),
                        pending: pending.into_iter(),
                        built: Vec::new(),
                        depth,
                    });
                }
                continue;
            }

            let Some(finished) = stack.pop() else {
                break;
            };
            let children = self.finish(finished.built);
            match (stack.last_mut(), finished.entry) {
                (Some(parent), Some(mut entry)) => {
                    entry.children = children;
                    parent.built.push(entry);
                }
                _ => return children,
            }
        }

        Vec::new()
    }
}

/// Copy of a symbol with its children cleared
#[allow(deprecated)]
fn without_children(symbol: &DocumentSymbol) -> DocumentSymbol {
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: symbol.detail.clone(),
        kind: symbol.kind,
        tags: symbol.tags.clone(),
        deprecated: symbol.deprecated,
        range: symbol.range,
        selection_range: symbol.selection_range,
        children: None,
    }
}

/// Flatten a documentSymbol response into a symbol tree
///
/// Nested responses pass through. Flat `SymbolInformation` entries become
/// leaves, with their container name kept as detail.
pub fn from_response(response: DocumentSymbolResponse) -> Vec<DocumentSymbol> {
    match response {
        DocumentSymbolResponse::Nested(symbols) => symbols,
        DocumentSymbolResponse::Flat(items) => items.into_iter().map(leaf_from_information).collect(),
    }
}

#[allow(deprecated)]
fn leaf_from_information(info: SymbolInformation) -> DocumentSymbol {
    DocumentSymbol {
        name: info.name,
        detail: info.container_name,
        kind: info.kind,
        tags: info.tags,
        deprecated: info.deprecated,
        range: info.location.range,
        selection_range: info.location.range,
        children: None,
    }
}

/// Parse a JSON documentSymbol response (nested or flat)
pub fn parse_response(json: &str) -> Result<Vec<DocumentSymbol>> {
    let response: DocumentSymbolResponse = serde_json::from_str(json)?;
    Ok(from_response(response))
}
