//! Hierarchy normalization
//!
//! Rebuilds the children of a symbol: drops children whose kind is suppressed
//! under the parent's kind, drops private names, strips accessor markers and
//! applies the same policy to every survivor's own children.
//!
//! The traversal keeps its own work stack, so the depth of the input tree
//! never grows the call stack.

use std::borrow::Cow;
use std::slice;
use std::sync::OnceLock;

use lsp_types::{DocumentSymbol, SymbolKind};
use regex::Regex;
use tracing::{debug, trace};

use super::policy::{is_excluded_child, is_private};

/// Strip leading accessor markers (`"(get) "`, `"(set) "`) from a symbol name
///
/// Names without a marker are returned borrowed and unchanged.
pub fn strip_accessor_marker(name: &str) -> Cow<'_, str> {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    let re = MARKER_RE.get_or_init(|| Regex::new(r"^(?:\((?:get|set)\) )+").unwrap());
    re.replace(name, "")
}

/// Normalized display name of `child` under a parent of kind `parent`,
/// or `None` when the child is dropped
fn retained_name(parent: SymbolKind, child: &DocumentSymbol) -> Option<String> {
    if is_excluded_child(parent, child.kind) {
        trace!("Dropping {:?} '{}' under {:?}", child.kind, child.name, parent);
        return None;
    }

    let name = strip_accessor_marker(&child.name);
    if is_private(&name) {
        trace!("Dropping private symbol '{}'", child.name);
        return None;
    }

    Some(name.into_owned())
}

/// A symbol whose children are still being visited
struct Frame<'a> {
    source: &'a DocumentSymbol,
    name: String,
    pending: slice::Iter<'a, DocumentSymbol>,
    kept: Vec<DocumentSymbol>,
}

impl<'a> Frame<'a> {
    fn new(source: &'a DocumentSymbol, name: String) -> Self {
        Self {
            source,
            name,
            pending: source.children.as_deref().unwrap_or_default().iter(),
            kept: Vec::new(),
        }
    }

    /// Next child that survives the policy, with its normalized name
    fn next_survivor(&mut self) -> Option<(&'a DocumentSymbol, String)> {
        let parent = self.source.kind;
        self.pending
            .by_ref()
            .find_map(|child| retained_name(parent, child).map(|name| (child, name)))
    }

    /// Fresh descriptor: same kind and ranges, normalized name and children
    #[allow(deprecated)]
    fn into_symbol(self) -> DocumentSymbol {
        DocumentSymbol {
            name: self.name,
            detail: self.source.detail.clone(),
            kind: self.source.kind,
            tags: self.source.tags.clone(),
            deprecated: self.source.deprecated,
            range: self.source.range,
            selection_range: self.source.selection_range,
            children: Some(self.kept),
        }
    }
}

/// Normalize the direct children of `symbol`, recursively
///
/// Survivors keep the order reported by the language server. An excluded
/// child is dropped together with its whole subtree. The input is not
/// modified.
pub fn normalize_children(symbol: &DocumentSymbol) -> Vec<DocumentSymbol> {
    let mut stack = vec![Frame::new(symbol, symbol.name.clone())];

    while let Some(frame) = stack.last_mut() {
        if let Some((child, name)) = frame.next_survivor() {
            stack.push(Frame::new(child, name));
            continue;
        }

        let Some(finished) = stack.pop() else {
            break;
        };
        debug!(
            "Normalized '{}': kept {} of {} children",
            finished.name,
            finished.kept.len(),
            finished.source.children.as_ref().map_or(0, Vec::len)
        );
        match stack.last_mut() {
            Some(parent) => parent.kept.push(finished.into_symbol()),
            None => return finished.kept,
        }
    }

    Vec::new()
}
