//! Visibility policy
//!
//! Which symbols are shown at the top level, and which child kinds each
//! parent kind suppresses.

use lsp_types::{DocumentSymbol, SymbolKind};

/// A set of parent kinds sharing one list of suppressed child kinds
struct ExclusionRule {
    parents: &'static [SymbolKind],
    excluded: &'static [SymbolKind],
}

/// Parent kind → suppressed child kinds. Parents not listed suppress nothing.
const EXCLUSION_TABLE: &[ExclusionRule] = &[
    // Callables and data holders: drop nested literals and inner declarations
    ExclusionRule {
        parents: &[
            SymbolKind::CONSTRUCTOR,
            SymbolKind::ENUM,
            SymbolKind::FUNCTION,
            SymbolKind::INTERFACE,
            SymbolKind::METHOD,
            SymbolKind::OBJECT,
            SymbolKind::PROPERTY,
            SymbolKind::VARIABLE,
        ],
        excluded: &[
            SymbolKind::ARRAY,
            SymbolKind::BOOLEAN,
            SymbolKind::CONSTANT,
            SymbolKind::FUNCTION,
            SymbolKind::NUMBER,
            SymbolKind::OBJECT,
            SymbolKind::PACKAGE,
            SymbolKind::PROPERTY,
            SymbolKind::VARIABLE,
        ],
    },
    // Classes keep methods, properties and constructors
    ExclusionRule {
        parents: &[SymbolKind::CLASS],
        excluded: &[
            SymbolKind::ARRAY,
            SymbolKind::BOOLEAN,
            SymbolKind::CLASS,
            SymbolKind::CONSTANT,
            SymbolKind::NUMBER,
            SymbolKind::STRING,
            SymbolKind::STRUCT,
            SymbolKind::VARIABLE,
        ],
    },
];

/// Child kinds dropped under a parent of the given kind
pub fn excluded_child_kinds(parent: SymbolKind) -> &'static [SymbolKind] {
    match EXCLUSION_TABLE
        .iter()
        .find(|rule| rule.parents.contains(&parent))
    {
        Some(rule) => rule.excluded,
        None => &[],
    }
}

/// Whether a child of kind `child` is dropped under a parent of kind `parent`
pub fn is_excluded_child(parent: SymbolKind, child: SymbolKind) -> bool {
    excluded_child_kinds(parent).contains(&child)
}

/// Names starting with an underscore are private by convention
pub fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Whether a symbol is shown as a root entry of the outline
///
/// Private names and bare properties are hidden. Children are not inspected.
pub fn is_visible_at_top_level(symbol: &DocumentSymbol) -> bool {
    !is_private(&symbol.name) && symbol.kind != SymbolKind::PROPERTY
}
