//! Kind classification
//!
//! Maps an LSP `SymbolKind` to a sort weight and a display label. Both lookups
//! are total: kinds outside the protocol's set fall back to their raw ordinal
//! (weight) and to `"Unknown"` (label).

use lsp_types::SymbolKind;
use serde::Serialize;

/// Every kind defined by the protocol, in declaration order
pub const KNOWN_KINDS: [SymbolKind; 26] = [
    SymbolKind::FILE,
    SymbolKind::MODULE,
    SymbolKind::NAMESPACE,
    SymbolKind::PACKAGE,
    SymbolKind::CLASS,
    SymbolKind::METHOD,
    SymbolKind::PROPERTY,
    SymbolKind::FIELD,
    SymbolKind::CONSTRUCTOR,
    SymbolKind::ENUM,
    SymbolKind::INTERFACE,
    SymbolKind::FUNCTION,
    SymbolKind::VARIABLE,
    SymbolKind::CONSTANT,
    SymbolKind::STRING,
    SymbolKind::NUMBER,
    SymbolKind::BOOLEAN,
    SymbolKind::ARRAY,
    SymbolKind::OBJECT,
    SymbolKind::KEY,
    SymbolKind::NULL,
    SymbolKind::ENUM_MEMBER,
    SymbolKind::STRUCT,
    SymbolKind::EVENT,
    SymbolKind::OPERATOR,
    SymbolKind::TYPE_PARAMETER,
];

/// Label returned for kinds outside the protocol's set
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Raw protocol ordinal of a kind (`FILE` is 1, `TYPE_PARAMETER` is 26)
pub fn ordinal(kind: SymbolKind) -> i32 {
    // The integer inside `SymbolKind` is private; its serde form is the bare number.
    serde_json::to_value(kind)
        .ok()
        .and_then(|value| value.as_i64())
        .map_or(0, |raw| raw as i32)
}

/// Sort weight of a kind, ascending order puts important kinds first
///
/// Classes, constructors, properties, methods, interfaces, functions and
/// enums get fixed negative weights. Every other kind sorts by its ordinal,
/// which keeps them after the listed ones and in declaration order among
/// themselves.
pub fn weight_of(kind: SymbolKind) -> i32 {
    match kind {
        SymbolKind::CLASS => -100,
        SymbolKind::CONSTRUCTOR => -99,
        SymbolKind::PROPERTY => -98,
        SymbolKind::METHOD => -97,
        SymbolKind::INTERFACE => -96,
        SymbolKind::FUNCTION => -95,
        SymbolKind::ENUM => -94,
        _ => ordinal(kind),
    }
}

/// Human-readable label of a kind
pub fn label_of(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::FILE => "File",
        SymbolKind::MODULE => "Module",
        SymbolKind::NAMESPACE => "Namespace",
        SymbolKind::PACKAGE => "Package",
        SymbolKind::CLASS => "Class",
        SymbolKind::METHOD => "Method",
        SymbolKind::PROPERTY => "Property",
        SymbolKind::FIELD => "Field",
        SymbolKind::CONSTRUCTOR => "Constructor",
        SymbolKind::ENUM => "Enum",
        SymbolKind::INTERFACE => "Interface",
        SymbolKind::FUNCTION => "Function",
        SymbolKind::VARIABLE => "Variable",
        SymbolKind::CONSTANT => "Constant",
        SymbolKind::STRING => "String",
        SymbolKind::NUMBER => "Number",
        SymbolKind::BOOLEAN => "Boolean",
        SymbolKind::ARRAY => "Array",
        SymbolKind::OBJECT => "Object",
        SymbolKind::KEY => "Key",
        SymbolKind::NULL => "Null",
        SymbolKind::ENUM_MEMBER => "EnumMember",
        SymbolKind::STRUCT => "Struct",
        SymbolKind::EVENT => "Event",
        SymbolKind::OPERATOR => "Operator",
        SymbolKind::TYPE_PARAMETER => "TypeParameter",
        _ => UNKNOWN_LABEL,
    }
}

/// One row of the kind table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindInfo {
    pub kind: SymbolKind,
    pub ordinal: i32,
    pub weight: i32,
    pub label: &'static str,
}

/// All known kinds with their ordinal, weight and label, ordered by weight
pub fn kind_table() -> Vec<KindInfo> {
    let mut table: Vec<KindInfo> = KNOWN_KINDS
        .iter()
        .map(|&kind| KindInfo {
            kind,
            ordinal: ordinal(kind),
            weight: weight_of(kind),
            label: label_of(kind),
        })
        .collect();
    table.sort_by_key(|info| info.weight);
    table
}
