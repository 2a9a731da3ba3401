//! Symbol policy for outline views
//!
//! Three pure pieces, applied in order by the caller:
//! - Top-level filter: which root symbols are shown at all
//! - Hierarchy normalizer: which children survive, with cleaned-up names
//! - Kind classifier: sort weight and display label per kind
//!
//! None of them mutate their input or hold state, so they can be called
//! from any thread.

pub mod hierarchy;
pub mod kind;
pub mod policy;

pub use hierarchy::{normalize_children, strip_accessor_marker};
pub use kind::{kind_table, label_of, ordinal, weight_of, KindInfo, KNOWN_KINDS, UNKNOWN_LABEL};
pub use policy::{excluded_child_kinds, is_excluded_child, is_private, is_visible_at_top_level};
