//! symtidy core library
//!
//! Turns the raw symbol tree a language server returns for
//! `textDocument/documentSymbol` into a clean outline:
//! - Top-level filter: hides private names and bare properties
//! - Hierarchy normalizer: prunes children per parent kind, strips
//!   `(get) `/`(set) ` accessor markers
//! - Kind classifier: sort weight and display label for every kind
//! - Outline builder and text renderer on top of the three
//!
//! # Library Usage
//!
//! ```ignore
//! use symtidy_core::outline::{parse_response, OutlineBuilder, TextRenderer};
//! use symtidy_core::config::Settings;
//!
//! let settings = Settings::default();
//! let symbols = parse_response(&json)?;
//! let outline = OutlineBuilder::new(settings.outline).build(&symbols);
//! print!("{}", TextRenderer::new(settings.render).render(&outline));
//! ```

pub mod config;
pub mod error;
pub mod outline;
pub mod symbols;

pub use config::Settings;
pub use error::{Error, Result};
pub use outline::{Outline, OutlineBuilder, OutlineEntry, TextRenderer};
pub use symbols::{
    is_visible_at_top_level, kind_table, label_of, normalize_children, weight_of, KindInfo,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
