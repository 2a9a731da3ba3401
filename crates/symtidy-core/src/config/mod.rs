//! Configuration for symtidy
//!
//! Settings are loaded from `symtidy.toml` (or `.symtidy.toml`):
//!
//! ```toml
//! [outline]
//! sort = true
//! max_depth = 3
//!
//! [render]
//! indent = 2
//! show_lines = true
//! show_detail = false
//! ```
//!
//! Every section and field is optional and falls back to its default.

mod settings;


pub use settings::{OutlineSettings, RenderSettings, Settings, CONFIG_CANDIDATES};
