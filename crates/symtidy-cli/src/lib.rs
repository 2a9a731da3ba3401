//! symtidy CLI - Command-line interface library
//!
//! This library provides the CLI functionality for symtidy:
//! - Outline: Clean up a documentSymbol response and print it
//! - Kinds: Show the weight and label of every symbol kind
//!
//! # Library Usage
//!
//! ```ignore
//! use symtidy_cli::{outline_command, OutputFormat};
//! use symtidy_core::Settings;
//!
//! let text = outline_command(&input, OutputFormat::Text, &Settings::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Outline from a saved response
//! symtidy outline symbols.json
//!
//! # Straight from another tool, as JSON
//! lsp-dump --document-symbols src/main.ts | symtidy outline - --format json
//!
//! # With debug logging
//! RUST_LOG=debug symtidy outline symbols.json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{init_tracing, kinds_command, outline_command, run_cli, OutputFormat};
