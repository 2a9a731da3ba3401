//! Error types for symtidy.
//!
//! The symbol policy itself is total; errors only come from the edges that
//! read configuration files or symbol dumps.

use thiserror::Error;

/// Result type for symtidy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading settings or symbol input
#[derive(Debug, Error)]
pub enum Error {
    /// Config file not found
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Config file is not valid TOML for `Settings`
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Symbol input is not a documentSymbol response
    #[error("Invalid symbol input: {0}")]
    Input(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
