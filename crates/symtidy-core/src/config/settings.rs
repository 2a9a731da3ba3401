//! Configuration settings
//!
//! Defines the configuration structures and how they are located on disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// File names looked up by [`Settings::discover`], in order
pub const CONFIG_CANDIDATES: [&str; 2] = ["symtidy.toml", ".symtidy.toml"];

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Outline construction settings
    pub outline: OutlineSettings,
    /// Text rendering settings
    pub render: RenderSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load the first config file found in `dir`, or defaults when there is none
    ///
    /// A candidate that fails to parse is skipped with a warning.
    pub fn discover(dir: &Path) -> Result<Self> {
        for candidate in CONFIG_CANDIDATES {
            let path = dir.join(candidate);
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(settings) => return Ok(settings),
                Err(Error::ConfigParse { path, source }) => {
                    warn!("Ignoring unparsable config {}: {}", path, source);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self::default())
    }
}

/// Outline construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Order siblings by kind weight (stable, ties keep source order)
    pub sort: bool,
    /// Deepest level kept, 1 being the top level; `None` keeps everything
    pub max_depth: Option<usize>,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            sort: true,
            max_depth: None,
        }
    }
}

/// Text rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Spaces per nesting level
    pub indent: usize,
    /// Append the 1-based start line of each entry
    pub show_lines: bool,
    /// Append the symbol detail when the server reported one
    pub show_detail: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent: 2,
            show_lines: true,
            show_detail: false,
        }
    }
}
