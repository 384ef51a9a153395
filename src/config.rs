//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for an anexo.toml in the working directory, and if present we load settings from there.
//! This provides the default document path, output formatting and the fallback log filter.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "anexo.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from anexo.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "anexo-i.pdf".to_string())]
    /// Document read when no path is given on the command line.
    pub document: String,
    #[facet(default = true)]
    /// Pretty-print the JSON written to stdout.
    pub pretty: bool,
    #[facet(default = "warn".to_string())]
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from anexo.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::parse(""),
        }
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
