// src/config.rs
use crate::core::ignore::IgnoreList;
use crate::models::Options;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional per-tree configuration file, looked up in the scan
/// root.
pub const CONFIG_FILE: &str = "mdnav.toml";

/// Settings read from `mdnav.toml`.
///
/// Unlike per-document front matter, this file is explicit user
/// configuration, so a parse failure is a hard error rather than a warning.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ignore: Vec<String>,
    pub collapsible: Option<bool>,
    pub collapsed: Option<bool>,
}

impl Config {
    /// Loads the configuration file from `dir`, or the defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file exists but cannot be read
    /// * The file contains invalid TOML or unknown keys
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    #[must_use]
    pub fn into_options(self) -> Options {
        Options {
            files_to_ignore: IgnoreList::new(self.ignore),
            collapsible: self.collapsible,
            collapsed: self.collapsed,
        }
    }
}
