//! TOML configuration: which categories are on, how lines look, and
//! per-category colors and labels.
//!
//! Every field has a default, so an empty or missing file yields a working
//! logger with all categories enabled.

mod structs;

pub use structs::{CategoryTable, GeneralConfig, TerminalConfig};

use crate::caller::CallerSource;
use crate::category::{Category, CategoryMask};
use crate::fmt::Color;
use crate::global;
use crate::logger::GateMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    /// `net = "#ff6100"` and so on.
    pub colors: CategoryTable,
    /// `model = "data log"` and so on.
    pub labels: CategoryTable,
}

impl Config {
    /// Loads the config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads from `path`. A missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            global::diagnostic("config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        global::diagnostic(&format!("config loaded from {}", path.display()));
        Ok(config)
    }

    /// Parses TOML content.
    ///
    /// # Errors
    /// Returns a parse error on malformed TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/catlog/catlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("catlog").join("catlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Enabled categories, rejecting unknown names.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCategory`] naming the first unknown category.
    pub fn mask(&self) -> Result<CategoryMask, crate::Error> {
        Ok(self.general.categories.parse()?)
    }

    /// Enabled categories. Unknown names fall back to all categories.
    #[must_use]
    pub fn parse_mask(&self) -> CategoryMask {
        self.mask().unwrap_or_else(|e| {
            global::diagnostic(&format!("{e}, enabling all categories"));
            CategoryMask::ALL
        })
    }

    /// Unknown values fall back to the trace master gate.
    #[must_use]
    pub fn parse_gate(&self) -> GateMode {
        self.general.gate.parse().unwrap_or_default()
    }

    /// Unknown values fall back to call-site hints.
    #[must_use]
    pub fn parse_caller(&self) -> CallerSource {
        self.terminal.caller.parse().unwrap_or_default()
    }

    /// Configured color for `category`, if any. Malformed hex is ignored.
    #[must_use]
    pub fn color_for(&self, category: Category) -> Option<Color> {
        self.colors
            .get(category.as_str())
            .and_then(|hex| Color::try_from_hex(hex))
    }

    /// Configured label for `category`, if any.
    #[must_use]
    pub fn label_for(&self, category: Category) -> Option<&str> {
        self.labels.get(category.as_str()).map(String::as_str)
    }
}
