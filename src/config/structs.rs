//! Configuration struct definitions.

use serde::Deserialize;
use std::collections::HashMap;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enabled categories: `all`, `none`, a number, or names joined by `|` or `,`.
    pub categories: String,
    /// Gate mode (trace, category).
    pub gate: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            categories: "all".to_string(),
            gate: "trace".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable terminal output.
    pub enabled: bool,
    /// Enable colors.
    pub colors: bool,
    /// Line template for categorized output.
    pub structure: String,
    /// Caller hint source (location, stack, none).
    pub caller: String,
    /// Appended to the first part of caller hints.
    pub source_suffix: String,
    /// Write to stderr instead of stdout.
    pub stderr: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            structure: crate::fmt::FormatTemplate::DEFAULT.to_string(),
            caller: "location".to_string(),
            source_suffix: String::new(),
            stderr: false,
        }
    }
}

/// Per-category overrides, keyed by category name.
pub type CategoryTable = HashMap<String, String>;
