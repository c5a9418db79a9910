//! Unified error type for all catlog operations.

use std::path::PathBuf;

/// Error type for catlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink or config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Config file named explicitly but absent.
    ConfigNotFound(PathBuf),
    /// Table payload could not be serialized.
    Serialize(serde_json::Error),
    /// Unknown category name in config or CLI input.
    InvalidCategory(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::ConfigNotFound(p) => write!(f, "config file not found: {}", p.display()),
            Self::Serialize(e) => write!(f, "serialization error: {e}"),
            Self::InvalidCategory(name) => write!(f, "invalid category: {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<crate::category::ParseCategoryError> for Error {
    fn from(e: crate::category::ParseCategoryError) -> Self {
        Self::InvalidCategory(e.name().to_string())
    }
}
