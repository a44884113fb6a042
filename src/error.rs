//! Unified error types for theme resolution.

use std::fmt;
use std::path::PathBuf;

use crate::theme::ThemeVariant;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing settings.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Top-level error type for locating and loading themes.
#[derive(Debug)]
pub enum ThemeError {
    /// A theme file could not be read, or another filesystem call failed.
    Io(std::io::Error),
    /// A colorscheme directory that must exist for enumeration is missing.
    DirectoryNotFound(PathBuf),
    /// Theme text is not valid JSON.
    Json(serde_json::Error),
    /// JSON parsed but does not have a usable theme shape.
    MalformedTheme(String),
    /// Every candidate location was exhausted.
    ThemeNotFound { variant: ThemeVariant },
    Config(ConfigError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::DirectoryNotFound(path) => {
                write!(f, "theme directory not found: {}", path.display())
            }
            Self::Json(e) => write!(f, "json: {e}"),
            Self::MalformedTheme(msg) => write!(f, "malformed theme: {msg}"),
            Self::ThemeNotFound { variant } => {
                write!(f, "no {} colorscheme file found", variant.dir_name())
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ConfigError> for ThemeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
