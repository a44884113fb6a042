//! Theme data model: variants, identifiers, located files and parsed data.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Light/dark axis of theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Map the CLI `--light` flag to a variant.
    pub fn from_light(light: bool) -> Self {
        if light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Subdirectory name under `colorschemes/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeIdentifier {
    /// `random` or `random_dark`: a random built-in dark theme.
    Random,
    /// `random_light`: a random built-in light theme.
    RandomLight,
    /// `random_user`: a random theme from either user directory.
    RandomUser,
    /// A theme name, or a path to a theme file.
    Named(String),
}

impl ThemeIdentifier {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "random" | "random_dark" => Self::Random,
            "random_light" => Self::RandomLight,
            "random_user" => Self::RandomUser,
            other => Self::Named(other.to_string()),
        }
    }
}

impl From<&str> for ThemeIdentifier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// A theme file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    path: PathBuf,
}

impl ThemeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename, e.g. `gruvbox.json`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Basename without the `.json` extension.
    pub fn theme_name(&self) -> String {
        let name = self.file_name();
        match name.strip_suffix(".json") {
            Some(stem) => stem.to_string(),
            None => name,
        }
    }
}

/// A parsed and normalized theme.
///
/// Holds the complete JSON object so keys this crate does not know about
/// survive untouched for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThemeData {
    fields: Map<String, Value>,
}

impl ThemeData {
    pub(crate) fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wallpaper path, or `"None"` when the theme had none.
    pub fn wallpaper(&self) -> Option<&str> {
        self.fields.get("wallpaper").and_then(Value::as_str)
    }

    /// Alpha as written in the file (number or string) or the default.
    pub fn alpha(&self) -> Option<&Value> {
        self.fields.get("alpha")
    }

    /// The `colors` table, if present.
    pub fn colors(&self) -> Option<&Map<String, Value>> {
        self.fields.get("colors").and_then(Value::as_object)
    }

    /// The `special` table, if present.
    pub fn special_colors(&self) -> Option<&Map<String, Value>> {
        self.fields.get("special").and_then(Value::as_object)
    }

    /// Look up `colors.<name>`, e.g. `color("color4")`.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors()?.get(name)?.as_str()
    }

    /// Look up `special.<key>`: `foreground`, `background` or `cursor`.
    pub fn special(&self, key: &str) -> Option<&str> {
        self.special_colors()?.get(key)?.as_str()
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.fields
    }
}
