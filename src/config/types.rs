//! Settings data model.
//!
//! Struct definitions plus default values only. Source discovery and
//! precedence live in `loader`/`sources`/`env`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::DEFAULT_ALPHA;

/// Resolved runtime settings for theme lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root holding the bundled `colorschemes/{dark,light}` trees.
    pub builtin_root: PathBuf,
    /// Root holding user `colorschemes/{dark,light}` trees.
    pub user_root: PathBuf,
    /// Directory receiving the `last_used_theme` record.
    pub cache_root: PathBuf,
    /// Alpha written into themes that omit one.
    pub default_alpha: String,
}

impl Settings {
    /// Settings rooted at explicit directories with the built-in alpha.
    pub fn with_roots(
        builtin_root: impl Into<PathBuf>,
        user_root: impl Into<PathBuf>,
        cache_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            builtin_root: builtin_root.into(),
            user_root: user_root.into(),
            cache_root: cache_root.into(),
            default_alpha: DEFAULT_ALPHA.to_string(),
        }
    }
}

/// On-disk `waltheme.toml` shape. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub paths: PathsConfig,
    pub theme: ThemeConfig,
}

/// `[paths]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PathsConfig {
    pub builtin_dir: Option<String>,
    pub user_dir: Option<String>,
    pub cache_dir: Option<String>,
}

/// `[theme]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ThemeConfig {
    pub default_alpha: Option<AlphaSetting>,
}

/// Alpha may be written as `default_alpha = 90` or `default_alpha = "90"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum AlphaSetting {
    Number(i64),
    Text(String),
}

impl AlphaSetting {
    pub(super) fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}
