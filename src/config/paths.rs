//! Base-directory helpers following XDG conventions.
//!
//! Each helper takes an env lookup and a home-dir provider so tests can pin
//! both without mutating the process environment.

use std::path::{Path, PathBuf};

/// Return `$XDG_<name>` when set to a non-blank value.
fn xdg_dir<FEnv>(env_lookup: &FEnv, name: &str) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let value = env_lookup(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Resolve the base config directory (`$XDG_CONFIG_HOME` or `~/.config`).
pub(super) fn config_root_dir_with<FEnv, FHome>(env_lookup: &FEnv, home: &FHome) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    xdg_dir(env_lookup, "XDG_CONFIG_HOME")
        .or_else(|| home().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}

/// Resolve the base cache directory (`$XDG_CACHE_HOME` or `~/.cache`).
pub(super) fn cache_root_dir_with<FEnv, FHome>(env_lookup: &FEnv, home: &FHome) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    xdg_dir(env_lookup, "XDG_CACHE_HOME")
        .or_else(|| home().map(|home| home.join(".cache")))
        .or_else(dirs::cache_dir)
}

/// Resolve the base data directory (`$XDG_DATA_HOME` or `~/.local/share`).
pub(super) fn data_root_dir_with<FEnv, FHome>(env_lookup: &FEnv, home: &FHome) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    xdg_dir(env_lookup, "XDG_DATA_HOME")
        .or_else(|| home().map(|home| home.join(".local").join("share")))
        .or_else(dirs::data_dir)
}

/// Expand a leading `~/` (or a bare `~`) against `home`.
pub(super) fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let trimmed = raw.trim();
    match (trimmed, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
