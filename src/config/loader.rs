//! Top-level settings loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::defaults::{BUILTIN_DIR_NAME, DEFAULT_ALPHA, WAL_DIR_NAME};
use super::env::{apply_env_overrides, validate_alpha};
use super::paths::{cache_root_dir_with, config_root_dir_with, data_root_dir_with, expand_home};
use super::sources::read_settings_text_with_sources;
use super::types::FileConfig;
use super::Settings;

/// Load settings from disk and environment.
///
/// `path_override` is an explicit settings file path (from --config flag).
pub fn load_settings(path_override: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::home_dir,
    )
}

pub(super) fn load_settings_from_sources<FRead, FEnv, FHome>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    home: FHome,
) -> Result<Settings, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    let config_root = config_root_dir_with(&env_lookup, &home);
    let (text, source) =
        read_settings_text_with_sources(path_override, &read_file, config_root.as_deref())?;
    debug!(?source, "settings source");
    let parsed: FileConfig = toml::from_str(&text)?;

    let mut settings = default_settings(&env_lookup, &home, config_root)?;
    let home_dir = home();
    if let Some(dir) = parsed.paths.builtin_dir {
        settings.builtin_root = expand_home(&dir, home_dir.as_deref());
    }
    if let Some(dir) = parsed.paths.user_dir {
        settings.user_root = expand_home(&dir, home_dir.as_deref());
    }
    if let Some(dir) = parsed.paths.cache_dir {
        settings.cache_root = expand_home(&dir, home_dir.as_deref());
    }
    if let Some(alpha) = parsed.theme.default_alpha {
        settings.default_alpha = validate_alpha(&alpha.into_text(), "theme.default_alpha")?;
    }

    apply_env_overrides(&mut settings, &env_lookup)?;
    Ok(settings)
}

/// Built-in locations derived from XDG base directories.
fn default_settings<FEnv, FHome>(
    env_lookup: &FEnv,
    home: &FHome,
    config_root: Option<PathBuf>,
) -> Result<Settings, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    let unresolved = |what: &str| {
        ConfigError::Invalid(format!(
            "unable to resolve the default {what} directory; set it in waltheme.toml"
        ))
    };
    let data_root = data_root_dir_with(env_lookup, home).ok_or_else(|| unresolved("data"))?;
    let config_root = config_root.ok_or_else(|| unresolved("config"))?;
    let cache_root = cache_root_dir_with(env_lookup, home).ok_or_else(|| unresolved("cache"))?;
    Ok(Settings {
        builtin_root: data_root.join(BUILTIN_DIR_NAME),
        user_root: config_root.join(WAL_DIR_NAME),
        cache_root: cache_root.join(WAL_DIR_NAME),
        default_alpha: DEFAULT_ALPHA.to_string(),
    })
}
