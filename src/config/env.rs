//! Environment overrides for settings.
//!
//! `WALTHEME_*` variables win over the settings file.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Settings;

pub(super) const ENV_BUILTIN_DIR: &str = "WALTHEME_BUILTIN_DIR";
pub(super) const ENV_CONFIG_DIR: &str = "WALTHEME_CONFIG_DIR";
pub(super) const ENV_CACHE_DIR: &str = "WALTHEME_CACHE_DIR";
pub(super) const ENV_ALPHA: &str = "WALTHEME_ALPHA";

pub(super) fn apply_env_overrides<FEnv>(
    settings: &mut Settings,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = non_blank(env_lookup, ENV_BUILTIN_DIR) {
        settings.builtin_root = PathBuf::from(dir);
    }
    if let Some(dir) = non_blank(env_lookup, ENV_CONFIG_DIR) {
        settings.user_root = PathBuf::from(dir);
    }
    if let Some(dir) = non_blank(env_lookup, ENV_CACHE_DIR) {
        settings.cache_root = PathBuf::from(dir);
    }
    if let Some(alpha) = env_lookup(ENV_ALPHA) {
        settings.default_alpha = validate_alpha(&alpha, ENV_ALPHA)?;
    }
    Ok(())
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Accept an integer percentage in `0..=100`, returned trimmed.
pub(super) fn validate_alpha(raw: &str, origin: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u8>() {
        Ok(value) if value <= 100 => Ok(trimmed.to_string()),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {origin} value `{raw}`: expected an integer between 0 and 100"
        ))),
    }
}
