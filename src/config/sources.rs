//! Settings-file source discovery.
//!
//! Source order: explicit path > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SettingsSource {
    /// Settings loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Settings loaded from `<config_root>/waltheme/waltheme.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Read settings text from the highest-precedence available source.
pub(super) fn read_settings_text_with_sources<FRead>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: Option<&Path>,
) -> Result<(String, SettingsSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    // An explicit path must be readable; a missing global file is fine.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, SettingsSource::Explicit(path)));
    }

    if let Some(dir) = config_root {
        let global = dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME);
        match read_file(&global) {
            Ok(text) => return Ok((text, SettingsSource::Global(global))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }

    Ok((String::new(), SettingsSource::BuiltInDefaults))
}
