//! Default settings constants.

/// Alpha applied to themes that do not set one.
pub const DEFAULT_ALPHA: &str = "100";
/// Directory name under the data dir holding bundled colorschemes.
pub(super) const BUILTIN_DIR_NAME: &str = "waltheme";
/// Directory name under the config/cache roots shared with other wal tools.
pub(super) const WAL_DIR_NAME: &str = "wal";
/// Settings file location under the config root: `waltheme/waltheme.toml`.
pub(super) const SETTINGS_DIR_NAME: &str = "waltheme";
pub(super) const SETTINGS_FILE_NAME: &str = "waltheme.toml";
