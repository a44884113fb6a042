//! Settings loading from TOML files and environment variables.
//!
//! Settings are loaded in this order of precedence (highest wins):
//! 1. Environment variables (`WALTHEME_BUILTIN_DIR`, `WALTHEME_CONFIG_DIR`,
//!    `WALTHEME_CACHE_DIR`, `WALTHEME_ALPHA`)
//! 2. TOML file specified via --config CLI flag
//! 3. $XDG_CONFIG_HOME/waltheme/waltheme.toml (or ~/.config/waltheme/waltheme.toml)
//! 4. Built-in defaults

mod defaults;
mod env;
mod loader;
mod paths;
mod sources;
mod types;

pub use defaults::DEFAULT_ALPHA;
pub use loader::load_settings;
pub use types::Settings;
