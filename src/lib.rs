//! waltheme: locate and load terminal color themes.
//!
//! Themes are JSON files under `colorschemes/{dark,light}/` in a built-in
//! root or a user root. Loading fills in `wallpaper`/`alpha` defaults and
//! converts terminal.sexy exports into the `colors`/`special` layout.
//!
//! # Quick start
//!
//! ```no_run
//! use waltheme::config::load_settings;
//! use waltheme::theme::{ThemeIdentifier, ThemeResolver};
//!
//! let settings = load_settings(None).unwrap();
//! let resolver = ThemeResolver::from_settings(settings);
//! let theme = resolver
//!     .resolve_and_load(&ThemeIdentifier::parse("gruvbox"), false)
//!     .unwrap();
//! println!("{:?}", theme.special("background"));
//! ```

pub mod config;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod theme;

use error::ThemeError;
use theme::{ThemeData, ThemeIdentifier, ThemeResolver};

/// Resolve `name` with settings from the environment and the default
/// settings file, recording the result in the cache directory.
pub fn resolve_and_load(name: &str, light: bool) -> Result<ThemeData, ThemeError> {
    let settings = config::load_settings(None)?;
    ThemeResolver::from_settings(settings).resolve_and_load(&ThemeIdentifier::parse(name), light)
}
