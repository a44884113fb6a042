//! Theme files: lookup, parsing and terminal.sexy conversion.
//!
//! Themes live under `colorschemes/{dark,light}/` in a built-in root and a
//! user root. [`ThemeResolver`] picks one file for an identifier,
//! [`parse`] turns it into [`ThemeData`]. The bundled set is embedded in the
//! binary and installed by [`install_bundled`].

mod bundled;
mod last_used;
mod legacy;
mod listing;
mod parse;
mod resolve;
mod types;

pub use bundled::install_bundled;
pub use last_used::{FileLastUsedStore, LastUsedStore, MemoryLastUsedStore, LAST_USED_FILE_NAME};
pub use legacy::{is_legacy, normalize_legacy};
pub use listing::{
    ensure_user_dirs, list_builtin, list_theme_names, list_user, theme_path, variant_dir,
};
pub use parse::{parse, parse_str, NO_WALLPAPER};
pub use resolve::ThemeResolver;
pub use types::{ThemeData, ThemeFile, ThemeIdentifier, ThemeVariant};
