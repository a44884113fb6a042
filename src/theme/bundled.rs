//! Themes shipped inside the binary.
//!
//! The `colorschemes/` tree is embedded at build time and written out to the
//! built-in root the first time that root has no `colorschemes/` directory.

use include_dir::{include_dir, Dir};
use std::path::Path;
use tracing::info;

use crate::error::ThemeError;

use super::listing::COLORSCHEMES_DIR;

static BUNDLED_COLORSCHEMES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/colorschemes");

/// Install the bundled themes under `builtin_root` unless a
/// `colorschemes/` directory is already there.
///
/// Returns `true` when files were written. An existing tree is never touched,
/// so edits to installed themes survive.
pub fn install_bundled(builtin_root: &Path) -> Result<bool, ThemeError> {
    let target = builtin_root.join(COLORSCHEMES_DIR);
    if target.exists() {
        return Ok(false);
    }

    std::fs::create_dir_all(&target)?;
    BUNDLED_COLORSCHEMES.extract(&target)?;
    info!("Installed bundled themes to {}.", target.display());
    Ok(true)
}
