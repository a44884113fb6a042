//! Colorscheme directory enumeration.
//!
//! Layout: `<root>/colorschemes/<dark|light>/<name>.json`. Listings are
//! non-recursive and keep filesystem order.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

use super::{ThemeFile, ThemeVariant};

pub(super) const COLORSCHEMES_DIR: &str = "colorschemes";

/// `<root>/colorschemes/<variant>`.
pub fn variant_dir(root: &Path, variant: ThemeVariant) -> PathBuf {
    root.join(COLORSCHEMES_DIR).join(variant.dir_name())
}

/// `<root>/colorschemes/<variant>/<name>.json`.
pub fn theme_path(root: &Path, variant: ThemeVariant, name: &str) -> PathBuf {
    variant_dir(root, variant).join(format!("{name}.json"))
}

/// Regular files directly inside `dir`.
fn list_files(dir: &Path) -> Result<Vec<ThemeFile>, ThemeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ThemeError::DirectoryNotFound(dir.to_path_buf()),
        _ => ThemeError::Io(e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        // Follows symlinks, so a link to a theme file counts as a file.
        if path.is_file() {
            files.push(ThemeFile::new(path));
        }
    }
    Ok(files)
}

/// List the bundled themes of one variant.
pub fn list_builtin(builtin_root: &Path, variant: ThemeVariant) -> Result<Vec<ThemeFile>, ThemeError> {
    list_files(&variant_dir(builtin_root, variant))
}

/// List user themes of both variants, dark first.
pub fn list_user(user_root: &Path) -> Result<Vec<ThemeFile>, ThemeError> {
    let mut files = list_files(&variant_dir(user_root, ThemeVariant::Dark))?;
    files.extend(list_files(&variant_dir(user_root, ThemeVariant::Light))?);
    Ok(files)
}

/// Sorted theme names available for `variant` across built-in and user roots.
///
/// Missing directories contribute nothing.
pub fn list_theme_names(
    builtin_root: &Path,
    user_root: &Path,
    variant: ThemeVariant,
) -> Result<Vec<String>, ThemeError> {
    let mut names = BTreeSet::new();
    for root in [builtin_root, user_root] {
        match list_files(&variant_dir(root, variant)) {
            Ok(files) => names.extend(files.iter().map(ThemeFile::theme_name)),
            Err(ThemeError::DirectoryNotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(names.into_iter().collect())
}

/// Create the user `dark` and `light` directories when absent.
pub fn ensure_user_dirs(user_root: &Path) -> Result<(), ThemeError> {
    for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
        std::fs::create_dir_all(variant_dir(user_root, variant))?;
    }
    Ok(())
}
