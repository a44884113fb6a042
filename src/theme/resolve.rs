//! Theme lookup: identifier + variant -> one theme file -> parsed data.
//!
//! Lookup order for a named theme:
//! 1. `<user_root>/colorschemes/<variant>/<name>.json`
//! 2. `<name>` as a literal path
//! 3. `<builtin_root>/colorschemes/<variant>/<name>.json`
//!
//! The `random*` sentinels short-circuit this with a uniform pick from a
//! directory listing.

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::ThemeError;

use super::bundled::install_bundled;
use super::last_used::{FileLastUsedStore, LastUsedStore};
use super::listing::{ensure_user_dirs, list_builtin, list_user, theme_path};
use super::parse::parse;
use super::{ThemeData, ThemeFile, ThemeIdentifier, ThemeVariant};

/// Locates, records and parses themes for one set of settings.
#[derive(Debug)]
pub struct ThemeResolver<S> {
    settings: Settings,
    store: S,
}

impl ThemeResolver<FileLastUsedStore> {
    /// Resolver that persists the last-used record under `settings.cache_root`.
    pub fn from_settings(settings: Settings) -> Self {
        let store = FileLastUsedStore::in_cache_dir(&settings.cache_root);
        Self { settings, store }
    }
}

impl<S: LastUsedStore> ThemeResolver<S> {
    pub fn new(settings: Settings, store: S) -> Self {
        Self { settings, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve `identifier`, record the chosen file and return its parsed data.
    pub fn resolve_and_load(
        &self,
        identifier: &ThemeIdentifier,
        light: bool,
    ) -> Result<ThemeData, ThemeError> {
        self.resolve_and_load_with_rng(identifier, light, &mut rand::thread_rng())
    }

    /// Same as [`resolve_and_load`](Self::resolve_and_load) with a caller-supplied RNG.
    pub fn resolve_and_load_with_rng<R: Rng + ?Sized>(
        &self,
        identifier: &ThemeIdentifier,
        light: bool,
        rng: &mut R,
    ) -> Result<ThemeData, ThemeError> {
        ensure_user_dirs(&self.settings.user_root)?;
        install_bundled(&self.settings.builtin_root)?;
        let file = self.locate(identifier, light, rng)?;
        let file_name = file.file_name();

        info!("Set theme to {file_name}.");
        self.store.record(&file_name)?;
        parse(file.path(), &self.settings.default_alpha)
    }

    /// Pick the theme file for `identifier` without recording or parsing it.
    pub fn locate<R: Rng + ?Sized>(
        &self,
        identifier: &ThemeIdentifier,
        light: bool,
        rng: &mut R,
    ) -> Result<ThemeFile, ThemeError> {
        let variant = ThemeVariant::from_light(light);
        let builtin_root = &self.settings.builtin_root;

        let candidate = match identifier {
            // `random`/`random_dark` always sample the dark set, whatever `light` says.
            ThemeIdentifier::Random => {
                pick(list_builtin(builtin_root, ThemeVariant::Dark)?, rng, ThemeVariant::Dark)?
            }
            ThemeIdentifier::RandomLight => pick(
                list_builtin(builtin_root, ThemeVariant::Light)?,
                rng,
                ThemeVariant::Light,
            )?,
            ThemeIdentifier::RandomUser => {
                pick(list_user(&self.settings.user_root)?, rng, variant)?
            }
            ThemeIdentifier::Named(name) => self.named_candidate(name, variant),
        };

        if candidate.is_file() {
            Ok(ThemeFile::new(candidate))
        } else {
            debug!(candidate = %candidate.display(), "theme candidate missing");
            Err(ThemeError::ThemeNotFound { variant })
        }
    }

    fn named_candidate(&self, name: &str, variant: ThemeVariant) -> PathBuf {
        let user_file = theme_path(&self.settings.user_root, variant, name);
        if user_file.is_file() {
            debug!(path = %user_file.display(), "using user theme");
            return user_file;
        }

        let literal = Path::new(name);
        if literal.is_file() {
            debug!(path = %literal.display(), "using theme file path");
            return literal.to_path_buf();
        }

        theme_path(&self.settings.builtin_root, variant, name)
    }
}

/// Uniform pick; an empty listing means nothing to choose for `variant`.
fn pick<R: Rng + ?Sized>(
    files: Vec<ThemeFile>,
    rng: &mut R,
    variant: ThemeVariant,
) -> Result<PathBuf, ThemeError> {
    files
        .choose(rng)
        .map(|file| file.path().to_path_buf())
        .ok_or(ThemeError::ThemeNotFound { variant })
}
