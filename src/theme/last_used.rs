//! Last-used theme record.
//!
//! Other tools (status bars, reload scripts) read
//! `<cache_root>/last_used_theme` to learn which theme was applied last.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ThemeError;

/// File name of the record inside the cache directory.
pub const LAST_USED_FILE_NAME: &str = "last_used_theme";

/// Storage for the name of the most recently selected theme file.
pub trait LastUsedStore: Send + Sync {
    /// Overwrite the record with `file_name` (a basename such as `nord.json`).
    fn record(&self, file_name: &str) -> Result<(), ThemeError>;

    /// Read the record back, `None` when nothing was recorded yet.
    fn load(&self) -> Result<Option<String>, ThemeError>;
}

/// In-memory record (no persistence).
#[derive(Debug, Default)]
pub struct MemoryLastUsedStore {
    name: Mutex<Option<String>>,
}

impl MemoryLastUsedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LastUsedStore for MemoryLastUsedStore {
    fn record(&self, file_name: &str) -> Result<(), ThemeError> {
        let mut guard = self.name.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(file_name.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, ThemeError> {
        let guard = self.name.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }
}

/// Record persisted as plain text under a cache directory.
#[derive(Debug, Clone)]
pub struct FileLastUsedStore {
    path: PathBuf,
}

impl FileLastUsedStore {
    /// Store writing `<cache_root>/last_used_theme`.
    pub fn in_cache_dir(cache_root: &Path) -> Self {
        Self {
            path: cache_root.join(LAST_USED_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LastUsedStore for FileLastUsedStore {
    fn record(&self, file_name: &str) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, file_name)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, ThemeError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ThemeError::Io(e)),
        }
    }
}
