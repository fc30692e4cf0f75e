//! # Preference Stores
//!
//! Where preferences live between runs.
//!
//! ## Store Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PreferencesStore (trait)                                               │
//! │   ├── FileStore   - preferences.toml in the platform config dir         │
//! │   │                 ~/.config/checkout/preferences.toml (Linux)         │
//! │   │                 ~/Library/Application Support/dev.devpilot.checkout │
//! │   │                 (macOS)                                             │
//! │   └── MemoryStore - process-local, for tests and ephemeral sessions     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{PrefsError, PrefsResult};
use crate::model::{Preferences, SavedPreferences};

/// File name inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Persistence seam for [`crate::PreferencesService`].
pub trait PreferencesStore {
    /// Returns what was saved; all fields `None` when nothing was.
    fn load(&self) -> PrefsResult<SavedPreferences>;

    /// Persists the full preferences.
    fn save(&mut self, prefs: &Preferences) -> PrefsResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// TOML file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Store in the platform config directory.
    pub fn in_config_dir() -> PrefsResult<Self> {
        Self::default_path()
            .map(Self::new)
            .ok_or(PrefsError::NoConfigDir)
    }

    /// `path` when given, otherwise the platform config directory.
    pub fn at_or_default(path: Option<PathBuf>) -> PrefsResult<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::in_config_dir(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the default preferences file path.
    fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "devpilot", "checkout")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }
}

impl PreferencesStore for FileStore {
    fn load(&self) -> PrefsResult<SavedPreferences> {
        if !self.path.exists() {
            debug!(path = ?self.path, "Preferences file not found, nothing saved yet");
            return Ok(SavedPreferences::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let saved: SavedPreferences = toml::from_str(&contents)?;
        debug!(path = ?self.path, ?saved, "Preferences loaded");
        Ok(saved)
    }

    fn save(&mut self, prefs: &Preferences) -> PrefsResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(&SavedPreferences::from(*prefs))?;
        std::fs::write(&self.path, contents)?;

        info!(path = ?self.path, theme = %prefs.theme, font_size = %prefs.font_size, "Preferences saved");
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: SavedPreferences,
    saves: usize,
}

impl MemoryStore {
    /// Store that starts out holding `saved`.
    pub fn with_saved(saved: SavedPreferences) -> Self {
        MemoryStore { saved, saves: 0 }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PreferencesStore for MemoryStore {
    fn load(&self) -> PrefsResult<SavedPreferences> {
        Ok(self.saved)
    }

    fn save(&mut self, prefs: &Preferences) -> PrefsResult<()> {
        self.saved = SavedPreferences::from(*prefs);
        self.saves += 1;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontSize, Theme};

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("none.toml"));
        assert_eq!(store.load().unwrap(), SavedPreferences::default());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let mut store = FileStore::new(&path);

        let prefs = Preferences {
            theme: Theme::Dark,
            font_size: FontSize::new(18),
        };
        store.save(&prefs).unwrap();
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load().unwrap().resolve(false), prefs);
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "theme = [not toml").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PrefsError::Parse(_)));
    }

    #[test]
    fn test_at_or_default_prefers_explicit_path() {
        let store = FileStore::at_or_default(Some(PathBuf::from("/tmp/prefs.toml"))).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/prefs.toml"));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&Preferences::default()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().theme, Some(Theme::Light));
    }
}
