//! # Preferences Service
//!
//! Owns the preferences in effect and writes them back to its store after
//! every change.

use tracing::{debug, warn};

use crate::error::PrefsResult;
use crate::model::{FontSize, Preferences, SavedPreferences, Theme};
use crate::store::PreferencesStore;

/// Theme and font-size state with a load/save lifecycle.
///
/// ## Usage
/// ```rust
/// use checkout_prefs::{MemoryStore, PreferencesService, Theme};
///
/// let mut prefs = PreferencesService::init(MemoryStore::default(), false);
/// assert_eq!(prefs.preferences().theme, Theme::Light);
///
/// prefs.toggle_theme().unwrap();
/// prefs.increase_font().unwrap();
/// assert_eq!(prefs.preferences().theme, Theme::Dark);
/// assert_eq!(prefs.preferences().font_size.px(), 18);
/// ```
#[derive(Debug)]
pub struct PreferencesService<S: PreferencesStore> {
    store: S,
    current: Preferences,
}

impl<S: PreferencesStore> PreferencesService<S> {
    /// Loads saved preferences from `store`.
    ///
    /// A saved theme wins over `system_prefers_dark`; an unsaved font size
    /// starts at 16px. A store that cannot be read counts as empty.
    pub fn init(store: S, system_prefers_dark: bool) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Could not load preferences, using defaults");
                SavedPreferences::default()
            }
        };

        let current = saved.resolve(system_prefers_dark);
        debug!(theme = %current.theme, font_size = %current.font_size, "Preferences initialised");

        PreferencesService { store, current }
    }

    /// Preferences currently in effect.
    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switches light/dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> PrefsResult<Theme> {
        self.current.theme = self.current.theme.toggled();
        self.persist()?;
        Ok(self.current.theme)
    }

    /// Sets an explicit theme.
    pub fn set_theme(&mut self, theme: Theme) -> PrefsResult<Theme> {
        self.current.theme = theme;
        self.persist()?;
        Ok(theme)
    }

    /// Sets the font size, clamped to 14..=20, and returns the applied size.
    pub fn set_font_size(&mut self, px: i64) -> PrefsResult<FontSize> {
        self.apply_font(FontSize::new(px))
    }

    pub fn increase_font(&mut self) -> PrefsResult<FontSize> {
        self.apply_font(self.current.font_size.increased())
    }

    pub fn decrease_font(&mut self) -> PrefsResult<FontSize> {
        self.apply_font(self.current.font_size.decreased())
    }

    fn apply_font(&mut self, size: FontSize) -> PrefsResult<FontSize> {
        self.current.font_size = size;
        self.persist()?;
        Ok(size)
    }

    fn persist(&mut self) -> PrefsResult<()> {
        self.store.save(&self.current)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrefsError;
    use crate::store::{FileStore, MemoryStore};

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl PreferencesStore for BrokenStore {
        fn load(&self) -> PrefsResult<SavedPreferences> {
            Err(PrefsError::NoConfigDir)
        }

        fn save(&mut self, _prefs: &Preferences) -> PrefsResult<()> {
            Err(PrefsError::NoConfigDir)
        }
    }

    #[test]
    fn test_init_uses_system_theme_when_nothing_saved() {
        let service = PreferencesService::init(MemoryStore::default(), true);
        assert_eq!(service.preferences().theme, Theme::Dark);
        assert_eq!(service.preferences().font_size.px(), 16);
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_init_saved_theme_wins() {
        let store = MemoryStore::with_saved(SavedPreferences {
            theme: Some(Theme::Light),
            font_size: Some(FontSize::new(20)),
        });
        let service = PreferencesService::init(store, true);
        assert_eq!(service.preferences().theme, Theme::Light);
        assert_eq!(service.preferences().font_size.px(), 20);
    }

    #[test]
    fn test_every_change_is_saved() {
        let mut service = PreferencesService::init(MemoryStore::default(), false);

        assert_eq!(service.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(service.increase_font().unwrap().px(), 18);
        assert_eq!(service.decrease_font().unwrap().px(), 16);
        assert_eq!(service.set_font_size(99).unwrap().px(), 20);
        assert_eq!(service.set_theme(Theme::Light).unwrap(), Theme::Light);

        assert_eq!(service.store().save_count(), 5);
        let saved = service.store().load().unwrap();
        assert_eq!(saved.font_size, Some(FontSize::new(20)));
        assert_eq!(saved.theme, Some(Theme::Light));
    }

    #[test]
    fn test_font_stays_in_range_when_stepping() {
        let mut service = PreferencesService::init(MemoryStore::default(), false);
        for _ in 0..10 {
            service.increase_font().unwrap();
        }
        assert_eq!(service.preferences().font_size.px(), 20);
        for _ in 0..10 {
            service.decrease_font().unwrap();
        }
        assert_eq!(service.preferences().font_size.px(), 14);
    }

    #[test]
    fn test_broken_store_falls_back_and_reports_save_errors() {
        let mut service = PreferencesService::init(BrokenStore, false);
        assert_eq!(service.preferences(), Preferences::default());

        assert!(service.toggle_theme().is_err());
        // In-memory state still changed
        assert_eq!(service.preferences().theme, Theme::Dark);
    }

    #[test]
    fn test_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut first = PreferencesService::init(FileStore::new(&path), false);
        first.toggle_theme().unwrap();
        first.set_font_size(18).unwrap();

        // System preference is ignored once a theme is saved
        let second = PreferencesService::init(FileStore::new(&path), false);
        assert_eq!(second.preferences().theme, Theme::Dark);
        assert_eq!(second.preferences().font_size.px(), 18);
    }
}
