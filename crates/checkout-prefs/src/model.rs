//! # Preference Types
//!
//! ## File Format
//! ```toml
//! # preferences.toml
//! theme = "dark"      # light | dark
//! font_size = 18      # clamped to 14..=20
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrefsError;

// =============================================================================
// Theme
// =============================================================================

/// Color theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme to start with when nothing is saved.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: offers the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PrefsError::InvalidValue(format!(
                "Unknown theme: '{}'. Valid options: light, dark",
                other
            ))),
        }
    }
}

// =============================================================================
// Font Size
// =============================================================================

/// Base font size in pixels, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
///
/// Out-of-range values (from the user or a hand-edited file) are clamped,
/// never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: u8 = 14;
    pub const MAX: u8 = 20;
    pub const DEFAULT: u8 = 16;

    /// Pixels added or removed by one increase/decrease step.
    pub const STEP: i64 = 2;

    /// Clamps `px` into the allowed range.
    pub fn new(px: i64) -> Self {
        FontSize(px.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[inline]
    pub fn px(self) -> u8 {
        self.0
    }

    /// One step larger, clamped.
    pub fn increased(self) -> Self {
        Self::new(i64::from(self.0) + Self::STEP)
    }

    /// One step smaller, clamped.
    pub fn decreased(self) -> Self {
        Self::new(i64::from(self.0) - Self::STEP)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize(Self::DEFAULT)
    }
}

impl From<i64> for FontSize {
    fn from(px: i64) -> Self {
        FontSize::new(px)
    }
}

impl From<FontSize> for i64 {
    fn from(size: FontSize) -> Self {
        i64::from(size.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Resolved preferences currently in effect.
///
/// Serializes camelCase for front ends; the file format is
/// [`SavedPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: FontSize,
}

/// What a store had saved. Either field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedPreferences {
    #[serde(default)]
    pub theme: Option<Theme>,

    #[serde(default)]
    pub font_size: Option<FontSize>,
}

impl SavedPreferences {
    /// Fills gaps: saved theme wins over the system theme; font defaults to 16px.
    pub fn resolve(self, system_prefers_dark: bool) -> Preferences {
        Preferences {
            theme: self
                .theme
                .unwrap_or_else(|| Theme::from_system(system_prefers_dark)),
            font_size: self.font_size.unwrap_or_default(),
        }
    }
}

impl From<Preferences> for SavedPreferences {
    fn from(prefs: Preferences) -> Self {
        SavedPreferences {
            theme: Some(prefs.theme),
            font_size: Some(prefs.font_size),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }

    #[test]
    fn test_font_size_clamps() {
        assert_eq!(FontSize::new(10).px(), 14);
        assert_eq!(FontSize::new(30).px(), 20);
        assert_eq!(FontSize::new(-5).px(), 14);
        assert_eq!(FontSize::new(17).px(), 17);
        assert_eq!(FontSize::default().px(), 16);
    }

    #[test]
    fn test_font_size_steps() {
        assert_eq!(FontSize::default().increased().px(), 18);
        assert_eq!(FontSize::new(19).increased().px(), 20);
        assert_eq!(FontSize::new(15).decreased().px(), 14);
        assert_eq!(FontSize::new(14).decreased().px(), 14);
    }

    #[test]
    fn test_resolve_prefers_saved_theme() {
        let saved = SavedPreferences {
            theme: Some(Theme::Light),
            font_size: None,
        };
        let prefs = saved.resolve(true);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font_size.px(), 16);

        let prefs = SavedPreferences::default().resolve(true);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_toml_round_trip_and_clamp() {
        let prefs = Preferences {
            theme: Theme::Dark,
            font_size: FontSize::new(18),
        };
        let text = toml::to_string_pretty(&SavedPreferences::from(prefs)).unwrap();
        assert!(text.contains("theme = \"dark\""));
        assert!(text.contains("font_size = 18"));

        let saved: SavedPreferences = toml::from_str("font_size = 40").unwrap();
        assert_eq!(saved.font_size, Some(FontSize::new(20)));
        assert_eq!(saved.theme, None);
    }
}
