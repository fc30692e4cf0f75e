//! # Preferences Command
//!
//! Shows or changes theme and font size. Every change is written to the
//! preferences file before the command returns.

use checkout_prefs::{FileStore, Preferences, PreferencesService};
use tracing::debug;

use super::{to_json, CommandOutput};
use crate::cli::PrefsAction;
use crate::error::AppError;
use crate::state::AppConfig;

pub fn prefs(config: &AppConfig, action: &PrefsAction) -> Result<CommandOutput, AppError> {
    let store = FileStore::at_or_default(config.prefs_path.clone())?;
    debug!(path = ?store.path(), ?action, "Preferences command");

    let mut service = PreferencesService::init(store, config.system_prefers_dark);

    match action {
        PrefsAction::Show => {}
        PrefsAction::ToggleTheme => {
            service.toggle_theme()?;
        }
        PrefsAction::Theme { name } => {
            service.set_theme(name.parse()?)?;
        }
        PrefsAction::FontUp => {
            service.increase_font()?;
        }
        PrefsAction::FontDown => {
            service.decrease_font()?;
        }
        PrefsAction::Font { px } => {
            service.set_font_size(*px)?;
        }
    }

    let current = service.preferences();
    Ok(CommandOutput::new(describe(current), to_json(&current)?))
}

fn describe(prefs: Preferences) -> Vec<String> {
    vec![
        format!("Theme:     {} {}", prefs.theme, prefs.theme.toggle_icon()),
        format!("Font size: {}", prefs.font_size),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig::default().with_overrides(None, None, Some(dir.path().join("preferences.toml")))
    }

    #[test]
    fn test_show_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let output = prefs(&config, &PrefsAction::Show).unwrap();
        assert_eq!(output.lines, vec!["Theme:     light 🌙", "Font size: 16px"]);
        assert_eq!(output.json["theme"], "light");
        assert_eq!(output.json["fontSize"], 16);
        assert!(output.json.get("font_size").is_none());
        assert!(!dir.path().join("preferences.toml").exists());
    }

    #[test]
    fn test_changes_persist_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        prefs(&config, &PrefsAction::ToggleTheme).unwrap();
        prefs(&config, &PrefsAction::FontUp).unwrap();
        prefs(&config, &PrefsAction::FontUp).unwrap();
        prefs(&config, &PrefsAction::FontUp).unwrap();

        let output = prefs(&config, &PrefsAction::Show).unwrap();
        assert_eq!(output.lines, vec!["Theme:     dark ☀️", "Font size: 20px"]);

        let output = prefs(&config, &PrefsAction::Font { px: 3 }).unwrap();
        assert_eq!(output.json["fontSize"], 14);
    }

    #[test]
    fn test_unknown_theme_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let err = prefs(&config_in(&dir), &PrefsAction::Theme { name: "blue".into() }).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }
}
