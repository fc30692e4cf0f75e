//! # Preferences Error Types

use thiserror::Error;

/// Result type alias for preference operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Failures while loading or saving preferences.
///
/// None of these are fatal to the checkout: callers fall back to defaults.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// No platform config directory and no explicit path.
    #[error("No preferences path available")]
    NoConfigDir,

    /// Reading or writing the preferences file failed.
    #[error("Preferences I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The preferences file is not valid TOML for `Preferences`.
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preferences could not be encoded as TOML.
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A value supplied by the user is not understood.
    #[error("Invalid preference value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PrefsError::NoConfigDir.to_string(), "No preferences path available");
        assert_eq!(
            PrefsError::InvalidValue("theme 'blue'".into()).to_string(),
            "Invalid preference value: theme 'blue'"
        );
    }

    #[test]
    fn test_io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PrefsError = io.into();
        assert!(matches!(err, PrefsError::Io(_)));
    }
}
