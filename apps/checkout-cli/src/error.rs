//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Command ── Result<Output, AppError>                                    │
//! │     │                                                                   │
//! │     ├── PrefsError ──────────────► AppError { PREFERENCES_ERROR }       │
//! │     ├── bad flag value ──────────► AppError { INVALID_ARGUMENT }        │
//! │     └── Ok(Output) ──► text or --json                                   │
//! │                                                                         │
//! │  Payment rejections are NOT errors: they are an Output with exit 1.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_prefs::PrefsError;
use serde::Serialize;
use thiserror::Error;

/// Error printed by the CLI when a command cannot run.
///
/// ## Serialization
/// With `--json` this is what goes to stdout:
/// ```json
/// {
///   "code": "INVALID_ARGUMENT",
///   "message": "Unknown theme: 'blue'. Valid options: light, dark"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct AppError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for `--json` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A flag or argument value is not usable
    InvalidArgument,

    /// Preferences could not be read or written
    PreferencesError,

    /// Output could not be produced
    Internal,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts preference errors to CLI errors.
impl From<PrefsError> for AppError {
    fn from(err: PrefsError) -> Self {
        match err {
            PrefsError::InvalidValue(msg) => AppError::invalid_argument(msg),
            PrefsError::NoConfigDir => AppError::new(
                ErrorCode::PreferencesError,
                "No config directory found; set CHECKOUT_PREFS_PATH",
            ),
            other => {
                tracing::error!(error = %other, "Preferences operation failed");
                AppError::new(ErrorCode::PreferencesError, other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let err = AppError::invalid_argument("Unknown theme: 'blue'");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_ARGUMENT");
        assert_eq!(json["message"], "Unknown theme: 'blue'");
    }

    #[test]
    fn test_from_prefs_error() {
        let err: AppError = PrefsError::NoConfigDir.into();
        assert_eq!(err.code, ErrorCode::PreferencesError);

        let err: AppError = PrefsError::InvalidValue("bad theme".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.to_string(), "[InvalidArgument] bad theme");
    }
}
