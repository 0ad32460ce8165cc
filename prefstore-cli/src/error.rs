//! CLI error types.

use std::fmt;

use prefstore::app::AppError;
use prefstore::PrefsError;

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line input.
    Config(String),

    /// The preference bootstrap failed.
    App(AppError),

    /// A store operation failed.
    Prefs(PrefsError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::App(e) => write!(f, "{}", e),
            CliError::Prefs(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(_) => None,
            CliError::App(e) => Some(e),
            CliError::Prefs(e) => Some(e),
        }
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}

impl From<PrefsError> for CliError {
    fn from(e: PrefsError) -> Self {
        CliError::Prefs(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_is_bare_message() {
        let err = CliError::Config("unknown type 'long'".to_string());
        assert_eq!(err.to_string(), "unknown type 'long'");
    }

    #[test]
    fn test_prefs_error_conversion() {
        let err: CliError = PrefsError::MissingContext.into();
        assert!(matches!(err, CliError::Prefs(_)));
    }
}
