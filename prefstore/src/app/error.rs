//! Application error types.

use std::fmt;

use crate::error::PrefsError;

/// Errors that can occur during the preference bootstrap.
#[derive(Debug)]
pub enum AppError {
    /// Invalid startup configuration.
    Config(String),

    /// Failed to open the preference store.
    PrefsInit(PrefsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AppError::PrefsInit(e) => {
                write!(f, "Failed to open preference store: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(_) => None,
            AppError::PrefsInit(e) => Some(e),
        }
    }
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        AppError::PrefsInit(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("missing app id".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing app id"));
    }

    #[test]
    fn test_prefs_init_error_from_prefs_error() {
        let err: AppError = PrefsError::MissingContext.into();
        assert!(matches!(err, AppError::PrefsInit(_)));
    }
}
