//! Execution context for preference storage.
//!
//! The `StorageContext` is the library's view of the host application: it
//! answers two questions: what is the application's package identifier, and
//! where does its preference data live on disk. Every store
//! is built against a context, and the context's package identifier doubles
//! as the default store namespace.

use std::path::{Path, PathBuf};

use crate::error::PrefsError;

/// Handle to the host application's identity and storage location.
///
/// Constructed once at startup and handed to [`PrefsBuilder`] when building
/// the preference facade.
///
/// [`PrefsBuilder`]: crate::prefs::PrefsBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageContext {
    app_id: String,
    root: PathBuf,
}

impl StorageContext {
    /// Resolve the context for an application identifier.
    ///
    /// Preference data is stored under the platform's per-user configuration
    /// directory, scoped by `app_id` (e.g. `~/.config/<app_id>/` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::NoStorageDir`] when the platform does not
    /// report a configuration directory for the current user.
    pub fn for_app(app_id: impl Into<String>) -> Result<Self, PrefsError> {
        let app_id = app_id.into();
        let base = dirs::config_dir().ok_or(PrefsError::NoStorageDir)?;
        let root = base.join(&app_id);
        Ok(Self { app_id, root })
    }

    /// Create a context with an explicit storage root.
    ///
    /// Used by tests and by hosts that manage their own data directories.
    pub fn with_root(app_id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            app_id: app_id.into(),
            root: root.into(),
        }
    }

    /// The application's package identifier.
    pub fn package_name(&self) -> &str {
        &self.app_id
    }

    /// Directory under which store files are created.
    pub fn storage_dir(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_accessors() {
        let ctx = StorageContext::with_root("com.example.app", "/data/prefs");
        assert_eq!(ctx.package_name(), "com.example.app");
        assert_eq!(ctx.storage_dir(), Path::new("/data/prefs"));
    }

    #[test]
    fn test_for_app_scopes_by_app_id() {
        // Only assert when the platform exposes a config directory; CI
        // environments without HOME report none.
        if let Some(base) = dirs::config_dir() {
            let ctx = StorageContext::for_app("com.example.app").unwrap();
            assert_eq!(ctx.storage_dir(), base.join("com.example.app"));
            assert_eq!(ctx.package_name(), "com.example.app");
        }
    }

    #[test]
    fn test_contexts_with_same_inputs_are_equal() {
        let a = StorageContext::with_root("app", "/tmp/a");
        let b = StorageContext::with_root("app", "/tmp/a");
        assert_eq!(a, b);
    }
}
