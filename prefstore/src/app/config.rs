//! Application configuration for the preference bootstrap.

use std::path::PathBuf;

use crate::store::AccessMode;

/// Startup configuration consumed by [`PrefsApp::start`].
///
/// Only the application identifier is required. The defaults reproduce the
/// standard startup recipe: a private store bound to the application's
/// default namespace.
///
/// [`PrefsApp::start`]: super::PrefsApp::start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application package identifier (e.g. `io.milkcan.effortlessprefs.sample`).
    pub app_id: String,

    /// Visibility of the persisted store file.
    pub mode: AccessMode,

    /// Explicit store name; defaults to the application identifier.
    pub store_name: Option<String>,

    /// Bind to the application's default store (name suffixed with
    /// `_preferences`).
    pub use_default_store: bool,

    /// Override for the platform storage root, used by tests and hosts that
    /// manage their own data directories.
    pub storage_root: Option<PathBuf>,
}

impl AppConfig {
    /// Create a startup configuration for an application identifier.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            mode: AccessMode::Private,
            store_name: None,
            use_default_store: true,
            storage_root: None,
        }
    }

    /// Set the store file visibility.
    pub fn with_mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set an explicit store name.
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Enable or disable binding to the default store.
    pub fn with_use_default_store(mut self, use_default: bool) -> Self {
        self.use_default_store = use_default;
        self
    }

    /// Override the storage root directory.
    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = Some(root.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_startup_defaults() {
        let config = AppConfig::new("com.example.app");
        assert_eq!(config.app_id, "com.example.app");
        assert_eq!(config.mode, AccessMode::Private);
        assert!(config.store_name.is_none());
        assert!(config.use_default_store);
        assert!(config.storage_root.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = AppConfig::new("com.example.app")
            .with_mode(AccessMode::Shared)
            .with_store_name("session")
            .with_use_default_store(false)
            .with_storage_root("/data/prefs");

        assert_eq!(config.mode, AccessMode::Shared);
        assert_eq!(config.store_name.as_deref(), Some("session"));
        assert!(!config.use_default_store);
        assert_eq!(config.storage_root, Some(PathBuf::from("/data/prefs")));
    }
}
