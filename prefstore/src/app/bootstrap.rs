//! Application bootstrap implementation.
//!
//! This module contains `PrefsApp`, which performs the startup sequence for
//! preference storage: resolve the execution context, configure the facade
//! builder, and retain the built [`Prefs`] handle for the process lifetime.

use std::sync::Arc;

use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use crate::context::StorageContext;
use crate::prefs::Prefs;
use crate::serializer::JsonSerializer;

/// Preference storage bootstrapped for one application.
///
/// Created once at process startup via [`start`](PrefsApp::start); the host
/// runtime's startup hook should do nothing beyond constructing an
/// [`AppConfig`] and calling it. The facade handle lives as long as the
/// process and is handed to consumers through [`prefs`](PrefsApp::prefs);
/// there is no implicit global to reach for.
#[derive(Debug)]
pub struct PrefsApp {
    prefs: Prefs,
    config: AppConfig,
}

impl PrefsApp {
    /// Run the startup sequence and open the application's store.
    ///
    /// The sequence mirrors the standard startup recipe:
    ///
    /// 1. Resolve the execution context for the configured application
    ///    identifier.
    /// 2. Configure the facade builder: context, access mode, store name,
    ///    default-store binding, and the stock JSON object serializer.
    /// 3. Build, producing the facade handle.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform has no storage location for the
    /// application or the store file cannot be opened.
    pub fn start(config: AppConfig) -> Result<Self, AppError> {
        if config.app_id.is_empty() {
            return Err(AppError::Config(
                "application identifier must not be empty".to_string(),
            ));
        }

        info!(app_id = %config.app_id, "starting preference bootstrap");

        let context = match &config.storage_root {
            Some(root) => StorageContext::with_root(&config.app_id, root),
            None => StorageContext::for_app(&config.app_id).map_err(AppError::PrefsInit)?,
        };

        let mut builder = Prefs::builder()
            .with_context(context)
            .with_mode(config.mode)
            .with_use_default_store(config.use_default_store)
            .with_serializer(Arc::new(JsonSerializer::new()));

        if let Some(name) = &config.store_name {
            builder = builder.with_name(name);
        }

        let prefs = builder.build().map_err(AppError::PrefsInit)?;

        info!(
            app_id = %config.app_id,
            store = %prefs.name(),
            "preference bootstrap complete"
        );

        Ok(Self { prefs, config })
    }

    /// The facade handle for this application's store.
    ///
    /// Cheap to call; the returned handle shares state with every other
    /// handle cloned from this bootstrap.
    pub fn prefs(&self) -> Prefs {
        self.prefs.clone()
    }

    /// The configuration this bootstrap was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AccessMode;
    use tempfile::tempdir;

    #[test]
    fn test_start_with_defaults_binds_default_store() {
        let dir = tempdir().unwrap();
        let config = AppConfig::new("io.milkcan.effortlessprefs.sample")
            .with_storage_root(dir.path());

        let app = PrefsApp::start(config).unwrap();
        let prefs = app.prefs();

        assert_eq!(prefs.name(), "io.milkcan.effortlessprefs.sample_preferences");
        assert_eq!(app.config().mode, AccessMode::Private);
    }

    #[test]
    fn test_start_with_explicit_store_name() {
        let dir = tempdir().unwrap();
        let config = AppConfig::new("com.example.app")
            .with_storage_root(dir.path())
            .with_store_name("session")
            .with_use_default_store(false);

        let app = PrefsApp::start(config).unwrap();
        assert_eq!(app.prefs().name(), "session");
    }

    #[test]
    fn test_start_rejects_empty_app_id() {
        let err = PrefsApp::start(AppConfig::new("")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_handles_share_the_bootstrapped_store() {
        let dir = tempdir().unwrap();
        let config = AppConfig::new("com.example.app").with_storage_root(dir.path());
        let app = PrefsApp::start(config).unwrap();

        let writer = app.prefs();
        let reader = app.prefs();

        writer.put_string("saved_text", "hello").unwrap();
        assert_eq!(reader.get_string("saved_text", ""), "hello");
    }

    #[test]
    fn test_bootstrap_serializer_is_wired() {
        let dir = tempdir().unwrap();
        let config = AppConfig::new("com.example.app").with_storage_root(dir.path());
        let app = PrefsApp::start(config).unwrap();

        let prefs = app.prefs();
        prefs.put_object("point", &(1, 2)).unwrap();
        let point: Option<(i32, i32)> = prefs.get_object_opt("point").unwrap();
        assert_eq!(point, Some((1, 2)));
    }
}
