//! Builder for the preference facade.

use std::fs;
use std::sync::Arc;

use tracing::info;

use super::facade::Prefs;
use crate::context::StorageContext;
use crate::error::PrefsError;
use crate::serializer::PrefSerializer;
use crate::store::{AccessMode, StoreFile};

/// Suffix appended to the store name when the default store is requested.
pub(crate) const DEFAULT_STORE_SUFFIX: &str = "_preferences";

/// Configures and builds a [`Prefs`] facade.
///
/// This should be driven once, during application startup. The execution
/// context is the only required setting; every other field has a default.
#[derive(Default)]
pub struct PrefsBuilder {
    context: Option<StorageContext>,
    mode: AccessMode,
    name: Option<String>,
    use_default_store: bool,
    serializer: Option<Arc<dyn PrefSerializer>>,
}

impl PrefsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution context used to locate the store.
    ///
    /// Required; [`build`](Self::build) fails without it.
    pub fn with_context(mut self, context: StorageContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the visibility of the persisted store file.
    ///
    /// Defaults to [`AccessMode::Private`].
    pub fn with_mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the store name.
    ///
    /// Usually the application's package identifier, which is also the
    /// fallback when no name is given; an explicit name is useful for
    /// migrations or for keeping several stores side by side.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bind to the default store for the context.
    ///
    /// When enabled, the effective store name is the resolved name with
    /// `_preferences` appended, matching the platform-default naming
    /// convention.
    pub fn with_use_default_store(mut self, use_default: bool) -> Self {
        self.use_default_store = use_default;
        self
    }

    /// Attach an object serializer.
    ///
    /// Required only when [`Prefs::put_object`] and friends are used.
    pub fn with_serializer(mut self, serializer: Arc<dyn PrefSerializer>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Finalize the configuration and open the store.
    ///
    /// Resolves the effective store name, creates the storage directory, and
    /// loads the backing file if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::MissingContext`] when no context was set, or a
    /// storage error when the directory cannot be created or an existing
    /// store file cannot be read.
    pub fn build(self) -> Result<Prefs, PrefsError> {
        let context = self.context.ok_or(PrefsError::MissingContext)?;

        let mut name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => context.package_name().to_string(),
        };
        if self.use_default_store {
            name.push_str(DEFAULT_STORE_SUFFIX);
        }

        fs::create_dir_all(context.storage_dir())?;
        let path = context.storage_dir().join(format!("{}.json", name));
        let file = StoreFile::new(path, self.mode);
        let prefs = Prefs::open(name, file, self.serializer)?;

        info!(
            name = %prefs.name(),
            path = %prefs.path().display(),
            mode = %self.mode,
            entries = prefs.len(),
            "preference store opened"
        );

        Ok(prefs)
    }
}
