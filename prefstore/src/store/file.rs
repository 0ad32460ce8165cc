//! Atomic file persistence for preference stores.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{AccessMode, PrefValue};
use crate::error::PrefsError;

/// Owns the on-disk location and access mode of one named store.
///
/// The store document is a JSON object mapping keys to tagged values. Saves
/// go through a sibling temporary file and a rename, so readers never
/// observe a partially written document.
#[derive(Debug)]
pub(crate) struct StoreFile {
    path: PathBuf,
    mode: AccessMode,
}

impl StoreFile {
    pub(crate) fn new(path: PathBuf, mode: AccessMode) -> Self {
        Self { path, mode }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store document.
    ///
    /// A missing file is an empty store. A present but unparseable file is
    /// an error; silently discarding user data is worse than failing the
    /// open.
    pub(crate) fn load(&self) -> Result<BTreeMap<String, PrefValue>, PrefsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let entries =
            serde_json::from_str(&raw).map_err(|source| PrefsError::MalformedStore {
                path: self.path.clone(),
                source,
            })?;

        Ok(entries)
    }

    /// Persist the store document atomically.
    pub(crate) fn save(&self, entries: &BTreeMap<String, PrefValue>) -> Result<(), PrefsError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let document = serde_json::to_string_pretty(entries).map_err(PrefsError::Encode)?;
        let tmp = self.path.with_extension("json.tmp");

        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(document.as_bytes())?;
            file.sync_all()?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(self.mode.file_mode()))?;
        }

        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "preference store persisted"
        );

        Ok(())
    }
}
