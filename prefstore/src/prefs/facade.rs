//! The shared preference facade.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::builder::PrefsBuilder;
use super::editor::Editor;
use crate::error::PrefsError;
use crate::serializer::PrefSerializer;
use crate::store::{PrefValue, StoreFile};

/// Handle for reading and writing persisted preferences.
///
/// Built once at application startup via [`Prefs::builder`], then cloned and
/// passed to whichever components need preference access. Clones share the
/// same underlying store; writes made through one handle are visible through
/// every other.
///
/// Typed getters take a default and never fail: a missing key yields the
/// default, and a key holding a value of another type logs a warning and
/// yields the default. Writes persist before returning and report I/O
/// failures.
#[derive(Clone, Debug)]
pub struct Prefs {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    entries: RwLock<BTreeMap<String, PrefValue>>,
    file: StoreFile,
    serializer: Option<Arc<dyn PrefSerializer>>,
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inner")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .field("file", &self.file)
            .field("serializer", &self.serializer.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Prefs {
    /// Start configuring a new preference store.
    pub fn builder() -> PrefsBuilder {
        PrefsBuilder::new()
    }

    pub(crate) fn open(
        name: String,
        file: StoreFile,
        serializer: Option<Arc<dyn PrefSerializer>>,
    ) -> Result<Self, PrefsError> {
        let entries = file.load()?;
        Ok(Self {
            inner: Arc::new(Inner {
                name,
                entries: RwLock::new(entries),
                file,
                serializer,
            }),
        })
    }

    /// The effective store name this facade was built with.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Location of the backing store file.
    pub fn path(&self) -> &Path {
        self.inner.file.path()
    }

    fn lookup<T>(
        &self,
        key: &str,
        default: T,
        expected: &'static str,
        extract: fn(&PrefValue) -> Option<T>,
    ) -> T {
        let entries = self.inner.entries.read();
        match entries.get(key) {
            None => default,
            Some(value) => match extract(value) {
                Some(found) => found,
                None => {
                    warn!(
                        key,
                        expected,
                        found = value.type_name(),
                        "preference type mismatch, returning default"
                    );
                    default
                }
            },
        }
    }

    /// Retrieve a stored boolean, or `default` if absent.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.lookup(key, default, "bool", |value| match value {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Retrieve a stored integer, or `default` if absent.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.lookup(key, default, "int", |value| match value {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Retrieve a stored float, or `default` if absent.
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.lookup(key, default, "float", |value| match value {
            PrefValue::Float(x) => Some(*x),
            _ => None,
        })
    }

    /// Retrieve a stored string, or `default` if absent.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.lookup(key, default.to_string(), "string", |value| match value {
            PrefValue::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    /// Retrieve a stored string set, or `default` if absent.
    pub fn get_string_set(&self, key: &str, default: BTreeSet<String>) -> BTreeSet<String> {
        self.lookup(key, default, "string_set", |value| match value {
            PrefValue::StringSet(set) => Some(set.clone()),
            _ => None,
        })
    }

    /// Retrieve the raw stored value for a key, if any.
    pub fn get_value(&self, key: &str) -> Option<PrefValue> {
        self.inner.entries.read().get(key).cloned()
    }

    /// Store a raw value under a key, replacing any previous value.
    pub fn put_value(&self, key: impl Into<String>, value: PrefValue) -> Result<(), PrefsError> {
        let mut entries = self.inner.entries.write();
        entries.insert(key.into(), value);
        self.inner.file.save(&entries)
    }

    /// Store a boolean value.
    pub fn put_bool(&self, key: impl Into<String>, value: bool) -> Result<(), PrefsError> {
        self.put_value(key, PrefValue::Bool(value))
    }

    /// Store an integer value.
    pub fn put_int(&self, key: impl Into<String>, value: i64) -> Result<(), PrefsError> {
        self.put_value(key, PrefValue::Int(value))
    }

    /// Store a float value.
    pub fn put_float(&self, key: impl Into<String>, value: f64) -> Result<(), PrefsError> {
        self.put_value(key, PrefValue::Float(value))
    }

    /// Store a string value.
    pub fn put_string(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PrefsError> {
        self.put_value(key, PrefValue::String(value.into()))
    }

    /// Store a set of strings.
    pub fn put_string_set(
        &self,
        key: impl Into<String>,
        value: BTreeSet<String>,
    ) -> Result<(), PrefsError> {
        self.put_value(key, PrefValue::StringSet(value))
    }

    /// Remove a stored value.
    ///
    /// Returns whether the key was present. The store is only persisted when
    /// something actually changed.
    pub fn remove(&self, key: &str) -> Result<bool, PrefsError> {
        let mut entries = self.inner.entries.write();
        let existed = entries.remove(key).is_some();
        if existed {
            self.inner.file.save(&entries)?;
        }
        Ok(existed)
    }

    /// Remove every stored value.
    pub fn clear(&self) -> Result<(), PrefsError> {
        let mut entries = self.inner.entries.write();
        entries.clear();
        self.inner.file.save(&entries)
    }

    /// Whether a value is stored for the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.entries.read().contains_key(key)
    }

    /// Snapshot of every stored key and value.
    pub fn all(&self) -> BTreeMap<String, PrefValue> {
        self.inner.entries.read().clone()
    }

    /// The stored keys, in order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.entries.read().keys().cloned().collect()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    /// Whether the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Persist the current contents, creating the store file if needed.
    pub fn flush(&self) -> Result<(), PrefsError> {
        let entries = self.inner.entries.read();
        self.inner.file.save(&entries)
    }

    /// Begin a batched mutation.
    ///
    /// Queued changes persist in a single save when the editor's
    /// [`apply`](Editor::apply) is called.
    pub fn edit(&self) -> Editor {
        Editor::new(self.clone())
    }

    pub(super) fn apply_batch(
        &self,
        clear_first: bool,
        ops: BTreeMap<String, Option<PrefValue>>,
    ) -> Result<(), PrefsError> {
        let mut entries = self.inner.entries.write();
        if clear_first {
            entries.clear();
        }
        for (key, op) in ops {
            match op {
                Some(value) => {
                    entries.insert(key, value);
                }
                None => {
                    entries.remove(&key);
                }
            }
        }
        self.inner.file.save(&entries)
    }

    /// Store an object through the configured serializer.
    ///
    /// The payload is held as a string value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::SerializerMissing`] when the store was built
    /// without a serializer, or an encode/persistence error.
    pub fn put_object<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), PrefsError> {
        let serializer = self.serializer()?;
        let json = serde_json::to_value(value).map_err(PrefsError::Encode)?;
        let payload = serializer.encode(&json)?;
        self.put_value(key, PrefValue::String(payload))
    }

    /// Retrieve a stored object, or `default` when absent.
    ///
    /// An undecodable payload is treated as absent: the failure is logged
    /// and `default` is returned.
    pub fn get_object<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, PrefsError> {
        Ok(self.get_object_opt(key)?.unwrap_or(default))
    }

    /// Retrieve a stored object, or `None` when absent or undecodable.
    pub fn get_object_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        let serializer = self.serializer()?;

        let payload = {
            let entries = self.inner.entries.read();
            match entries.get(key) {
                None => return Ok(None),
                Some(PrefValue::String(payload)) => payload.clone(),
                Some(other) => {
                    warn!(
                        key,
                        found = other.type_name(),
                        "stored value is not an object payload"
                    );
                    return Ok(None);
                }
            }
        };

        let json = match serializer.decode(&payload) {
            Ok(json) => json,
            Err(error) => {
                warn!(
                    key,
                    serializer = serializer.name(),
                    %error,
                    "failed to decode stored object, treating as absent"
                );
                return Ok(None);
            }
        };

        match serde_json::from_value(json) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(
                    key,
                    %error,
                    "stored object does not match requested type, treating as absent"
                );
                Ok(None)
            }
        }
    }

    fn serializer(&self) -> Result<&dyn PrefSerializer, PrefsError> {
        self.inner
            .serializer
            .as_deref()
            .ok_or(PrefsError::SerializerMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StorageContext;
    use crate::serializer::JsonSerializer;
    use serde::Deserialize;
    use std::path::Path;
    use tempfile::tempdir;

    fn open_prefs(root: &Path) -> Prefs {
        Prefs::builder()
            .with_context(StorageContext::with_root("com.example.test", root))
            .with_serializer(Arc::new(JsonSerializer::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_put_and_get_typed_values() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_bool("flag", true).unwrap();
        prefs.put_int("count", 42).unwrap();
        prefs.put_float("ratio", 0.5).unwrap();
        prefs.put_string("greeting", "hello").unwrap();

        assert!(prefs.get_bool("flag", false));
        assert_eq!(prefs.get_int("count", 0), 42);
        assert_eq!(prefs.get_float("ratio", 0.0), 0.5);
        assert_eq!(prefs.get_string("greeting", ""), "hello");
    }

    #[test]
    fn test_missing_key_returns_default() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        assert_eq!(prefs.get_int("absent", -1), -1);
        assert_eq!(prefs.get_string("absent", "fallback"), "fallback");
    }

    #[test]
    fn test_type_mismatch_returns_default() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_string("key", "not a bool").unwrap();
        assert!(prefs.get_bool("key", true));
        assert_eq!(prefs.get_int("key", 9), 9);
    }

    #[test]
    fn test_string_set_round_trip() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        let set: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        prefs.put_string_set("tags", set.clone()).unwrap();
        assert_eq!(prefs.get_string_set("tags", BTreeSet::new()), set);
    }

    #[test]
    fn test_remove_and_contains() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_int("key", 1).unwrap();
        assert!(prefs.contains("key"));

        assert!(prefs.remove("key").unwrap());
        assert!(!prefs.contains("key"));
        assert!(!prefs.remove("key").unwrap());
    }

    #[test]
    fn test_clear_empties_store() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_int("a", 1).unwrap();
        prefs.put_int("b", 2).unwrap();
        prefs.clear().unwrap();

        assert!(prefs.is_empty());
        assert_eq!(prefs.len(), 0);
    }

    #[test]
    fn test_all_and_keys_snapshot() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_int("b", 2).unwrap();
        prefs.put_int("a", 1).unwrap();

        assert_eq!(prefs.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(prefs.all().len(), 2);
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());
        let other = prefs.clone();

        prefs.put_string("shared", "yes").unwrap();
        assert_eq!(other.get_string("shared", ""), "yes");
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        visits: u32,
    }

    #[test]
    fn test_object_round_trip() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        let session = Session {
            user: "eric".to_string(),
            visits: 3,
        };
        prefs.put_object("session", &session).unwrap();

        let loaded: Option<Session> = prefs.get_object_opt("session").unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[test]
    fn test_object_default_when_absent() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        let default = Session {
            user: "nobody".to_string(),
            visits: 0,
        };
        let loaded: Session = prefs.get_object("missing", default).unwrap();
        assert_eq!(loaded.user, "nobody");
    }

    #[test]
    fn test_object_undecodable_payload_treated_as_absent() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        prefs.put_string("session", "{not json").unwrap();
        let loaded: Option<Session> = prefs.get_object_opt("session").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_object_requires_serializer() {
        let dir = tempdir().unwrap();
        let prefs = Prefs::builder()
            .with_context(StorageContext::with_root("com.example.test", dir.path()))
            .build()
            .unwrap();

        let err = prefs
            .put_object("session", &Session {
                user: "eric".to_string(),
                visits: 1,
            })
            .unwrap_err();
        assert!(matches!(err, PrefsError::SerializerMissing));
    }
}
