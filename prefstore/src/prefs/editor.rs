//! Batched preference mutation.

use std::collections::{BTreeMap, BTreeSet};

use super::facade::Prefs;
use crate::error::PrefsError;
use crate::store::PrefValue;

/// Accumulates preference mutations and persists them in a single save.
///
/// Obtained from [`Prefs::edit`]. Methods chain by value; nothing becomes
/// visible or durable until [`apply`](Editor::apply). When
/// [`clear`](Editor::clear) is part of the batch, existing entries are
/// cleared before any queued puts are applied, regardless of call order.
pub struct Editor {
    prefs: Prefs,
    pending: BTreeMap<String, Option<PrefValue>>,
    clear_first: bool,
}

impl Editor {
    pub(super) fn new(prefs: Prefs) -> Self {
        Self {
            prefs,
            pending: BTreeMap::new(),
            clear_first: false,
        }
    }

    /// Queue a raw value.
    pub fn put_value(mut self, key: impl Into<String>, value: PrefValue) -> Self {
        self.pending.insert(key.into(), Some(value));
        self
    }

    /// Queue a boolean value.
    pub fn put_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.put_value(key, PrefValue::Bool(value))
    }

    /// Queue an integer value.
    pub fn put_int(self, key: impl Into<String>, value: i64) -> Self {
        self.put_value(key, PrefValue::Int(value))
    }

    /// Queue a float value.
    pub fn put_float(self, key: impl Into<String>, value: f64) -> Self {
        self.put_value(key, PrefValue::Float(value))
    }

    /// Queue a string value.
    pub fn put_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_value(key, PrefValue::String(value.into()))
    }

    /// Queue a set of strings.
    pub fn put_string_set(self, key: impl Into<String>, value: BTreeSet<String>) -> Self {
        self.put_value(key, PrefValue::StringSet(value))
    }

    /// Queue removal of a key.
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.pending.insert(key.into(), None);
        self
    }

    /// Clear existing entries before applying queued puts.
    pub fn clear(mut self) -> Self {
        self.clear_first = true;
        self
    }

    /// Apply every queued mutation and persist once.
    pub fn apply(self) -> Result<(), PrefsError> {
        self.prefs.apply_batch(self.clear_first, self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StorageContext;
    use tempfile::tempdir;

    fn open_prefs(root: &std::path::Path) -> Prefs {
        Prefs::builder()
            .with_context(StorageContext::with_root("com.example.test", root))
            .build()
            .unwrap()
    }

    #[test]
    fn test_pending_changes_invisible_before_apply() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());

        let editor = prefs.edit().put_int("count", 5);
        assert!(!prefs.contains("count"));

        editor.apply().unwrap();
        assert_eq!(prefs.get_int("count", 0), 5);
    }

    #[test]
    fn test_batch_applies_puts_and_removes() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());
        prefs.put_string("old", "value").unwrap();

        prefs
            .edit()
            .put_string("greeting", "hi")
            .put_bool("ready", true)
            .remove("old")
            .apply()
            .unwrap();

        assert_eq!(prefs.get_string("greeting", ""), "hi");
        assert!(prefs.get_bool("ready", false));
        assert!(!prefs.contains("old"));
    }

    #[test]
    fn test_clear_runs_before_queued_puts() {
        let dir = tempdir().unwrap();
        let prefs = open_prefs(dir.path());
        prefs.put_int("stale", 1).unwrap();

        // clear() is called after the put, but still clears first
        prefs
            .edit()
            .put_int("fresh", 2)
            .clear()
            .apply()
            .unwrap();

        assert!(!prefs.contains("stale"));
        assert_eq!(prefs.get_int("fresh", 0), 2);
    }
}
