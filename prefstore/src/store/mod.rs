//! Key-value persistence engine backing the preference facade.
//!
//! The store is a flat map of string keys to typed [`PrefValue`]s, persisted
//! as a single JSON document per named store. Each value carries its type
//! tag on disk, so a reopened store yields exactly the types that were
//! written.
//!
//! # Design Principles
//!
//! - **Typed values**: the facade's typed getters and setters map onto one
//!   value enum; type mismatches are detected at read time.
//! - **Write-through**: every mutation persists before returning. There is
//!   no write-behind daemon to flush or lose.
//! - **Atomic persistence**: the document is written to a sibling temporary
//!   file and renamed over the target, so a crash never leaves a partially
//!   written store.

mod file;

pub(crate) use file::StoreFile;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Visibility of the persisted store file.
///
/// Controls the permissions applied to the store file on platforms that
/// support them. Private stores are the default and are readable by the
/// owning user only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// Store file readable and writable by the owning user only.
    #[default]
    Private,

    /// Store file readable by other local users.
    ///
    /// Only appropriate for stores that intentionally expose their contents,
    /// such as state shared with sibling tools.
    Shared,
}

impl AccessMode {
    /// Unix permission bits for store files in this mode.
    #[cfg(unix)]
    pub(crate) fn file_mode(self) -> u32 {
        match self {
            AccessMode::Private => 0o600,
            AccessMode::Shared => 0o644,
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Private => f.write_str("private"),
            AccessMode::Shared => f.write_str("shared"),
        }
    }
}

/// A typed preference value.
///
/// Integers are stored as `i64` and floats as `f64`; narrower numeric types
/// widen losslessly on write. String sets are ordered so the on-disk
/// document is stable across saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringSet(BTreeSet<String>),
}

impl PrefValue {
    /// Name of the stored type, used in type-mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Float(_) => "float",
            PrefValue::String(_) => "string",
            PrefValue::StringSet(_) => "string_set",
        }
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::Bool(b) => write!(f, "{}", b),
            PrefValue::Int(i) => write!(f, "{}", i),
            PrefValue::Float(x) => write!(f, "{}", x),
            PrefValue::String(s) => f.write_str(s),
            PrefValue::StringSet(set) => {
                let mut first = true;
                for item in set {
                    if !first {
                        f.write_str(", ")?;
                    }
                    f.write_str(item)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}
