//! PrefStore - effortless, typed preference storage
//!
//! This library provides a small persisted key-value store for application
//! preferences: typed reads backed by defaults, write-through atomic
//! persistence, batched edits, and pluggable object serialization. A store
//! is configured once at startup through a builder and then shared as a
//! cheap-to-clone handle.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::app::{AppConfig, PrefsApp};
//!
//! // In the host's startup hook, once per process:
//! let app = PrefsApp::start(AppConfig::new("io.milkcan.effortlessprefs.sample"))?;
//!
//! let prefs = app.prefs();
//! prefs.put_string("saved_text", "hello")?;
//! let text = prefs.get_string("saved_text", "not found");
//! ```

pub mod app;
pub mod context;
pub mod logging;
pub mod prefs;
pub mod serializer;
pub mod store;

mod error;

pub use context::StorageContext;
pub use error::PrefsError;
pub use prefs::{Editor, Prefs, PrefsBuilder};
pub use serializer::{JsonSerializer, PrefSerializer, SerializerError};
pub use store::{AccessMode, PrefValue};
