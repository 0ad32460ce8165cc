//! Application bootstrap for preference storage.
//!
//! This module provides the `PrefsApp` type which performs the one-time
//! startup sequence: resolve the execution context, drive the facade
//! builder with the application's configuration, and hand the resulting
//! [`Prefs`] handle to the rest of the process.
//!
//! # Architecture
//!
//! ```text
//! host startup ──► PrefsApp::start(AppConfig)
//!                    1. StorageContext for the app id
//!                    2. PrefsBuilder: context, mode, name, default store
//!                    3. build() ──► Prefs (owned by PrefsApp)
//!                                    └── handed to consumers via prefs()
//! ```
//!
//! The facade is not installed as an implicit global: `start()` returns a
//! handle, and consumers receive clones of it explicitly. The host calls
//! `start()` once per process, before any preference access.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::app::{AppConfig, PrefsApp};
//!
//! let config = AppConfig::new("io.milkcan.effortlessprefs.sample");
//! let app = PrefsApp::start(config)?;
//!
//! let prefs = app.prefs();
//! prefs.put_string("saved_text", "hello")?;
//! ```
//!
//! [`Prefs`]: crate::prefs::Prefs

mod bootstrap;
mod config;
mod error;

pub use bootstrap::PrefsApp;
pub use config::AppConfig;
pub use error::AppError;
