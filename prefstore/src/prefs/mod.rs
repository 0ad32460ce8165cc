//! The preference facade and its builder.
//!
//! [`Prefs`] is the handle through which an application reads and writes
//! persisted preferences. It is configured once at startup via
//! [`PrefsBuilder`] and then passed to whichever components need preference
//! access; the handle is cheap to clone and safe to share across threads.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::{Prefs, StorageContext};
//!
//! let context = StorageContext::for_app("io.milkcan.effortlessprefs.sample")?;
//! let prefs = Prefs::builder()
//!     .with_context(context)
//!     .with_use_default_store(true)
//!     .build()?;
//!
//! prefs.put_string("saved_text", "hello")?;
//! let text = prefs.get_string("saved_text", "not found");
//! ```

mod builder;
mod editor;
mod facade;

pub use builder::PrefsBuilder;
pub use editor::Editor;
pub use facade::Prefs;
