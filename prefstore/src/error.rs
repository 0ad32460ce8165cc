//! Error types for preference storage.

use std::path::PathBuf;

use thiserror::Error;

use crate::serializer::SerializerError;

/// Errors that can occur while building or using a preference store.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// No execution context was supplied before `build()`.
    #[error("no execution context: call with_context() before building the store")]
    MissingContext,

    /// The platform reports no per-user configuration directory.
    #[error("platform reports no configuration directory for preference storage")]
    NoStorageDir,

    /// The backing store file exists but could not be parsed.
    #[error("preference store {path} is malformed: {source}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the store or a stored object.
    #[error("failed to encode preference data: {0}")]
    Encode(#[source] serde_json::Error),

    /// Object storage was requested but no serializer is configured.
    #[error("no object serializer configured: call with_serializer() before building the store")]
    SerializerMissing,

    /// The configured serializer rejected a payload.
    #[error(transparent)]
    Serializer(#[from] SerializerError),

    /// I/O error while reading or persisting the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
