//! Pluggable object serialization for preference stores.
//!
//! Scalars and string sets are first-class store values; anything richer is
//! stored through a [`PrefSerializer`], which turns a JSON value into a
//! string payload and back. The facade converts user types to and from
//! `serde_json::Value` at the boundary, so the trait stays object-safe and
//! implementations never see generic type parameters.
//!
//! The stock implementation is [`JsonSerializer`]; applications with other
//! payload conventions can supply their own.

mod json;

pub use json::JsonSerializer;

use thiserror::Error;

/// Errors produced by a serializer implementation.
#[derive(Debug, Error)]
pub enum SerializerError {
    /// The value could not be encoded into a payload.
    #[error("failed to encode object: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored payload could not be decoded.
    #[error("failed to decode object payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Converts objects to and from the string payloads held in a store.
///
/// Implementations must be `Send + Sync`; the facade is shared across
/// threads after bootstrap.
pub trait PrefSerializer: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Encode a JSON value into a stored payload.
    fn encode(&self, value: &serde_json::Value) -> Result<String, SerializerError>;

    /// Decode a stored payload back into a JSON value.
    fn decode(&self, payload: &str) -> Result<serde_json::Value, SerializerError>;
}
