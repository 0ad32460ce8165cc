//! JSON payload serializer.

use super::{PrefSerializer, SerializerError};

/// Stores objects as JSON payloads.
///
/// The default configuration produces compact payloads; [`pretty`] trades
/// size for payloads that read well when the store file is inspected
/// directly.
///
/// [`pretty`]: JsonSerializer::pretty
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Serializer producing compact payloads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializer producing human-readable payloads.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl PrefSerializer for JsonSerializer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, value: &serde_json::Value) -> Result<String, SerializerError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        payload.map_err(SerializerError::Encode)
    }

    fn decode(&self, payload: &str) -> Result<serde_json::Value, SerializerError> {
        serde_json::from_str(payload).map_err(SerializerError::Decode)
    }
}
