//! JSON serializer: the composition root of the codec.

use tracing::debug;

use wampwire_core::error::{Result, WampWireError};
use wampwire_core::protocol::message::Message;
use wampwire_core::protocol::value::List;

use crate::config::SerializerConfig;
use crate::number;

/// Serializer for the JSON text wire format.
///
/// Holds no state between calls apart from its immutable
/// [`SerializerConfig`]; safe to clone or share across threads and use
/// concurrently on independent inputs.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    config: SerializerConfig,
}

impl JsonSerializer {
    /// Serializer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializer with an explicit configuration. Rejects invalid configs up
    /// front so the per-message paths never re-check.
    pub fn with_config(config: SerializerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Encode a message into wire bytes.
    ///
    /// Cannot fail for messages holding in-range identifiers; the `Encode`
    /// variant covers the residual serde_json failure surface.
    pub fn serialize(&self, msg: &Message) -> Result<Vec<u8>> {
        let list = msg.to_list();
        serde_json::to_vec(&list).map_err(|e| WampWireError::Encode(e.to_string()))
    }

    /// Decode wire bytes into a message.
    ///
    /// Malformed JSON and envelopes that are not a list surface as
    /// `TextDecode`; everything past that maps to the list-conversion error
    /// taxonomy. The normalization pass runs first so integer schema
    /// positions accept numerals written in float form.
    pub fn deserialize(&self, data: &[u8]) -> Result<Message> {
        let list: List = serde_json::from_slice(data).map_err(|e| {
            debug!(error = %e, len = data.len(), "wire text decode failed");
            WampWireError::TextDecode(e.to_string())
        })?;
        let list: List = list
            .into_iter()
            .map(|v| number::normalize(v, &self.config))
            .collect();
        Message::from_list(list)
    }
}
