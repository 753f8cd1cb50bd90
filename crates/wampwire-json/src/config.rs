//! Serializer configuration.

use wampwire_core::error::{Result, WampWireError};
use wampwire_core::protocol::value::MAX_ID;

/// Immutable serializer configuration. Built once, shared freely across
/// threads; nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Largest float magnitude the normalization pass reclassifies as an
    /// integer. Defaults to 2^53, the exact-integer limit of an IEEE-754
    /// double.
    pub max_exact_integer: u64,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_exact_integer: MAX_ID,
        }
    }
}

impl SerializerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_exact_integer == 0 {
            return Err(WampWireError::InvalidConfig(
                "max_exact_integer must be positive".into(),
            ));
        }
        if self.max_exact_integer > MAX_ID {
            return Err(WampWireError::InvalidConfig(format!(
                "max_exact_integer must not exceed {MAX_ID}"
            )));
        }
        Ok(())
    }
}
