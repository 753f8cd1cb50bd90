//! Binary payload convention for the text wire format.
//!
//! The text format has no binary primitive. A byte sequence is carried as a
//! string: one NUL (U+0000) followed by the standard padded base64 of the
//! raw bytes. Only schema-declared binary positions are ever decoded;
//! ordinary strings are never content-sniffed for the marker.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use wampwire_core::error::{Result, WampWireError};
use wampwire_core::protocol::value::Value;

/// Marker prefix for binary-carrying strings.
const MARKER: char = '\0';

/// Encode raw bytes into the NUL+base64 string form.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(1 + data.len().div_ceil(3) * 4);
    out.push(MARKER);
    STANDARD.encode_string(data, &mut out);
    out
}

/// Decode a NUL+base64 string back into bytes.
///
/// An empty or unmarked string is `MissingBinaryMarker`; a marked string
/// with a bad base64 body is `InvalidBase64`. Failures always propagate;
/// there is no empty-payload fallback.
pub fn decode(s: &str) -> Result<Bytes> {
    let body = s
        .strip_prefix(MARKER)
        .ok_or(WampWireError::MissingBinaryMarker)?;
    let raw = STANDARD
        .decode(body)
        .map_err(|e| WampWireError::InvalidBase64(e.to_string()))?;
    Ok(Bytes::from(raw))
}

/// Owned binary payload for `args`/`kwargs` trees.
///
/// Applications place these in payload positions their own schema declares
/// binary; on the wire they look like ordinary strings carrying the marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryData(Bytes);

impl BinaryData {
    pub fn new(data: impl Into<Bytes>) -> Self {
        BinaryData(data.into())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extract a payload from a decoded value in a binary schema position.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => decode(s).map(BinaryData),
            other => Err(WampWireError::FieldTypeMismatch {
                field: "binary payload",
                expected: "string",
                got: other.type_name(),
            }),
        }
    }
}

impl From<Vec<u8>> for BinaryData {
    fn from(data: Vec<u8>) -> Self {
        BinaryData(Bytes::from(data))
    }
}

impl From<&[u8]> for BinaryData {
    fn from(data: &[u8]) -> Self {
        BinaryData(Bytes::copy_from_slice(data))
    }
}

impl From<BinaryData> for Value {
    fn from(data: BinaryData) -> Value {
        Value::String(encode(&data.0))
    }
}

impl Serialize for BinaryData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for BinaryData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode(&s).map(BinaryData).map_err(D::Error::custom)
    }
}
