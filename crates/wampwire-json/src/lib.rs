//! wampwire JSON serializer: wire text codec for the protocol message table.
//!
//! Serialize direction: `Message` → generic value list → JSON bytes.
//! Deserialize direction: bytes → value list → number normalization → typed
//! message. Binary payloads ride inside the text format as NUL-prefixed
//! base64 strings ([`binary`]).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed wire input always surfaces as `WampWireError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod binary;
pub mod config;
pub mod number;
pub mod serializer;

pub use config::SerializerConfig;
pub use serializer::JsonSerializer;
