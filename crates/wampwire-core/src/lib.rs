//! wampwire core: serializer-agnostic protocol primitives and error types.
//!
//! This crate defines the message table, the generic value tree, and the
//! error surface shared by the serializer crates and session tooling. It
//! intentionally carries no I/O or runtime dependencies so it can back
//! multiple wire formats.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `WampWireError`/`Result` so sessions
//! do not crash on malformed peer traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, WampWireError};
