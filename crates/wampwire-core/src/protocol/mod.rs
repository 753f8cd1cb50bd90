//! Protocol primitives (message table + generic value tree).
//!
//! This module hosts the serializer-agnostic midpoint of the codec:
//! - [`value`]: the closed generic value tree wire texts decode into.
//! - [`message`]: the typed message table and its list conversion.
//!
//! All conversions are panic-free: malformed input is reported as
//! `WampWireError` instead of panicking or indexing raw lists, keeping
//! sessions resilient to hostile traffic.

pub mod message;
pub mod value;
