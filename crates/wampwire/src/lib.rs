//! Top-level facade crate for wampwire.
//!
//! Re-exports the protocol primitives and the JSON serializer so users can depend on a single crate.

pub mod core {
    pub use wampwire_core::*;
}

pub mod json {
    pub use wampwire_json::*;
}
