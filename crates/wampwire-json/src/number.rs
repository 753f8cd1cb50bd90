//! Numeric tag repair for decoded value trees.
//!
//! The text format has a single numeral token, so a decoder tags `32.0` and
//! `1e3` as floats even when the schema positions they fill (type codes,
//! identifiers) are integers. This pass walks the decoded tree and
//! reclassifies every whole-valued float within the exact-integer bound, so
//! list conversion can match on `Integer` directly. Magnitude never changes,
//! only the tag; non-finite floats pass through untouched.

use wampwire_core::protocol::value::Value;

use crate::config::SerializerConfig;

/// Recursively normalize numeric leaves. Runs before list conversion.
pub fn normalize(value: Value, config: &SerializerConfig) -> Value {
    match value {
        Value::Float(f) if f.fract() == 0.0 && f.abs() <= config.max_exact_integer as f64 => {
            Value::Integer(f as i64)
        }
        Value::List(items) => {
            Value::List(items.into_iter().map(|v| normalize(v, config)).collect())
        }
        Value::Dict(map) => Value::Dict(
            map.into_iter()
                .map(|(k, v)| (k, normalize(v, config)))
                .collect(),
        ),
        other => other,
    }
}
