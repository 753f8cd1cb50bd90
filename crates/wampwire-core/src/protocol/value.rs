//! Generic value tree: the midpoint between typed messages and wire text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Session-scoped or global identifier (session, request, publication,
/// subscription, registration). Values stay in `0..=MAX_ID` so they survive
/// a double-precision wire format without precision loss; constructing a
/// message with a larger identifier is a caller bug.
pub type Id = u64;

/// Largest identifier exactly representable by an IEEE-754 double (2^53).
pub const MAX_ID: u64 = 1 << 53;

/// Topic or procedure name. Opaque to the codec, no validation here.
pub type Uri = String;

/// Positional argument payload.
pub type List = Vec<Value>;

/// Keyword argument payload. Key order carries no meaning.
pub type Dict = HashMap<String, Value>;

/// Decoded wire value.
///
/// Numbers split into `Integer` and `Float`. A text decoder tags whole-valued
/// numerals written in float form (`32.0`, `1e3`) as `Float`; the
/// serializer's normalization pass repairs that before schema matching, so
/// conversions here can match on `Integer` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(List),
    Dict(Dict),
}

impl Value {
    /// Tag name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Integer restricted to the identifier range.
    pub fn as_id(&self) -> Option<Id> {
        match *self {
            Value::Integer(n) if (0..=MAX_ID as i64).contains(&n) => Some(n as Id),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Value {
        Value::List(l)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Value {
        Value::Dict(d)
    }
}
