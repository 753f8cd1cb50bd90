//! Serializer configuration validation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wampwire_core::error::ErrorCode;
use wampwire_core::protocol::value::MAX_ID;
use wampwire_json::{JsonSerializer, SerializerConfig};

#[test]
fn default_config_is_valid() {
    let config = SerializerConfig::default();
    assert_eq!(config.max_exact_integer, MAX_ID);
    config.validate().unwrap();
}

#[test]
fn zero_bound_is_rejected() {
    let config = SerializerConfig {
        max_exact_integer: 0,
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}

#[test]
fn oversized_bound_is_rejected() {
    let config = SerializerConfig {
        max_exact_integer: MAX_ID + 1,
    };
    assert_eq!(config.validate().unwrap_err().code(), ErrorCode::InvalidConfig);
}

#[test]
fn with_config_validates_up_front() {
    let err = JsonSerializer::with_config(SerializerConfig {
        max_exact_integer: 0,
    })
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidConfig);

    let serializer = JsonSerializer::with_config(SerializerConfig {
        max_exact_integer: 1000,
    })
    .unwrap();
    assert_eq!(serializer.config().max_exact_integer, 1000);
}
