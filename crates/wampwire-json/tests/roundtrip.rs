//! Byte-level round trips for every message kind.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wampwire_core::protocol::message::Message;
use wampwire_core::protocol::value::{Dict, Value};
use wampwire_json::JsonSerializer;

fn dict(pairs: Vec<(&str, Value)>) -> Dict {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}

fn samples() -> Vec<Message> {
    vec![
        Message::Hello {
            realm: "moonbase".into(),
            details: dict(vec![("agent", Value::String("wampwire".into()))]),
        },
        Message::Welcome {
            session: 228_557_214,
            details: Dict::new(),
        },
        Message::Abort {
            details: Dict::new(),
            reason: "wamp.error.no_such_realm".into(),
        },
        Message::Challenge {
            auth_method: "wampcra".into(),
            extra: dict(vec![("challenge", Value::String("nonce-17".into()))]),
        },
        Message::Authenticate {
            signature: "b64sig".into(),
            extra: Dict::new(),
        },
        Message::Goodbye {
            details: Dict::new(),
            reason: "wamp.close.goodbye_and_out".into(),
        },
        Message::Error {
            request_type: 68,
            request: 6_131_533,
            details: Dict::new(),
            error: "wamp.error.canceled".into(),
            args: vec![],
            kwargs: Dict::new(),
        },
        Message::Publish {
            request: 239_714_735,
            options: dict(vec![("acknowledge", Value::Bool(true))]),
            topic: "sensor.temperature".into(),
            args: vec![Value::Float(21.5)],
            kwargs: Dict::new(),
        },
        Message::Published {
            request: 239_714_735,
            publication: 3_752_347_354,
        },
        Message::Subscribe {
            request: 92_713_545,
            options: Dict::new(),
            topic: "sensor.temperature".into(),
        },
        Message::Subscribed {
            request: 92_713_545,
            subscription: 712_357_835,
        },
        Message::Unsubscribe {
            request: 93_275_872,
            subscription: 712_357_835,
        },
        Message::Unsubscribed {
            request: 93_275_872,
        },
        Message::Event {
            subscription: 712_357_835,
            publication: 3_752_347_354,
            details: Dict::new(),
            args: vec![
                Value::String("reading".into()),
                Value::Float(21.5),
                Value::Null,
            ],
            kwargs: dict(vec![("unit", Value::String("celsius".into()))]),
        },
        Message::Call {
            request: 771_344,
            options: Dict::new(),
            procedure: "com.timeservice.now".into(),
            args: vec![],
            kwargs: Dict::new(),
        },
        Message::Cancel {
            request: 771_344,
            options: dict(vec![("mode", Value::String("skip".into()))]),
        },
        Message::Result {
            request: 771_344,
            details: Dict::new(),
            args: vec![Value::String("2025-11-03T15:30:00Z".into())],
            kwargs: Dict::new(),
        },
        Message::Register {
            request: 611_844,
            options: Dict::new(),
            procedure: "com.timeservice.now".into(),
        },
        Message::Registered {
            request: 611_844,
            registration: 405_874_433,
        },
        Message::Unregister {
            request: 611_900,
            registration: 405_874_433,
        },
        Message::Unregistered {
            request: 611_900,
        },
        Message::Invocation {
            request: 35_224,
            registration: 405_874_433,
            details: Dict::new(),
            args: vec![],
            kwargs: Dict::new(),
        },
        Message::Interrupt {
            request: 35_224,
            options: Dict::new(),
        },
        Message::Yield {
            request: 35_224,
            options: Dict::new(),
            args: vec![Value::String("2025-11-03T15:30:00Z".into())],
            kwargs: Dict::new(),
        },
    ]
}

#[test]
fn every_kind_round_trips_through_bytes() {
    let serializer = JsonSerializer::new();
    for msg in samples() {
        let bytes = serializer.serialize(&msg).expect(msg.name());
        let back = serializer.deserialize(&bytes).expect(msg.name());
        assert_eq!(back, msg, "kind={}", msg.name());
    }
}

#[test]
fn wire_shape_omits_empty_payload_pair() {
    let serializer = JsonSerializer::new();
    let msg = Message::Event {
        subscription: 1,
        publication: 2,
        details: Dict::new(),
        args: vec![],
        kwargs: Dict::new(),
    };
    let bytes = serializer.serialize(&msg).unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 4);
}

#[test]
fn wire_shape_keeps_args_slot_for_lone_kwargs() {
    let serializer = JsonSerializer::new();
    let msg = Message::Event {
        subscription: 1,
        publication: 2,
        details: Dict::new(),
        args: vec![],
        kwargs: dict(vec![("k", Value::Integer(1))]),
    };
    let bytes = serializer.serialize(&msg).unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let arr = raw.as_array().unwrap();
    assert_eq!(arr.len(), 6);
    assert_eq!(arr[4], serde_json::json!([]));
}

#[test]
fn whole_valued_float_args_come_back_as_integers() {
    // The normalization pass applies to payload trees too: a float that a
    // peer sends as `2.0` is indistinguishable from `2` after decode.
    let serializer = JsonSerializer::new();
    let msg = Message::Publish {
        request: 1,
        options: Dict::new(),
        topic: "t".into(),
        args: vec![Value::Float(2.0), Value::Float(3.5)],
        kwargs: Dict::new(),
    };
    let bytes = serializer.serialize(&msg).unwrap();
    let back = serializer.deserialize(&bytes).unwrap();
    match back {
        Message::Publish { args, .. } => {
            assert_eq!(args, vec![Value::Integer(2), Value::Float(3.5)]);
        }
        other => panic!("unexpected kind {}", other.name()),
    }
}

#[test]
fn serialized_text_is_the_expected_literal() {
    let serializer = JsonSerializer::new();
    let msg = Message::Subscribe {
        request: 713_845_233,
        options: Dict::new(),
        topic: "example.hello".into(),
    };
    let bytes = serializer.serialize(&msg).unwrap();
    assert_eq!(bytes, br#"[32,713845233,{},"example.hello"]"#.to_vec());
}
