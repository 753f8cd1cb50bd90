//! Wire text vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use wampwire_core::protocol::message::Message;
use wampwire_json::JsonSerializer;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

fn payload_lens(msg: &Message) -> Option<(usize, usize)> {
    match msg {
        Message::Error { args, kwargs, .. }
        | Message::Publish { args, kwargs, .. }
        | Message::Event { args, kwargs, .. }
        | Message::Call { args, kwargs, .. }
        | Message::Result { args, kwargs, .. }
        | Message::Invocation { args, kwargs, .. }
        | Message::Yield { args, kwargs, .. } => Some((args.len(), kwargs.len())),
        _ => None,
    }
}

#[test]
fn wire_vectors() {
    let files = [
        "hello_basic.json",
        "goodbye_shutdown.json",
        "event_payload.json",
        "event_float_code.json",
        "subscribe_exponent_id.json",
        "empty_message.json",
        "unknown_code.json",
        "string_code.json",
        "truncated_text.json",
        "scalar_envelope.json",
        "subscribe_trailing.json",
        "welcome_fractional_id.json",
    ];

    let serializer = JsonSerializer::new();

    for f in files {
        let v = load(f);
        let res = serializer.deserialize(v.wire.as_bytes());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let msg = res.expect("expected ok message");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(msg.code(), ex.code, "vector={}", v.description);
        assert_eq!(msg.name(), ex.name, "vector={}", v.description);

        if let Some(n) = ex.args_len {
            let (args, _) = payload_lens(&msg).expect("kind has no payload");
            assert_eq!(args, n, "vector={}", v.description);
        }
        if let Some(n) = ex.kwargs_len {
            let (_, kwargs) = payload_lens(&msg).expect("kind has no payload");
            assert_eq!(kwargs, n, "vector={}", v.description);
        }
    }
}
