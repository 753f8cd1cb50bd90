//! Protocol message table and list conversion.
//!
//! Every message travels on the wire as a list whose first element is the
//! integer type code, followed by that kind's fields in a fixed order. The
//! [`MessageKind`] registry is the single place the code assignments and
//! field counts live; [`Message::to_list`] / [`Message::from_list`] convert
//! between the typed form and the generic list.
//!
//! Parsing rules:
//! - Never index into the list; fields are read through a cursor.
//! - Never `unwrap()` / `expect()` / `panic!()`; every malformed input is
//!   reported as `WampWireError`.

use tracing::trace;

use crate::error::{Result, WampWireError};
use crate::protocol::value::{Dict, Id, List, Uri, Value};

/// Message type codes, one per protocol message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Hello = 1,
    Welcome = 2,
    Abort = 3,
    Challenge = 4,
    Authenticate = 5,
    Goodbye = 6,
    Error = 8,
    Publish = 16,
    Published = 17,
    Subscribe = 32,
    Subscribed = 33,
    Unsubscribe = 34,
    Unsubscribed = 35,
    Event = 36,
    Call = 48,
    Cancel = 49,
    Result = 50,
    Register = 64,
    Registered = 65,
    Unregister = 66,
    Unregistered = 67,
    Invocation = 68,
    Interrupt = 69,
    Yield = 70,
}

impl MessageKind {
    /// Registry lookup: code → kind. Unassigned codes return `None`.
    pub fn from_code(code: u64) -> Option<MessageKind> {
        Some(match code {
            1 => MessageKind::Hello,
            2 => MessageKind::Welcome,
            3 => MessageKind::Abort,
            4 => MessageKind::Challenge,
            5 => MessageKind::Authenticate,
            6 => MessageKind::Goodbye,
            8 => MessageKind::Error,
            16 => MessageKind::Publish,
            17 => MessageKind::Published,
            32 => MessageKind::Subscribe,
            33 => MessageKind::Subscribed,
            34 => MessageKind::Unsubscribe,
            35 => MessageKind::Unsubscribed,
            36 => MessageKind::Event,
            48 => MessageKind::Call,
            49 => MessageKind::Cancel,
            50 => MessageKind::Result,
            64 => MessageKind::Register,
            65 => MessageKind::Registered,
            66 => MessageKind::Unregister,
            67 => MessageKind::Unregistered,
            68 => MessageKind::Invocation,
            69 => MessageKind::Interrupt,
            70 => MessageKind::Yield,
            _ => return None,
        })
    }

    /// Wire type code.
    pub fn code(self) -> u64 {
        self as u64
    }

    /// Wire name, for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::Hello => "HELLO",
            MessageKind::Welcome => "WELCOME",
            MessageKind::Abort => "ABORT",
            MessageKind::Challenge => "CHALLENGE",
            MessageKind::Authenticate => "AUTHENTICATE",
            MessageKind::Goodbye => "GOODBYE",
            MessageKind::Error => "ERROR",
            MessageKind::Publish => "PUBLISH",
            MessageKind::Published => "PUBLISHED",
            MessageKind::Subscribe => "SUBSCRIBE",
            MessageKind::Subscribed => "SUBSCRIBED",
            MessageKind::Unsubscribe => "UNSUBSCRIBE",
            MessageKind::Unsubscribed => "UNSUBSCRIBED",
            MessageKind::Event => "EVENT",
            MessageKind::Call => "CALL",
            MessageKind::Cancel => "CANCEL",
            MessageKind::Result => "RESULT",
            MessageKind::Register => "REGISTER",
            MessageKind::Registered => "REGISTERED",
            MessageKind::Unregister => "UNREGISTER",
            MessageKind::Unregistered => "UNREGISTERED",
            MessageKind::Invocation => "INVOCATION",
            MessageKind::Interrupt => "INTERRUPT",
            MessageKind::Yield => "YIELD",
        }
    }

    /// Field count bounds (min required, max allowed), excluding the code
    /// element. Kinds that carry a payload allow the trailing `args`/`kwargs`
    /// pair to be absent.
    pub fn arity(self) -> (usize, usize) {
        match self {
            MessageKind::Hello => (2, 2),
            MessageKind::Welcome => (2, 2),
            MessageKind::Abort => (2, 2),
            MessageKind::Challenge => (2, 2),
            MessageKind::Authenticate => (2, 2),
            MessageKind::Goodbye => (2, 2),
            MessageKind::Error => (4, 6),
            MessageKind::Publish => (3, 5),
            MessageKind::Published => (2, 2),
            MessageKind::Subscribe => (3, 3),
            MessageKind::Subscribed => (2, 2),
            MessageKind::Unsubscribe => (2, 2),
            MessageKind::Unsubscribed => (1, 1),
            MessageKind::Event => (3, 5),
            MessageKind::Call => (3, 5),
            MessageKind::Cancel => (2, 2),
            MessageKind::Result => (2, 4),
            MessageKind::Register => (3, 3),
            MessageKind::Registered => (2, 2),
            MessageKind::Unregister => (2, 2),
            MessageKind::Unregistered => (1, 1),
            MessageKind::Invocation => (3, 5),
            MessageKind::Interrupt => (2, 2),
            MessageKind::Yield => (2, 4),
        }
    }
}

/// A protocol message. Fields appear in wire order.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Session opening request: `[1, realm, details]`.
    Hello { realm: Uri, details: Dict },
    /// Session accepted: `[2, session, details]`.
    Welcome { session: Id, details: Dict },
    /// Session opening refused: `[3, details, reason]`.
    Abort { details: Dict, reason: Uri },
    /// Authentication challenge: `[4, auth_method, extra]`.
    Challenge { auth_method: String, extra: Dict },
    /// Challenge response: `[5, signature, extra]`.
    Authenticate { signature: String, extra: Dict },
    /// Session close handshake: `[6, details, reason]`.
    Goodbye { details: Dict, reason: Uri },
    /// Failure reply to any request:
    /// `[8, request_type, request, details, error, args?, kwargs?]`.
    /// `request_type` is the code of the request being answered.
    Error {
        request_type: u64,
        request: Id,
        details: Dict,
        error: Uri,
        args: List,
        kwargs: Dict,
    },
    /// `[16, request, options, topic, args?, kwargs?]`
    Publish {
        request: Id,
        options: Dict,
        topic: Uri,
        args: List,
        kwargs: Dict,
    },
    /// `[17, request, publication]`
    Published { request: Id, publication: Id },
    /// `[32, request, options, topic]`
    Subscribe {
        request: Id,
        options: Dict,
        topic: Uri,
    },
    /// `[33, request, subscription]`
    Subscribed { request: Id, subscription: Id },
    /// `[34, request, subscription]`
    Unsubscribe { request: Id, subscription: Id },
    /// `[35, request]`
    Unsubscribed { request: Id },
    /// An event delivered to a subscriber:
    /// `[36, subscription, publication, details, args?, kwargs?]`.
    /// The payload pair nests arbitrary value trees.
    Event {
        subscription: Id,
        publication: Id,
        details: Dict,
        args: List,
        kwargs: Dict,
    },
    /// `[48, request, options, procedure, args?, kwargs?]`
    Call {
        request: Id,
        options: Dict,
        procedure: Uri,
        args: List,
        kwargs: Dict,
    },
    /// `[49, request, options]`
    Cancel { request: Id, options: Dict },
    /// `[50, request, details, args?, kwargs?]`
    Result {
        request: Id,
        details: Dict,
        args: List,
        kwargs: Dict,
    },
    /// `[64, request, options, procedure]`
    Register {
        request: Id,
        options: Dict,
        procedure: Uri,
    },
    /// `[65, request, registration]`
    Registered { request: Id, registration: Id },
    /// `[66, request, registration]`
    Unregister { request: Id, registration: Id },
    /// `[67, request]`
    Unregistered { request: Id },
    /// `[68, request, registration, details, args?, kwargs?]`
    Invocation {
        request: Id,
        registration: Id,
        details: Dict,
        args: List,
        kwargs: Dict,
    },
    /// `[69, request, options]`
    Interrupt { request: Id, options: Dict },
    /// `[70, request, options, args?, kwargs?]`
    Yield {
        request: Id,
        options: Dict,
        args: List,
        kwargs: Dict,
    },
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Hello { .. } => MessageKind::Hello,
            Message::Welcome { .. } => MessageKind::Welcome,
            Message::Abort { .. } => MessageKind::Abort,
            Message::Challenge { .. } => MessageKind::Challenge,
            Message::Authenticate { .. } => MessageKind::Authenticate,
            Message::Goodbye { .. } => MessageKind::Goodbye,
            Message::Error { .. } => MessageKind::Error,
            Message::Publish { .. } => MessageKind::Publish,
            Message::Published { .. } => MessageKind::Published,
            Message::Subscribe { .. } => MessageKind::Subscribe,
            Message::Subscribed { .. } => MessageKind::Subscribed,
            Message::Unsubscribe { .. } => MessageKind::Unsubscribe,
            Message::Unsubscribed { .. } => MessageKind::Unsubscribed,
            Message::Event { .. } => MessageKind::Event,
            Message::Call { .. } => MessageKind::Call,
            Message::Cancel { .. } => MessageKind::Cancel,
            Message::Result { .. } => MessageKind::Result,
            Message::Register { .. } => MessageKind::Register,
            Message::Registered { .. } => MessageKind::Registered,
            Message::Unregister { .. } => MessageKind::Unregister,
            Message::Unregistered { .. } => MessageKind::Unregistered,
            Message::Invocation { .. } => MessageKind::Invocation,
            Message::Interrupt { .. } => MessageKind::Interrupt,
            Message::Yield { .. } => MessageKind::Yield,
        }
    }

    /// Wire type code.
    pub fn code(&self) -> u64 {
        self.kind().code()
    }

    /// Wire name, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Flatten into the wire list: `[code, field...]` in schema order.
    ///
    /// The trailing payload pair is omitted when both halves are empty, and
    /// `args` is kept alone when only `kwargs` is empty, so payloads
    /// round-trip without phantom empty containers.
    pub fn to_list(&self) -> List {
        let mut list = vec![Value::Integer(self.code() as i64)];
        match self {
            Message::Hello { realm, details } => {
                list.push(Value::String(realm.clone()));
                list.push(Value::Dict(details.clone()));
            }
            Message::Welcome { session, details } => {
                list.push(id_value(*session));
                list.push(Value::Dict(details.clone()));
            }
            Message::Abort { details, reason } => {
                list.push(Value::Dict(details.clone()));
                list.push(Value::String(reason.clone()));
            }
            Message::Challenge { auth_method, extra } => {
                list.push(Value::String(auth_method.clone()));
                list.push(Value::Dict(extra.clone()));
            }
            Message::Authenticate { signature, extra } => {
                list.push(Value::String(signature.clone()));
                list.push(Value::Dict(extra.clone()));
            }
            Message::Goodbye { details, reason } => {
                list.push(Value::Dict(details.clone()));
                list.push(Value::String(reason.clone()));
            }
            Message::Error {
                request_type,
                request,
                details,
                error,
                args,
                kwargs,
            } => {
                list.push(Value::Integer(*request_type as i64));
                list.push(id_value(*request));
                list.push(Value::Dict(details.clone()));
                list.push(Value::String(error.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Publish {
                request,
                options,
                topic,
                args,
                kwargs,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
                list.push(Value::String(topic.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Published {
                request,
                publication,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*publication));
            }
            Message::Subscribe {
                request,
                options,
                topic,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
                list.push(Value::String(topic.clone()));
            }
            Message::Subscribed {
                request,
                subscription,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*subscription));
            }
            Message::Unsubscribe {
                request,
                subscription,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*subscription));
            }
            Message::Unsubscribed { request } => {
                list.push(id_value(*request));
            }
            Message::Event {
                subscription,
                publication,
                details,
                args,
                kwargs,
            } => {
                list.push(id_value(*subscription));
                list.push(id_value(*publication));
                list.push(Value::Dict(details.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Call {
                request,
                options,
                procedure,
                args,
                kwargs,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
                list.push(Value::String(procedure.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Cancel { request, options } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
            }
            Message::Result {
                request,
                details,
                args,
                kwargs,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(details.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Register {
                request,
                options,
                procedure,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
                list.push(Value::String(procedure.clone()));
            }
            Message::Registered {
                request,
                registration,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*registration));
            }
            Message::Unregister {
                request,
                registration,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*registration));
            }
            Message::Unregistered { request } => {
                list.push(id_value(*request));
            }
            Message::Invocation {
                request,
                registration,
                details,
                args,
                kwargs,
            } => {
                list.push(id_value(*request));
                list.push(id_value(*registration));
                list.push(Value::Dict(details.clone()));
                push_payload(&mut list, args, kwargs);
            }
            Message::Interrupt { request, options } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
            }
            Message::Yield {
                request,
                options,
                args,
                kwargs,
            } => {
                list.push(id_value(*request));
                list.push(Value::Dict(options.clone()));
                push_payload(&mut list, args, kwargs);
            }
        }
        list
    }

    /// Rebuild a typed message from the wire list.
    ///
    /// The leading element must be a known non-negative integer code, the
    /// remaining element count must fall inside the kind's arity bounds, and
    /// every field must coerce to its schema type. Each violation maps to a
    /// distinct [`WampWireError`] variant; extra trailing elements are an
    /// arity error, never ignored.
    pub fn from_list(list: List) -> Result<Message> {
        let mut fields = list.into_iter();
        let code = match fields.next() {
            None => return Err(WampWireError::EmptyMessage),
            Some(Value::Integer(n)) if n >= 0 => n as u64,
            Some(other) => return Err(WampWireError::InvalidTypeCode(other.type_name())),
        };
        let kind = MessageKind::from_code(code).ok_or(WampWireError::UnsupportedTypeCode(code))?;

        let (min, max) = kind.arity();
        let got = fields.len();
        if got < min || got > max {
            return Err(WampWireError::ArityMismatch {
                kind: kind.name(),
                min,
                max,
                got,
            });
        }

        trace!(code, kind = kind.name(), fields = got, "decoding message list");

        let mut f = Cursor(fields);
        let msg = match kind {
            MessageKind::Hello => Message::Hello {
                realm: f.uri("realm")?,
                details: f.dict("details")?,
            },
            MessageKind::Welcome => Message::Welcome {
                session: f.id("session")?,
                details: f.dict("details")?,
            },
            MessageKind::Abort => Message::Abort {
                details: f.dict("details")?,
                reason: f.uri("reason")?,
            },
            MessageKind::Challenge => Message::Challenge {
                auth_method: f.text("auth_method")?,
                extra: f.dict("extra")?,
            },
            MessageKind::Authenticate => Message::Authenticate {
                signature: f.text("signature")?,
                extra: f.dict("extra")?,
            },
            MessageKind::Goodbye => Message::Goodbye {
                details: f.dict("details")?,
                reason: f.uri("reason")?,
            },
            MessageKind::Error => Message::Error {
                request_type: f.int("request_type")?,
                request: f.id("request")?,
                details: f.dict("details")?,
                error: f.uri("error")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Publish => Message::Publish {
                request: f.id("request")?,
                options: f.dict("options")?,
                topic: f.uri("topic")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Published => Message::Published {
                request: f.id("request")?,
                publication: f.id("publication")?,
            },
            MessageKind::Subscribe => Message::Subscribe {
                request: f.id("request")?,
                options: f.dict("options")?,
                topic: f.uri("topic")?,
            },
            MessageKind::Subscribed => Message::Subscribed {
                request: f.id("request")?,
                subscription: f.id("subscription")?,
            },
            MessageKind::Unsubscribe => Message::Unsubscribe {
                request: f.id("request")?,
                subscription: f.id("subscription")?,
            },
            MessageKind::Unsubscribed => Message::Unsubscribed {
                request: f.id("request")?,
            },
            MessageKind::Event => Message::Event {
                subscription: f.id("subscription")?,
                publication: f.id("publication")?,
                details: f.dict("details")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Call => Message::Call {
                request: f.id("request")?,
                options: f.dict("options")?,
                procedure: f.uri("procedure")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Cancel => Message::Cancel {
                request: f.id("request")?,
                options: f.dict("options")?,
            },
            MessageKind::Result => Message::Result {
                request: f.id("request")?,
                details: f.dict("details")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Register => Message::Register {
                request: f.id("request")?,
                options: f.dict("options")?,
                procedure: f.uri("procedure")?,
            },
            MessageKind::Registered => Message::Registered {
                request: f.id("request")?,
                registration: f.id("registration")?,
            },
            MessageKind::Unregister => Message::Unregister {
                request: f.id("request")?,
                registration: f.id("registration")?,
            },
            MessageKind::Unregistered => Message::Unregistered {
                request: f.id("request")?,
            },
            MessageKind::Invocation => Message::Invocation {
                request: f.id("request")?,
                registration: f.id("registration")?,
                details: f.dict("details")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
            MessageKind::Interrupt => Message::Interrupt {
                request: f.id("request")?,
                options: f.dict("options")?,
            },
            MessageKind::Yield => Message::Yield {
                request: f.id("request")?,
                options: f.dict("options")?,
                args: f.args()?,
                kwargs: f.kwargs()?,
            },
        };
        Ok(msg)
    }
}

fn id_value(id: Id) -> Value {
    Value::Integer(id as i64)
}

/// Append the optional `args`/`kwargs` payload pair. `args` must be present
/// whenever `kwargs` is, so a lone non-empty `kwargs` forces an empty `args`
/// onto the wire.
fn push_payload(list: &mut List, args: &List, kwargs: &Dict) {
    if !kwargs.is_empty() {
        list.push(Value::List(args.clone()));
        list.push(Value::Dict(kwargs.clone()));
    } else if !args.is_empty() {
        list.push(Value::List(args.clone()));
    }
}

/// Sequential field reader. Arity is validated before construction, so a
/// required field is always present; the `Null` fallback only feeds the
/// mismatch path and keeps this module panic-free.
struct Cursor(std::vec::IntoIter<Value>);

impl Cursor {
    fn take(&mut self) -> Value {
        self.0.next().unwrap_or(Value::Null)
    }

    fn id(&mut self, field: &'static str) -> Result<Id> {
        let v = self.take();
        v.as_id().ok_or(WampWireError::FieldTypeMismatch {
            field,
            expected: "id",
            got: v.type_name(),
        })
    }

    /// Non-negative integer without the identifier-range restriction
    /// (the ERROR message's `request_type`).
    fn int(&mut self, field: &'static str) -> Result<u64> {
        match self.take() {
            Value::Integer(n) if n >= 0 => Ok(n as u64),
            other => Err(mismatch(field, "non-negative integer", &other)),
        }
    }

    fn uri(&mut self, field: &'static str) -> Result<Uri> {
        match self.take() {
            Value::String(s) => Ok(s),
            other => Err(mismatch(field, "uri", &other)),
        }
    }

    fn text(&mut self, field: &'static str) -> Result<String> {
        match self.take() {
            Value::String(s) => Ok(s),
            other => Err(mismatch(field, "string", &other)),
        }
    }

    fn dict(&mut self, field: &'static str) -> Result<Dict> {
        match self.take() {
            Value::Dict(d) => Ok(d),
            other => Err(mismatch(field, "dict", &other)),
        }
    }

    fn args(&mut self) -> Result<List> {
        match self.0.next() {
            None => Ok(List::new()),
            Some(Value::List(l)) => Ok(l),
            Some(other) => Err(mismatch("args", "list", &other)),
        }
    }

    fn kwargs(&mut self) -> Result<Dict> {
        match self.0.next() {
            None => Ok(Dict::new()),
            Some(Value::Dict(d)) => Ok(d),
            Some(other) => Err(mismatch("kwargs", "dict", &other)),
        }
    }
}

fn mismatch(field: &'static str, expected: &'static str, got: &Value) -> WampWireError {
    WampWireError::FieldTypeMismatch {
        field,
        expected,
        got: got.type_name(),
    }
}
