//! # Response Assembler
//!
//! [`Responder`] wraps one envelope and one sink, accumulates overrides,
//! and guarantees at-most-once emission. [`ResponseOptions`] with
//! [`send_ok`]/[`send_err`] is the eager, options-style alternative for
//! callers that configure and send in a single step.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use http::StatusCode;
use serde_json::{Map, Value};

use crate::response::canned::{INTERNAL_SERVER_ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::response::envelope::Envelope;
use crate::response::errors::RespondResult;
use crate::response::sink::ResponseSink;
use crate::response::writer::write_envelope;

/// Key the existing payload is moved under when [`Responder::add_data`]
/// finds a non-mapping value in place.
pub const WRAPPED_DATA_KEY: &str = "data";

struct State<W> {
    envelope: Envelope,
    sink: W,
    sent: bool,
}

/// Per-request response builder with at-most-once emission.
///
/// A responder owns its sink and one [`Envelope`]. Mutators come in two
/// flavors: consuming `with_*` methods for chained construction and
/// `set_*` methods usable through a shared reference. [`send`] writes the
/// envelope once; later calls are no-ops. A responder dropped without an
/// explicit send emits from `Drop`, so every exit path of a handler
/// produces a response.
///
/// Error responses carry whatever data was explicitly attached; nothing
/// is suppressed at emission time. Unset data goes out as `null`.
///
/// [`send`]: Responder::send
pub struct Responder<W: ResponseSink> {
    state: Mutex<State<W>>,
}

impl<W: ResponseSink> Responder<W> {
    /// Success-path responder: status 200, `success=true`, message
    /// "Success".
    pub fn ok(sink: W) -> Self {
        Self::new(sink, StatusCode::OK, true, SUCCESS_MESSAGE)
    }

    /// Error-path responder: status 500, `success=false`, message
    /// "Internal server error".
    pub fn err(sink: W) -> Self {
        Self::new(
            sink,
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
            INTERNAL_SERVER_ERROR_MESSAGE,
        )
    }

    /// Success-path responder with `options` applied over the defaults.
    pub fn ok_with(sink: W, options: ResponseOptions) -> Self {
        let responder = Self::ok(sink);
        responder.apply(options);
        responder
    }

    /// Error-path responder with `options` applied over the defaults.
    pub fn err_with(sink: W, options: ResponseOptions) -> Self {
        let responder = Self::err(sink);
        responder.apply(options);
        responder
    }

    fn new(sink: W, status: StatusCode, success: bool, message: &str) -> Self {
        Self {
            state: Mutex::new(State {
                envelope: Envelope::new(status, success, message, Value::Null),
                sink,
                sent: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap()
    }

    fn apply(&self, options: ResponseOptions) {
        if let Some(status) = options.status {
            self.set_status(status);
        }
        if let Some(message) = options.message {
            self.set_message(message);
        }
        if let Some(data) = options.data {
            self.set_data(data);
        }
    }

    /// Replace the status code.
    pub fn with_status(self, status: StatusCode) -> Self {
        self.set_status(status);
        self
    }

    /// Replace the message.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Replace the data payload.
    ///
    /// Accepts anything convertible to [`Value`]; use `serde_json::json!`
    /// or `serde_json::to_value` for custom types.
    pub fn with_data(self, data: impl Into<Value>) -> Self {
        self.set_data(data);
        self
    }

    /// Replace the status code through a shared reference.
    pub fn set_status(&self, status: StatusCode) -> &Self {
        self.lock().envelope.status = status.as_u16();
        self
    }

    /// Replace the message through a shared reference.
    pub fn set_message(&self, message: impl Into<String>) -> &Self {
        self.lock().envelope.message = message.into();
        self
    }

    /// Replace the data payload through a shared reference.
    pub fn set_data(&self, data: impl Into<Value>) -> &Self {
        self.lock().envelope.data = data.into();
        self
    }

    /// Insert one key into the data payload.
    ///
    /// Total over the current payload shape: `null` becomes a fresh
    /// single-entry mapping, a mapping gains (or overwrites) the key, and
    /// a scalar or array is first moved under [`WRAPPED_DATA_KEY`] so the
    /// new key can sit beside it.
    pub fn add_data(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        let mut state = self.lock();
        let data = &mut state.envelope.data;
        match data {
            Value::Object(map) => {
                map.insert(key.into(), value.into());
            }
            Value::Null => {
                let mut map = Map::new();
                map.insert(key.into(), value.into());
                *data = Value::Object(map);
            }
            other => {
                let mut map = Map::new();
                map.insert(WRAPPED_DATA_KEY.to_string(), other.take());
                map.insert(key.into(), value.into());
                *other = Value::Object(map);
            }
        }
        self
    }

    /// Snapshot of the envelope as it stands now.
    pub fn envelope(&self) -> Envelope {
        self.lock().envelope.clone()
    }

    /// True once the emission has been consumed, even by a failed write.
    pub fn is_sent(&self) -> bool {
        self.lock().sent
    }

    /// Emit the envelope.
    ///
    /// The first call performs the single write and returns its result;
    /// every later call is a no-op returning `Ok`. A failed write still
    /// consumes the emission: the bytes may be partially committed, so
    /// neither `send` nor `Drop` attempts a second write.
    pub fn send(&self) -> RespondResult<()> {
        let mut state = self.lock();
        if state.sent {
            return Ok(());
        }
        state.sent = true;

        let State { envelope, sink, .. } = &mut *state;
        write_envelope(sink, envelope)
    }
}

impl<W: ResponseSink> fmt::Debug for Responder<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Responder");
        if let Ok(state) = self.state.try_lock() {
            debug.field("envelope", &state.envelope);
            debug.field("sent", &state.sent);
        }
        debug.finish_non_exhaustive()
    }
}

impl<W: ResponseSink> Drop for Responder<W> {
    fn drop(&mut self) {
        if let Ok(state) = self.state.get_mut() {
            if !state.sent {
                state.sent = true;
                let State { envelope, sink, .. } = state;
                let _ = write_envelope(sink, envelope);
            }
        }
    }
}

/// Eagerly-evaluated response configuration for the options-style entry
/// points.
///
/// An options value is inert: nothing happens until it is handed to
/// [`Responder::ok_with`]/[`Responder::err_with`], or to
/// [`send_ok`]/[`send_err`] which write immediately.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    status: Option<StatusCode>,
    message: Option<String>,
    data: Option<Value>,
}

impl ResponseOptions {
    /// Empty options: the constructor defaults apply unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Override the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a data payload.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Build a success response from `options` and send it immediately.
///
/// There is no responder handle left to call twice, so idempotence does
/// not arise; the write happens here and the returned result is final.
pub fn send_ok<W: ResponseSink>(sink: W, options: ResponseOptions) -> RespondResult<()> {
    Responder::ok_with(sink, options).send()
}

/// Build an error response from `options` and send it immediately.
pub fn send_err<W: ResponseSink>(sink: W, options: ResponseOptions) -> RespondResult<()> {
    Responder::err_with(sink, options).send()
}
