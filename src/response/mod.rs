//! # JSON Response Building
//!
//! Per-request response assembly with a single-emission guarantee:
//! - [`Envelope`]: the wire payload (status/success/message/data/timestamp)
//! - [`Responder`]: fluent builder over one envelope and one sink
//! - [`ResponseOptions`] with [`send_ok`]/[`send_err`]: eager options-style entry
//! - canned per-status helpers ([`not_found`], [`created`], ...)
//! - [`ensure_method`]: method guard returning a ready 405 on mismatch
//!
//! # Usage
//!
//! ```ignore
//! use retort::response::{created, ensure_method, RequestDescriptor};
//! use serde_json::json;
//!
//! let request = RequestDescriptor::new("POST", "/users");
//! let sink = ensure_method(sink, &request, "POST")?;
//! created(sink).with_data(json!({"id": 7})).send()?;
//! ```

mod canned;
mod envelope;
mod errors;
mod request;
mod responder;
mod sink;
mod writer;

pub use canned::{
    accepted, bad_request, conflict, created, forbidden, internal_server_error,
    method_not_allowed, no_content, not_found, service_unavailable, success, too_many_requests,
    unauthorized, ACCEPTED_MESSAGE, BAD_REQUEST_MESSAGE, CONFLICT_MESSAGE, CREATED_MESSAGE,
    FORBIDDEN_MESSAGE, INTERNAL_SERVER_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
    NOT_FOUND_MESSAGE, NO_CONTENT_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE, SUCCESS_MESSAGE,
    TOO_MANY_REQUESTS_MESSAGE, UNAUTHORIZED_MESSAGE,
};
pub use envelope::{timestamp, Envelope};
pub use errors::{RespondError, RespondResult};
pub use request::{ensure_method, RequestDescriptor};
pub use responder::{send_err, send_ok, Responder, ResponseOptions, WRAPPED_DATA_KEY};
pub use sink::{MemorySink, ResponseSink};
pub use writer::{write_envelope, CONTENT_TYPE_JSON};
