//! retort - Fluent JSON response building and structured logging for HTTP services
//!
//! Two independent subsystems:
//! - [`response`]: a per-request builder that assembles one JSON envelope
//!   and writes it to an abstract sink at most once
//! - [`logger`]: a leveled, field-tagged logger with pluggable sinks and
//!   text/JSON/pretty output
//!
//! The whole surface is re-exported here, so callers can reach everything
//! through the crate root.
//!
//! # Usage
//!
//! ```ignore
//! use retort::{created, ensure_method, Logger, RequestDescriptor};
//! use serde_json::json;
//!
//! let logger = Logger::default().with_field("service", "api");
//!
//! let request = RequestDescriptor::new("POST", "/users");
//! match ensure_method(sink, &request, "POST") {
//!     Ok(sink) => created(sink).with_data(json!({"id": 7})).send()?,
//!     Err(rejection) => rejection.send()?,
//! }
//! logger.info("user created");
//! ```

pub mod logger;
pub mod response;

pub use logger::{
    field, log_request, BufferSink, Caller, Entry, Field, Level, LogConfig, LogFormat, LogSink,
    Logger, DEFAULT_TIME_FORMAT,
};
pub use response::{
    accepted, bad_request, conflict, created, ensure_method, forbidden, internal_server_error,
    method_not_allowed, no_content, not_found, send_err, send_ok, service_unavailable, success,
    timestamp, too_many_requests, unauthorized, write_envelope, Envelope, MemorySink,
    RequestDescriptor, RespondError, RespondResult, Responder, ResponseOptions, ResponseSink,
    ACCEPTED_MESSAGE, BAD_REQUEST_MESSAGE, CONFLICT_MESSAGE, CONTENT_TYPE_JSON, CREATED_MESSAGE,
    FORBIDDEN_MESSAGE, INTERNAL_SERVER_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
    NOT_FOUND_MESSAGE, NO_CONTENT_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE, SUCCESS_MESSAGE,
    TOO_MANY_REQUESTS_MESSAGE, UNAUTHORIZED_MESSAGE, WRAPPED_DATA_KEY,
};
