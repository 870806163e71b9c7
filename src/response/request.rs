//! # Request Descriptor
//!
//! A minimal read-only view of the incoming request, plus the method
//! guard used to reject mismatched verbs.

use crate::response::canned::method_not_allowed;
use crate::response::responder::Responder;
use crate::response::sink::ResponseSink;

/// Read-only request facts supplied by the embedding handler layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method, e.g. `"GET"`.
    pub method: String,
    /// Request path, e.g. `"/users/7"`.
    pub path: String,
}

impl RequestDescriptor {
    /// Create a descriptor.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

/// Guard a handler behind one expected method.
///
/// On a match the sink is handed back untouched. On a mismatch the sink
/// is consumed into a 405 responder whose message names the offending
/// method; the responder is returned, not sent, so the caller decides
/// when to emit it (or to customize it first). Methods compare exactly,
/// as HTTP method names are case-sensitive.
pub fn ensure_method<W: ResponseSink>(
    sink: W,
    request: &RequestDescriptor,
    expected: &str,
) -> Result<W, Responder<W>> {
    if request.method == expected {
        Ok(sink)
    } else {
        Err(method_not_allowed(sink)
            .with_message(format!("Method {} not allowed", request.method)))
    }
}
