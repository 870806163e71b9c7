//! # Response Writer
//!
//! Serializes one envelope onto a response sink: content-type header,
//! status line, then the JSON body.

use crate::response::envelope::Envelope;
use crate::response::errors::RespondResult;
use crate::response::sink::ResponseSink;

/// Content-type set on every response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Write `envelope` to `sink` as a JSON response.
///
/// The body is encoded first, so a serialization failure leaves the sink
/// untouched. After that the content-type header is set, the envelope's
/// status code committed, and the body written with a trailing newline.
/// One attempt only: a failed body write is returned to the caller and
/// never retried, even though the status line is already committed.
pub fn write_envelope<W: ResponseSink + ?Sized>(
    sink: &mut W,
    envelope: &Envelope,
) -> RespondResult<()> {
    let mut body = serde_json::to_vec(envelope)?;
    body.push(b'\n');

    sink.set_header("Content-Type", CONTENT_TYPE_JSON);
    sink.write_status(envelope.status);
    sink.write_body(&body)?;
    Ok(())
}
