//! # Canned Responses
//!
//! One convenience constructor per common HTTP status. Each pre-seeds a
//! [`Responder`] with the status and its default message, then hands it
//! back for further customization and sending.

use http::StatusCode;

use crate::response::responder::Responder;
use crate::response::sink::ResponseSink;

/// Default message for 400 responses.
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";
/// Default message for 401 responses.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Default message for 403 responses.
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";
/// Default message for 404 responses.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
/// Default message for 405 responses.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
/// Default message for 409 responses.
pub const CONFLICT_MESSAGE: &str = "Conflict";
/// Default message for 429 responses.
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests";
/// Default message for 500 responses.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
/// Default message for 503 responses.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable";
/// Default message for 200 responses.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Default message for 201 responses.
pub const CREATED_MESSAGE: &str = "Resource Created";
/// Default message for 202 responses.
pub const ACCEPTED_MESSAGE: &str = "Accepted";
/// Default message for 204 responses.
pub const NO_CONTENT_MESSAGE: &str = "No Content";

/// 400 Bad Request.
pub fn bad_request<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::BAD_REQUEST)
        .with_message(BAD_REQUEST_MESSAGE)
}

/// 401 Unauthorized.
pub fn unauthorized<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::UNAUTHORIZED)
        .with_message(UNAUTHORIZED_MESSAGE)
}

/// 403 Forbidden.
pub fn forbidden<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::FORBIDDEN)
        .with_message(FORBIDDEN_MESSAGE)
}

/// 404 Not Found.
pub fn not_found<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::NOT_FOUND)
        .with_message(NOT_FOUND_MESSAGE)
}

/// 405 Method Not Allowed.
pub fn method_not_allowed<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::METHOD_NOT_ALLOWED)
        .with_message(METHOD_NOT_ALLOWED_MESSAGE)
}

/// 409 Conflict.
pub fn conflict<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::CONFLICT)
        .with_message(CONFLICT_MESSAGE)
}

/// 429 Too Many Requests.
pub fn too_many_requests<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::TOO_MANY_REQUESTS)
        .with_message(TOO_MANY_REQUESTS_MESSAGE)
}

/// 500 Internal Server Error.
pub fn internal_server_error<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .with_message(INTERNAL_SERVER_ERROR_MESSAGE)
}

/// 503 Service Unavailable.
pub fn service_unavailable<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::err(sink)
        .with_status(StatusCode::SERVICE_UNAVAILABLE)
        .with_message(SERVICE_UNAVAILABLE_MESSAGE)
}

/// 200 OK.
pub fn success<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::ok(sink)
        .with_status(StatusCode::OK)
        .with_message(SUCCESS_MESSAGE)
}

/// 201 Created.
pub fn created<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::ok(sink)
        .with_status(StatusCode::CREATED)
        .with_message(CREATED_MESSAGE)
}

/// 202 Accepted.
pub fn accepted<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::ok(sink)
        .with_status(StatusCode::ACCEPTED)
        .with_message(ACCEPTED_MESSAGE)
}

/// 204 No Content.
pub fn no_content<W: ResponseSink>(sink: W) -> Responder<W> {
    Responder::ok(sink)
        .with_status(StatusCode::NO_CONTENT)
        .with_message(NO_CONTENT_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::sink::MemorySink;

    #[test]
    fn test_client_error_helpers() {
        let cases = [
            (bad_request(MemorySink::new()).envelope(), 400, BAD_REQUEST_MESSAGE),
            (unauthorized(MemorySink::new()).envelope(), 401, UNAUTHORIZED_MESSAGE),
            (forbidden(MemorySink::new()).envelope(), 403, FORBIDDEN_MESSAGE),
            (not_found(MemorySink::new()).envelope(), 404, NOT_FOUND_MESSAGE),
            (method_not_allowed(MemorySink::new()).envelope(), 405, METHOD_NOT_ALLOWED_MESSAGE),
            (conflict(MemorySink::new()).envelope(), 409, CONFLICT_MESSAGE),
            (too_many_requests(MemorySink::new()).envelope(), 429, TOO_MANY_REQUESTS_MESSAGE),
        ];

        for (envelope, status, message) in cases {
            assert_eq!(envelope.status, status);
            assert_eq!(envelope.message, message);
            assert!(!envelope.success, "status {} should be an error", status);
        }
    }

    #[test]
    fn test_server_error_helpers() {
        let cases = [
            (internal_server_error(MemorySink::new()).envelope(), 500, INTERNAL_SERVER_ERROR_MESSAGE),
            (service_unavailable(MemorySink::new()).envelope(), 503, SERVICE_UNAVAILABLE_MESSAGE),
        ];

        for (envelope, status, message) in cases {
            assert_eq!(envelope.status, status);
            assert_eq!(envelope.message, message);
            assert!(!envelope.success);
        }
    }

    #[test]
    fn test_success_helpers() {
        let cases = [
            (success(MemorySink::new()).envelope(), 200, SUCCESS_MESSAGE),
            (created(MemorySink::new()).envelope(), 201, CREATED_MESSAGE),
            (accepted(MemorySink::new()).envelope(), 202, ACCEPTED_MESSAGE),
            (no_content(MemorySink::new()).envelope(), 204, NO_CONTENT_MESSAGE),
        ];

        for (envelope, status, message) in cases {
            assert_eq!(envelope.status, status);
            assert_eq!(envelope.message, message);
            assert!(envelope.success, "status {} should be a success", status);
        }
    }
}
