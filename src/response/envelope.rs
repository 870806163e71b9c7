//! # Response Envelope
//!
//! The canonical JSON payload carried by every response: status code,
//! success flag, human-readable message, arbitrary data, and a creation
//! timestamp.

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returns the current time used to stamp envelopes.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// The wire payload for every response.
///
/// Serialized shape:
///
/// ```json
/// {
///   "status": 404,
///   "success": false,
///   "message": "Resource not found",
///   "data": null,
///   "timestamp": "2024-06-01T10:30:00.123456789Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status code (100-599), also committed as the status line.
    pub status: u16,
    /// True for success-path responses, false for error-path responses.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Arbitrary structured payload; `null` when nothing was attached.
    pub data: Value,
    /// Capture time, stamped once at creation and immutable afterward.
    pub timestamp: DateTime<Utc>,
}

impl Envelope {
    /// Create an envelope stamped with the current time.
    pub fn new(status: StatusCode, success: bool, message: impl Into<String>, data: Value) -> Self {
        Self {
            status: status.as_u16(),
            success,
            message: message.into(),
            data,
            timestamp: timestamp(),
        }
    }

    /// Decode an envelope from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decode the `data` payload into a concrete type.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}
