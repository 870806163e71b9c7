//! # Response Errors
//!
//! Error types for response emission.

use std::io;

use thiserror::Error;

/// Result type for response operations
pub type RespondResult<T> = Result<T, RespondError>;

/// Errors surfaced by a response emission.
///
/// There is no "missing sink" variant: constructors take the sink by
/// value, so an absent destination cannot be represented. Neither variant
/// is ever retried; the single write attempt owns whatever bytes it
/// managed to commit.
#[derive(Debug, Error)]
pub enum RespondError {
    /// The envelope could not be encoded as JSON.
    #[error("failed to encode response body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink rejected the body write.
    #[error("failed to write response: {0}")]
    Write(#[from] io::Error),
}
