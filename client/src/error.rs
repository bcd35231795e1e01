//! Error types for the MindWell API client.
//!
//! # Design
//! `Aborted` gets a dedicated variant because cancellation and timeout are
//! never user-facing failures: page controllers discard aborted results
//! silently instead of rendering an error banner. Every non-2xx response
//! lands in `Http` with the status code and the parsed error body, so
//! callers can special-case the statuses the product cares about (401, 409)
//! and collapse everything else into a generic message.

use thiserror::Error;

/// Errors returned by the HTTP transport and the typed API façade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request was cancelled by the caller's scope or hit the request
    /// timeout. Never surfaced to the user as an error.
    #[error("request aborted or timed out")]
    Aborted,

    /// The server answered with a non-2xx status. `details` is the error
    /// body parsed as JSON, when there was one.
    #[error("HTTP {status}")]
    Http {
        status: u16,
        details: Option<serde_json::Value>,
    },

    /// The request never reached a response: DNS, connect, TLS or mid-body
    /// transport failures.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx body could not be deserialized into the expected type.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status of the response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for cancellation/timeout, the one kind callers drop silently.
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}
