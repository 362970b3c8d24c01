//! # API Error Types
//!
//! Typed error handling for the Skipper client.
//! All fallible operations return `Result<T, ApiError>`.

use crate::envelope::Shape;
use thiserror::Error;

/// Failure to build a [`Model`](crate::Model) from a JSON value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field is absent or holds the wrong primitive type
    #[error("{model}: missing or invalid field `{field}`")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    /// The value handed to the model is not a JSON object
    #[error("{model}: expected a JSON object")]
    NotAnObject { model: &'static str },
}

impl DecodeError {
    pub fn missing(model: &'static str, field: &'static str) -> Self {
        DecodeError::MissingField { model, field }
    }
}

/// Core error type for all client operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered outside the 2xx range; body kept verbatim
    #[error("API returned HTTP {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },

    /// Body is not JSON, or not a JSON object envelope
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// `data` was an array where an object was expected, or vice versa
    #[error("Shape mismatch: expected {expected} data, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    /// A payload item could not be decoded into its model
    #[error("Decode failed: {0}")]
    DecodeFailed(#[from] DecodeError),

    /// The transport failed before any response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration errors (missing URI or token, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status of a non-success response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NonSuccessStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the response arrived but its content was unusable
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ApiError::MalformedBody(_) | ApiError::ShapeMismatch { .. } | ApiError::DecodeFailed(_)
        )
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
