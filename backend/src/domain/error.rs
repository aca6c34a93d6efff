//! # Classified Errors
//!
//! Every failure in the request pipeline is reported as a [`ClassifiedError`]:
//! a message paired with an [`ErrorKey`]. The key is what the REST layer maps
//! to an HTTP status code; the domain never deals with status codes itself.

use std::fmt;

use tracing::error;

/// Message surfaced for any fault that was not classified where it happened
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Classification of a pipeline failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// Body missing, malformed, or missing required fields
    InvalidRequestBody,
    /// Identifier missing or not in canonical form
    InvalidId,
    /// Caller lacks rights; only set by business operations
    Unauthorized,
    /// The addressed model does not exist; encoded like `Internal`
    NotFound,
    /// Anything else
    Internal,
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKey::InvalidRequestBody => "invalid_request_body",
            ErrorKey::InvalidId => "invalid_id",
            ErrorKey::Unauthorized => "unauthorized",
            ErrorKey::NotFound => "not_found",
            ErrorKey::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// An error carrying an explicit category alongside its message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    key: ErrorKey,
    message: String,
}

impl ClassifiedError {
    pub fn new(key: ErrorKey, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }

    pub fn invalid_request_body(message: impl Into<String>) -> Self {
        Self::new(ErrorKey::InvalidRequestBody, message)
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new(ErrorKey::InvalidId, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKey::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKey::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKey::Internal, message)
    }

    pub fn key(&self) -> ErrorKey {
        self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Unclassified faults (storage failures and the like) are reported as
/// `Internal` with a coarse message; the detail only goes to the log.
impl From<anyhow::Error> for ClassifiedError {
    fn from(err: anyhow::Error) -> Self {
        error!("Unclassified error: {:#}", err);
        Self::internal(INTERNAL_ERROR_MESSAGE)
    }
}

/// Result of any pipeline stage or business operation
pub type Outcome<T> = Result<T, ClassifiedError>;
