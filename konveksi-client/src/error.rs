//! Client error types

use http::StatusCode;
use shared::error::ErrorBody;
use thiserror::Error;

/// Client error type
///
/// Status-mapped variants carry the backend's `message` when the error body
/// had one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Authentication required")]
    Unauthorized(Option<String>),

    #[error("Permission denied")]
    Forbidden(Option<String>),

    #[error("Not found")]
    NotFound(Option<String>),

    #[error("Validation error")]
    Validation(Option<String>),

    #[error("Conflict")]
    Conflict(Option<String>),

    /// Any other non-2xx status
    #[error("API error (status {status})")]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-2xx status and its raw body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = ErrorBody::parse(body).message;
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Validation(message)
            }
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status behind this error, when there was a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Conflict(_) => Some(409),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The backend's own message, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Validation(m)
            | Self::Conflict(m)
            | Self::Api { message: m, .. } => m.as_deref().filter(|s| !s.trim().is_empty()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
