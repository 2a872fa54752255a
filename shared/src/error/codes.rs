//! Error codes for the order desk
//!
//! - 1xxx: authentication
//! - 4xxx: orders and progress

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Serialized as a bare `u16` so the backend and every client agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,
    TokenInvalid = 1004,

    // ==================== 4xxx: Order ====================
    OrderNotFound = 4001,
    /// Another order already uses this code
    OrderCodeExists = 4002,
    /// Progress entry carries neither status nor description
    ProgressEmpty = 4003,
    CustomerNameRequired = 4004,
}

/// Returned when a number is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl ErrorCode {
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderCodeExists => "Order code already exists",
            ErrorCode::ProgressEmpty => "Progress needs a status or a description",
            ErrorCode::CustomerNameRequired => "Customer name is required",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1001 => Ok(ErrorCode::NotAuthenticated),
            1004 => Ok(ErrorCode::TokenInvalid),

            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderCodeExists),
            4003 => Ok(ErrorCode::ProgressEmpty),
            4004 => Ok(ErrorCode::CustomerNameRequired),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
