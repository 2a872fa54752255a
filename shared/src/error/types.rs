//! Error types and the error response body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }
}

/// Body of every non-2xx response
///
/// All fields are optional on the wire; clients must cope with an empty
/// object or a body that is not JSON at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorBody {
    /// Lenient parse; unknown shapes yield an empty body
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: Some(err.message.clone()),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        match self.code.category() {
            ErrorCategory::Auth => {
                tracing::warn!(code = %self.code, message = %self.message, "Request rejected")
            }
            ErrorCategory::Order => {
                tracing::debug!(code = %self.code, message = %self.message, "Order request failed")
            }
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::OrderNotFound);
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.message, "Order not found");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "Order not found");
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::OrderCodeExists, "taken")
            .with_detail("order_code", "K99-20250217-001");
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
        let details = err.details.unwrap();
        assert_eq!(details.get("order_code").unwrap(), "K99-20250217-001");
    }

    #[test]
    fn test_auth_constructors() {
        let err = AppError::not_authenticated();
        assert_eq!(err.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "User is not authenticated");

        let err = AppError::invalid_token("Invalid admin token");
        assert_eq!(err.code, ErrorCode::TokenInvalid);
        assert_eq!(err.to_string(), "Invalid admin token");
    }

    #[test]
    fn test_error_body_serialize() {
        let err = AppError::new(ErrorCode::OrderNotFound);
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 4001, "message": "Order not found" })
        );
    }

    #[test]
    fn test_error_body_parse_is_lenient() {
        let body = ErrorBody::parse(r#"{"message":"Order tidak ada"}"#);
        assert_eq!(body.message.as_deref(), Some("Order tidak ada"));
        assert!(body.code.is_none());

        assert_eq!(ErrorBody::parse("<html>502</html>"), ErrorBody::default());
        assert_eq!(ErrorBody::parse("{}"), ErrorBody::default());

        let body = ErrorBody::parse(r#"{"code":4002}"#);
        assert_eq!(body.code, Some(ErrorCode::OrderCodeExists.code()));
    }
}
