use thiserror::Error;

use crate::ClientError;

/// Order operation error
#[derive(Debug, Error)]
pub enum OrderError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Public lookup found nothing for the identifier
    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    Request(#[from] ClientError),
}

impl OrderError {
    /// Text to show the user
    ///
    /// Validation errors show their own message, request errors show the
    /// backend's message when it sent one, everything else shows `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Request(err) => err.server_message().unwrap_or(fallback).to_string(),
            Self::NotFound => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status of the failed request, if one got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status(),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for OrderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(shared::models::validation_message(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = OrderError::from(ClientError::from_status(
            StatusCode::CONFLICT,
            r#"{"message":"Kode order sudah dipakai."}"#,
        ));
        assert_eq!(err.user_message("fallback"), "Kode order sudah dipakai.");

        let err = OrderError::from(ClientError::from_status(StatusCode::BAD_GATEWAY, ""));
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_status_only_for_request_errors() {
        let err = OrderError::from(ClientError::from_status(StatusCode::CONFLICT, "{}"));
        assert_eq!(err.status(), Some(409));
        assert_eq!(OrderError::NotFound.status(), None);
        assert_eq!(OrderError::Validation("x".into()).status(), None);
    }

    #[test]
    fn test_validation_keeps_own_message() {
        let err = OrderError::Validation("Nama pelanggan wajib diisi.".into());
        assert!(err.is_validation());
        assert_eq!(err.user_message("x"), "Nama pelanggan wajib diisi.");
        assert_eq!(OrderError::NotFound.user_message("x"), "x");
    }
}
