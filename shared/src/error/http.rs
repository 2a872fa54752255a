//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::OrderNotFound => StatusCode::NOT_FOUND,

            Self::OrderCodeExists => StatusCode::CONFLICT,

            Self::NotAuthenticated | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // business rules
            Self::ProgressEmpty | Self::CustomerNameRequired => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderCodeExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenInvalid.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::ProgressEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::CustomerNameRequired.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
