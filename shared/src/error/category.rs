//! Error category classification

use super::codes::ErrorCode;

/// Error category, one per code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Authentication errors (1xxx)
    Auth,
    /// Order and progress errors (4xxx)
    Order,
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAuthenticated | Self::TokenInvalid => ErrorCategory::Auth,
            Self::OrderNotFound
            | Self::OrderCodeExists
            | Self::ProgressEmpty
            | Self::CustomerNameRequired => ErrorCategory::Order,
        }
    }
}
