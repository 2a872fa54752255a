//! API Response types
//!
//! Every successful backend response is wrapped in the same envelope:
//! ```json
//! {
//!     "data": { ... },
//!     "pagination": { "page": 1, "limit": 10, "total": 42, "totalPages": 5 },
//!     "message": "optional"
//! }
//! ```
//! `pagination` only appears on list endpoints.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            data,
            pagination: None,
            message: None,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            pagination: None,
            message: Some(message.into()),
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Paginated list as seen by callers once the envelope is unwrapped
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// `None` when the backend omitted pagination metadata
    pub pagination: Option<Pagination>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            items,
            pagination: Some(Pagination::new(page, limit, total)),
        }
    }

    /// Total pages, treating missing metadata as a single page
    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages.max(1)).unwrap_or(1)
    }
}

impl<T> From<ApiResponse<Vec<T>>> for PaginatedResponse<T> {
    fn from(response: ApiResponse<Vec<T>>) -> Self {
        Self {
            items: response.data,
            pagination: response.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(1, 0, 11).total_pages, 0);
    }

    #[test]
    fn test_pagination_saturates_huge_totals() {
        assert_eq!(Pagination::new(1, 1, u64::MAX).total_pages, u32::MAX);
        assert_eq!(
            Pagination::new(1, 1, u64::from(u32::MAX) + 1).total_pages,
            u32::MAX
        );
    }

    #[test]
    fn test_pagination_wire_is_camel_case() {
        let json = serde_json::to_value(Pagination::new(2, 10, 25)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "page": 2, "limit": 10, "total": 25, "totalPages": 3 })
        );
    }

    #[test]
    fn test_envelope_without_pagination() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        let page = PaginatedResponse::from(resp);
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.pagination.is_none());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_ok_skips_empty_fields() {
        let json = serde_json::to_string(&ApiResponse::ok(5)).unwrap();
        assert_eq!(json, r#"{"data":5}"#);
    }
}
