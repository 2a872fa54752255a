//! Unified error system
//!
//! - [`ErrorCode`]: numeric codes shared by backend and client
//! - [`ErrorCategory`]: auth or order, by code range
//! - [`AppError`]: rich error type with code, message and details
//! - [`ErrorBody`]: the JSON body of every failed request
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound).with_detail("identifier", "K99-1");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, Some(4001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
