//! Shared types for the Konveksi order desk
//!
//! Wire and domain types used by both the REST client and the mock backend:
//! order/progress models, the response envelope, and the unified error system.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use models::{Order, OrderDetail, OrderStatus, ProgressEntry};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
