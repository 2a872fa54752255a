//! Konveksi Client - REST client and view state for the order desk
//!
//! - [`client`]: transport (`HttpClient` over reqwest, or in-process over an axum `Router`)
//! - [`api`]: typed wrappers around the backend endpoints
//! - [`orders`]: order core (service, forms, timeline)
//! - [`views`]: per-screen state controllers (admin workbench, public lookup, home)

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod views;

pub use api::{CatalogApi, OrdersApi};
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use orders::{OrderError, OrderForm, OrderService, ProgressForm, Timeline};
pub use views::{HomeView, OrderLookupView, OrderWorkbench, ScopeHandle, ViewScope};

// Re-export shared types for convenience
pub use shared::{ApiResponse, Order, OrderDetail, OrderStatus, PaginatedResponse, ProgressEntry};
