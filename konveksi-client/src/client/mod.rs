//! Transport layer
//!
//! [`HttpClient`] is the seam every API wrapper talks through.
//! [`NetworkHttpClient`] goes over the wire with reqwest;
//! [`OneshotHttpClient`] calls an axum `Router` in-process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
