//! Konveksi Mock - in-memory stand-in for the Konveksi 99 REST backend
//!
//! Serves the order, progress and catalog endpoints from memory. Integration
//! tests drive [`build_router`] in-process; `main.rs` serves it over TCP for
//! local development.

pub mod api;
pub mod config;
pub mod logger;
pub mod state;

pub use api::build_router;
pub use config::Config;
pub use state::{MockState, RecordedRequest, Store};
