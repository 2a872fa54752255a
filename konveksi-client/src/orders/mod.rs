//! Order core
//!
//! [`OrderService`] is the only path to the order endpoints: it validates
//! forms before anything touches the network and folds transport failures
//! into [`OrderError`]. [`Timeline`] holds an order's progress entries in the
//! order the backend returned them.

mod error;
mod forms;
mod service;
mod timeline;

pub use error::OrderError;
pub use forms::{OrderForm, ProgressForm};
pub use service::OrderService;
pub use timeline::Timeline;
