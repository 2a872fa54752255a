//! Data models shared by the client and the mock backend

pub mod catalog;
pub mod order;

pub use catalog::{Banner, CompanySettings, FEATURED_PRODUCTS, Product, ProductQuery};
pub use order::{
    MSG_CUSTOMER_NAME_REQUIRED, MSG_LOOKUP_EMPTY, MSG_PROGRESS_EMPTY, ORDER_PAGE_SIZE, Order,
    OrderCreate, OrderDetail, OrderListQuery, OrderStatus, OrderUpdate, ProgressCreate,
    ProgressEntry, UnknownOrderStatus, validation_message,
};
