#![allow(dead_code)]

use std::sync::Arc;

use konveksi_client::{OneshotHttpClient, OrderForm, OrderService};
use konveksi_mock::{MockState, build_router};
use shared::Order;

pub const ADMIN_TOKEN: &str = "rahasia-admin";

/// Mock backend with admin auth on, plus an authorized in-process client
pub fn setup() -> (MockState, Arc<OneshotHttpClient>) {
    let state = MockState::new(Some(ADMIN_TOKEN.to_string()));
    let client = OneshotHttpClient::new(build_router(state.clone())).with_token(ADMIN_TOKEN);
    (state, Arc::new(client))
}

pub fn form(name: &str) -> OrderForm {
    OrderForm {
        customer_name: name.to_string(),
        ..Default::default()
    }
}

pub async fn seed_order(client: &Arc<OneshotHttpClient>, name: &str) -> Order {
    OrderService::new(Arc::clone(client))
        .create(&form(name))
        .await
        .expect("seed order")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("konveksi_client=debug")
        .with_test_writer()
        .try_init();
}
