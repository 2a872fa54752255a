//! Read-only catalog handlers

use axum::extract::{Query, State};
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{Banner, CompanySettings, Product};
use shared::ApiResponse;

use crate::state::MockState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    12
}

/// GET /api/banners
pub async fn banners(State(state): State<MockState>) -> AppResult<ApiResponse<Vec<Banner>>> {
    let store = state.store().read().await;
    Ok(ApiResponse::ok(store.banners.clone()))
}

/// GET /api/products
pub async fn products(
    State(state): State<MockState>,
    Query(query): Query<PageQuery>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let store = state.store().read().await;
    let (items, pagination) = store.products_page(query.page, query.limit);
    Ok(ApiResponse::ok(items).with_pagination(pagination))
}

/// GET /api/settings
pub async fn settings(State(state): State<MockState>) -> AppResult<ApiResponse<CompanySettings>> {
    let store = state.store().read().await;
    Ok(ApiResponse::ok(store.settings.clone()))
}
