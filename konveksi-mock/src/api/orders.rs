//! Order handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use http::StatusCode;
use shared::error::AppResult;
use shared::models::{
    Order, OrderCreate, OrderDetail, OrderListQuery, OrderUpdate, ProgressCreate, ProgressEntry,
};
use shared::ApiResponse;

use crate::state::MockState;

/// GET /api/orders/admin
pub async fn list(
    State(state): State<MockState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let store = state.store().read().await;
    let (items, pagination) = store.list_orders(&query);
    Ok(ApiResponse::ok(items).with_pagination(pagination))
}

/// GET /api/orders/admin/{id}
pub async fn get_by_id(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let store = state.store().read().await;
    Ok(ApiResponse::ok(store.order_detail(id)?))
}

/// POST /api/orders/admin
pub async fn create(
    State(state): State<MockState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    let mut store = state.store().write().await;
    let order = store.create_order(payload, Utc::now())?;
    crate::audit_log!("admin", "create", format!("order:{}", order.id), order.order_code.as_str());
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message(order, "Order created"),
    ))
}

/// PUT /api/orders/admin/{id}
pub async fn update(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<ApiResponse<Order>> {
    let mut store = state.store().write().await;
    let order = store.update_order(id, payload)?;
    crate::audit_log!("admin", "update", format!("order:{}", id), order.status.as_str());
    Ok(ApiResponse::ok_with_message(order, "Order updated"))
}

/// POST /api/orders/admin/{id}/progress
pub async fn add_progress(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProgressCreate>,
) -> AppResult<(StatusCode, ApiResponse<ProgressEntry>)> {
    let mut store = state.store().write().await;
    let entry = store.add_progress(id, payload, Utc::now())?;
    crate::audit_log!("admin", "progress", format!("order:{}", id));
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message(entry, "Progress added"),
    ))
}

/// GET /api/orders/progress/{identifier}
pub async fn public_lookup(
    State(state): State<MockState>,
    Path(identifier): Path<String>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let store = state.store().read().await;
    Ok(ApiResponse::ok(store.lookup(&identifier)?))
}
