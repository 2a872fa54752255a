//! HTTP surface of the mock backend
//!
//! | Route | Auth |
//! |---|---|
//! | `GET/POST /api/orders/admin` | admin |
//! | `GET/PUT /api/orders/admin/{id}` | admin |
//! | `POST /api/orders/admin/{id}/progress` | admin |
//! | `GET /api/orders/progress/{identifier}` | public |
//! | `GET /api/banners`, `/api/products`, `/api/settings` | public |

pub mod catalog;
pub mod orders;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::header::AUTHORIZATION;
use shared::error::{AppError, ErrorBody};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::MockState;

/// Build the full router with state attached
pub fn build_router(state: MockState) -> Router {
    let admin = Router::new()
        .route("/api/orders/admin", get(orders::list).post(orders::create))
        .route(
            "/api/orders/admin/{id}",
            get(orders::get_by_id).put(orders::update),
        )
        .route("/api/orders/admin/{id}/progress", post(orders::add_progress))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let public = Router::new()
        .route("/api/orders/progress/{identifier}", get(orders::public_lookup))
        .route("/api/banners", get(catalog::banners))
        .route("/api/products", get(catalog::products))
        .route("/api/settings", get(catalog::settings))
        .route("/health", get(health));

    Router::new()
        .merge(admin)
        .merge(public)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            record_and_inject,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Log every request and serve an injected failure if one is armed
async fn record_and_inject(
    State(state): State<MockState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    state.record(request.method().as_str(), &path);

    if let Some(failure) = state.take_failure() {
        tracing::warn!(status = %failure.status, path = %path, "Serving injected failure");
        let body = ErrorBody {
            message: failure.message,
            ..Default::default()
        };
        return (failure.status, Json(body)).into_response();
    }

    next.run(request).await
}

/// Bearer check for admin routes; a no-op when no token is configured
async fn require_admin(
    State(state): State<MockState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.admin_token() {
        let provided = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match provided {
            None => {
                crate::security_log!(WARN, "auth_missing", path = %request.uri().path());
                return Err(AppError::not_authenticated());
            }
            Some(token) if token != expected => {
                crate::security_log!(WARN, "auth_invalid", path = %request.uri().path());
                return Err(AppError::invalid_token("Invalid admin token"));
            }
            Some(_) => {}
        }
    }
    Ok(next.run(request).await)
}
