// konveksi-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory transport

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, decode_body};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives the Router with Tower's `oneshot`, so the full middleware stack
/// runs without a socket.
///
/// # Example
///
/// ```ignore
/// let router = konveksi_mock::build_router(state);
/// let client = OneshotHttpClient::new(router).with_token("secret");
/// let banners: ApiResponse<Vec<Banner>> = client.get("/api/banners").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn build_request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(http::header::CONTENT_TYPE, "application/json");

        if let Some(token) = &self.token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode_body(status, &body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(http::Method::POST, path, Some(bytes))?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(http::Method::PUT, path, Some(bytes))?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_round_trip() {
        let router = Router::new().route("/ping", get(|| async { axum::Json(7u32) }));
        let client = OneshotHttpClient::new(router);
        let value: u32 = client.get("/ping").await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_oneshot_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new()).with_token("t");
        let result: ClientResult<u32> = client.get("/missing").await;
        assert!(matches!(result, Err(ClientError::NotFound(None))));
    }
}
