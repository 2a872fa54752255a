//! Typed wrappers around the backend endpoints
//!
//! Each method unwraps the `{ data, pagination, message }` envelope and
//! returns the payload. Path segments and query values are percent-encoded
//! here so callers can pass raw user input.

use std::sync::Arc;

use shared::models::{
    Banner, CompanySettings, Order, OrderCreate, OrderDetail, OrderListQuery, OrderUpdate,
    Product, ProductQuery, ProgressCreate, ProgressEntry,
};
use shared::{ApiResponse, PaginatedResponse};

use crate::{ClientResult, HttpClient};

/// Order endpoints (admin + public lookup)
#[derive(Debug)]
pub struct OrdersApi<C> {
    http: Arc<C>,
}

impl<C> Clone for OrdersApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> OrdersApi<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub fn list_path(query: &OrderListQuery) -> String {
        let mut path = format!(
            "/api/orders/admin?page={}&limit={}",
            query.page, query.limit
        );
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search));
        }
        path
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &OrderListQuery) -> ClientResult<PaginatedResponse<Order>> {
        let resp: ApiResponse<Vec<Order>> = self.http.get(&Self::list_path(query)).await?;
        Ok(resp.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ClientResult<OrderDetail> {
        let resp: ApiResponse<OrderDetail> =
            self.http.get(&format!("/api/orders/admin/{}", id)).await?;
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Order> {
        let resp: ApiResponse<Order> = self.http.post("/api/orders/admin", payload).await?;
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: &OrderUpdate) -> ClientResult<Order> {
        let resp: ApiResponse<Order> = self
            .http
            .put(&format!("/api/orders/admin/{}", id), payload)
            .await?;
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn add_progress(
        &self,
        order_id: i64,
        payload: &ProgressCreate,
    ) -> ClientResult<ProgressEntry> {
        let resp: ApiResponse<ProgressEntry> = self
            .http
            .post(&format!("/api/orders/admin/{}/progress", order_id), payload)
            .await?;
        Ok(resp.data)
    }

    /// Public lookup by order code or numeric id
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, identifier: &str) -> ClientResult<OrderDetail> {
        let path = format!(
            "/api/orders/progress/{}",
            urlencoding::encode(identifier)
        );
        let resp: ApiResponse<OrderDetail> = self.http.get(&path).await?;
        Ok(resp.data)
    }
}

/// Read-only catalog endpoints used by the home page
#[derive(Debug)]
pub struct CatalogApi<C> {
    http: Arc<C>,
}

impl<C> Clone for CatalogApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> CatalogApi<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn banners(&self) -> ClientResult<Vec<Banner>> {
        let resp: ApiResponse<Vec<Banner>> = self.http.get("/api/banners").await?;
        Ok(resp.data)
    }

    pub async fn products(&self, query: ProductQuery) -> ClientResult<PaginatedResponse<Product>> {
        let path = format!("/api/products?page={}&limit={}", query.page, query.limit);
        let resp: ApiResponse<Vec<Product>> = self.http.get(&path).await?;
        Ok(resp.into())
    }

    pub async fn settings(&self) -> ClientResult<CompanySettings> {
        let resp: ApiResponse<CompanySettings> = self.http.get("/api/settings").await?;
        Ok(resp.data)
    }
}
