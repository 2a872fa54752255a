use std::sync::Arc;

use shared::models::{MSG_LOOKUP_EMPTY, Order, OrderDetail, OrderListQuery, ProgressEntry};
use shared::PaginatedResponse;
use validator::Validate;

use super::{OrderError, OrderForm, ProgressForm};
use crate::{HttpClient, OrdersApi};

/// Order operations with client-side validation
#[derive(Debug)]
pub struct OrderService<C> {
    api: OrdersApi<C>,
}

impl<C> Clone for OrderService<C> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<C: HttpClient> OrderService<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            api: OrdersApi::new(http),
        }
    }

    pub async fn list(
        &self,
        query: &OrderListQuery,
    ) -> Result<PaginatedResponse<Order>, OrderError> {
        Ok(self.api.list(query).await?)
    }

    pub async fn create(&self, form: &OrderForm) -> Result<Order, OrderError> {
        let payload = form.to_create();
        payload.validate()?;
        let order = self.api.create(&payload).await?;
        tracing::info!(order_id = order.id, order_code = %order.order_code, "Order created");
        Ok(order)
    }

    pub async fn update(&self, id: i64, form: &OrderForm) -> Result<Order, OrderError> {
        let payload = form.to_update();
        payload.validate()?;
        let order = self.api.update(id, &payload).await?;
        tracing::info!(order_id = id, status = %order.status, "Order updated");
        Ok(order)
    }

    /// Admin fetch: order header plus full timeline
    pub async fn fetch_one(&self, id: i64) -> Result<OrderDetail, OrderError> {
        Ok(self.api.get(id).await?)
    }

    /// Public lookup by order code or id; surrounding whitespace is ignored
    pub async fn lookup_public(&self, raw: &str) -> Result<OrderDetail, OrderError> {
        let identifier = raw.trim();
        if identifier.is_empty() {
            return Err(OrderError::Validation(MSG_LOOKUP_EMPTY.to_string()));
        }
        match self.api.lookup(identifier).await {
            Ok(detail) => Ok(detail),
            Err(e) if e.is_not_found() => Err(OrderError::NotFound),
            Err(e) => Err(OrderError::Request(e)),
        }
    }

    pub async fn append_progress(
        &self,
        order_id: i64,
        form: &ProgressForm,
    ) -> Result<ProgressEntry, OrderError> {
        let payload = form.to_payload();
        payload.validate()?;
        let entry = self.api.add_progress(order_id, &payload).await?;
        tracing::info!(order_id, entry_id = entry.id, "Progress appended");
        Ok(entry)
    }
}
