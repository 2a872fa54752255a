//! In-memory backend state
//!
//! [`Store`] holds the data and the business rules and is plain synchronous
//! code. [`MockState`] wraps it for the axum handlers and adds the test hooks:
//! a request log and one-shot failure injection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use http::StatusCode;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Banner, CompanySettings, MSG_CUSTOMER_NAME_REQUIRED, MSG_PROGRESS_EMPTY, Order, OrderCreate,
    OrderDetail, OrderListQuery, OrderStatus, OrderUpdate, Product, ProgressCreate, ProgressEntry,
};
use shared::util::{local_date, non_empty_opt};
use shared::Pagination;
use tokio::sync::RwLock;
use validator::Validate;

/// Upper bound on `limit` for list endpoints
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Prefix of generated order codes
pub const ORDER_CODE_PREFIX: &str = "K99";

fn order_not_found() -> AppError {
    AppError::new(ErrorCode::OrderNotFound)
}

fn code_exists(code: &str) -> AppError {
    AppError::with_message(
        ErrorCode::OrderCodeExists,
        format!("Kode order {} sudah digunakan.", code),
    )
    .with_detail("order_code", code)
}

fn name_required() -> AppError {
    AppError::with_message(ErrorCode::CustomerNameRequired, MSG_CUSTOMER_NAME_REQUIRED)
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct Store {
    orders: Vec<Order>,
    progress: Vec<ProgressEntry>,
    next_order_id: i64,
    next_progress_id: i64,
    pub banners: Vec<Banner>,
    pub products: Vec<Product>,
    pub settings: CompanySettings,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            progress: Vec::new(),
            next_order_id: 1,
            next_progress_id: 1,
            banners: Vec::new(),
            products: Vec::new(),
            settings: CompanySettings::default(),
        }
    }
}

impl Store {
    /// Empty order book with a small demo catalog
    pub fn with_demo_catalog() -> Self {
        Self {
            banners: vec![
                Banner {
                    id: 1,
                    title: Some("Solusi Industri".into()),
                    subtitle: Some("Terpercaya".into()),
                    description: Some("Produksi seragam dan kaos custom untuk instansi.".into()),
                    image: Some("/uploads/banner-1.jpg".into()),
                    link: Some("/products".into()),
                    button_text: Some("Lihat Produk".into()),
                },
                Banner {
                    id: 2,
                    title: Some("Sablon & Bordir".into()),
                    ..Default::default()
                },
            ],
            products: (1..=8)
                .map(|i| Product {
                    id: i,
                    title: format!("Produk {}", i),
                    slug: Some(format!("produk-{}", i)),
                    description: None,
                    image: None,
                    created_at: None,
                })
                .collect(),
            settings: CompanySettings {
                company_name: Some("Konveksi 99".into()),
                company_phone: Some("0812-0000-0099".into()),
                company_working_hours: Some("Senin - Sabtu, 08.00 - 17.00".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(order_not_found)
    }

    fn code_taken(&self, code: &str, except: Option<i64>) -> bool {
        self.orders
            .iter()
            .any(|o| Some(o.id) != except && o.order_code.eq_ignore_ascii_case(code))
    }

    /// Next free `K99-YYYYMMDD-NNN` for the local day of `now`
    pub fn next_order_code(&self, now: DateTime<Utc>) -> String {
        let prefix = format!(
            "{}-{}-",
            ORDER_CODE_PREFIX,
            local_date(&now).format("%Y%m%d")
        );
        let mut seq = self
            .orders
            .iter()
            .filter(|o| o.order_code.starts_with(&prefix))
            .count()
            + 1;
        loop {
            let code = format!("{}{:03}", prefix, seq);
            if !self.code_taken(&code, None) {
                return code;
            }
            seq += 1;
        }
    }

    pub fn create_order(&mut self, payload: OrderCreate, now: DateTime<Utc>) -> AppResult<Order> {
        payload.validate().map_err(|_| name_required())?;

        let order_code = match non_empty_opt(payload.order_code.as_deref()) {
            Some(code) if self.code_taken(&code, None) => return Err(code_exists(&code)),
            Some(code) => code,
            None => self.next_order_code(now),
        };

        let order = Order {
            id: self.next_order_id,
            order_code,
            customer_name: payload.customer_name.trim().to_string(),
            customer_phone: non_empty_opt(payload.customer_phone.as_deref()),
            customer_address: non_empty_opt(payload.customer_address.as_deref()),
            notes: non_empty_opt(payload.notes.as_deref()),
            status: payload.status.unwrap_or_default(),
            created_at: now,
        };
        self.next_order_id += 1;
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Partial update; absent or blank fields keep their stored value
    pub fn update_order(&mut self, id: i64, payload: OrderUpdate) -> AppResult<Order> {
        payload.validate().map_err(|_| name_required())?;
        let idx = self.position(id)?;

        let new_code = non_empty_opt(payload.order_code.as_deref());
        if let Some(code) = &new_code
            && self.code_taken(code, Some(id))
        {
            return Err(code_exists(code));
        }

        let order = &mut self.orders[idx];
        if let Some(code) = new_code {
            order.order_code = code;
        }
        if let Some(name) = payload.customer_name {
            order.customer_name = name.trim().to_string();
        }
        if let Some(phone) = non_empty_opt(payload.customer_phone.as_deref()) {
            order.customer_phone = Some(phone);
        }
        if let Some(address) = non_empty_opt(payload.customer_address.as_deref()) {
            order.customer_address = Some(address);
        }
        if let Some(notes) = non_empty_opt(payload.notes.as_deref()) {
            order.notes = Some(notes);
        }
        if let Some(status) = payload.status {
            order.status = status;
        }
        Ok(order.clone())
    }

    /// Newest first, filtered by code, name or phone (case-insensitive)
    pub fn list_orders(&self, query: &OrderListQuery) -> (Vec<Order>, Pagination) {
        let needle = non_empty_opt(query.search.as_deref()).map(|s| s.to_lowercase());
        let mut matched: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| needle.as_deref().is_none_or(|n| order_matches(o, n)))
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let page = query.page.max(1);
        let limit = query.limit.clamp(1, MAX_PAGE_LIMIT);
        let total = matched.len() as u64;
        let skip = (page as usize - 1) * limit as usize;
        let items = matched
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, Pagination::new(page, limit, total))
    }

    fn timeline(&self, order_id: i64) -> Vec<ProgressEntry> {
        let mut entries: Vec<ProgressEntry> = self
            .progress
            .iter()
            .filter(|p| p.order_id == order_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        entries
    }

    pub fn order_detail(&self, id: i64) -> AppResult<OrderDetail> {
        let idx = self.position(id)?;
        Ok(OrderDetail {
            order: self.orders[idx].clone(),
            progress: self.timeline(id),
        })
    }

    /// Public lookup: order code first, then numeric id
    pub fn lookup(&self, identifier: &str) -> AppResult<OrderDetail> {
        let identifier = identifier.trim();
        let by_code = self
            .orders
            .iter()
            .find(|o| o.order_code.eq_ignore_ascii_case(identifier));
        let order = match by_code {
            Some(order) => order,
            None => {
                let id: i64 = identifier.parse().map_err(|_| order_not_found())?;
                &self.orders[self.position(id)?]
            }
        };
        Ok(OrderDetail {
            order: order.clone(),
            progress: self.timeline(order.id),
        })
    }

    /// Append a timeline entry
    ///
    /// When the entry's status text is exactly an order status value, the
    /// order is moved to that status.
    pub fn add_progress(
        &mut self,
        order_id: i64,
        payload: ProgressCreate,
        now: DateTime<Utc>,
    ) -> AppResult<ProgressEntry> {
        payload
            .validate()
            .map_err(|_| AppError::with_message(ErrorCode::ProgressEmpty, MSG_PROGRESS_EMPTY))?;
        let idx = self.position(order_id)?;

        let entry = ProgressEntry {
            id: self.next_progress_id,
            order_id,
            status: non_empty_opt(payload.status.as_deref()),
            description: non_empty_opt(payload.description.as_deref()),
            created_at: now,
        };
        self.next_progress_id += 1;

        if let Some(status) = entry
            .status
            .as_deref()
            .and_then(|s| s.parse::<OrderStatus>().ok())
        {
            self.orders[idx].status = status;
        }

        self.progress.push(entry.clone());
        Ok(entry)
    }

    pub fn products_page(&self, page: u32, limit: u32) -> (Vec<Product>, Pagination) {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let items = self
            .products
            .iter()
            .skip((page as usize - 1) * limit as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        (
            items,
            Pagination::new(page, limit, self.products.len() as u64),
        )
    }
}

fn order_matches(order: &Order, needle: &str) -> bool {
    order.order_code.to_lowercase().contains(needle)
        || order.customer_name.to_lowercase().contains(needle)
        || order
            .customer_phone
            .as_deref()
            .is_some_and(|p| p.to_lowercase().contains(needle))
}

// ============================================================================
// Shared handler state
// ============================================================================

/// One request as seen by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct InjectedFailure {
    pub status: StatusCode,
    pub message: Option<String>,
}

#[derive(Debug)]
struct Inner {
    store: RwLock<Store>,
    admin_token: Option<String>,
    requests: Mutex<Vec<RecordedRequest>>,
    fail_next: Mutex<Option<InjectedFailure>>,
}

/// Cheaply cloneable handle shared by all handlers
#[derive(Debug, Clone)]
pub struct MockState {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockState {
    /// Admin routes are open when `admin_token` is `None`
    pub fn new(admin_token: Option<String>) -> Self {
        Self::with_store(Store::with_demo_catalog(), admin_token)
    }

    pub fn with_store(store: Store, admin_token: Option<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: RwLock::new(store),
                admin_token,
                requests: Mutex::new(Vec::new()),
                fail_next: Mutex::new(None),
            }),
        }
    }

    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.inner.admin_token.as_deref()
    }

    pub fn record(&self, method: &str, path: &str) {
        lock(&self.inner.requests).push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
        });
    }

    /// Every request seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.inner.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.inner.requests).len()
    }

    pub fn clear_requests(&self) {
        lock(&self.inner.requests).clear();
    }

    /// Make the next request fail with `status` and an empty error body
    pub fn fail_next(&self, status: StatusCode) {
        *lock(&self.inner.fail_next) = Some(InjectedFailure {
            status,
            message: None,
        });
    }

    /// Make the next request fail with `status` and `message` in the body
    pub fn fail_next_with(&self, status: StatusCode, message: impl Into<String>) {
        *lock(&self.inner.fail_next) = Some(InjectedFailure {
            status,
            message: Some(message.into()),
        });
    }

    pub fn take_failure(&self) -> Option<InjectedFailure> {
        lock(&self.inner.fail_next).take()
    }
}
