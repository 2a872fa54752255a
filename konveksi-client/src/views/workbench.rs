//! Admin order workbench
//!
//! One paginated, searchable order list plus two independent modals: the
//! order editor (create/edit) and the progress panel (timeline + append form).
//! Either modal can be open while the list stays put underneath.

use std::sync::Arc;

use shared::models::{ORDER_PAGE_SIZE, Order, OrderListQuery, ProgressEntry};
use shared::util::non_empty;

use super::ViewScope;
use super::messages::{
    ORDER_CREATED, ORDER_LOAD_FAILED, ORDER_SAVE_FAILED, ORDER_UPDATED, PROGRESS_SAVE_FAILED,
};
use super::scope::ScopeHandle;
use crate::orders::{OrderError, OrderForm, OrderService, ProgressForm, Timeline};
use crate::HttpClient;

/// Whether the list is filtered by a committed search term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Idle,
    Searching,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Create,
    /// Row snapshot the editor was opened from
    Edit(Order),
}

/// Open order editor
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEditor {
    pub mode: EditorMode,
    pub form: OrderForm,
    /// Inline error from the last submit
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OrderModal {
    #[default]
    Closed,
    Open(OrderEditor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Loading,
    Ready,
}

/// Open progress panel for one order
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPanel {
    /// Row snapshot until the detail fetch lands, then the backend's copy
    pub order: Order,
    pub phase: ProgressPhase,
    pub timeline: Timeline,
    pub form: ProgressForm,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProgressModal {
    #[default]
    Closed,
    Open(ProgressPanel),
}

pub struct OrderWorkbench<C> {
    service: OrderService<C>,
    scope: ViewScope,
    orders: Vec<Order>,
    page: u32,
    total_pages: u32,
    search_input: String,
    search_term: String,
    loading: bool,
    order_modal: OrderModal,
    progress_modal: ProgressModal,
    notice: Option<String>,
}

impl<C: HttpClient> OrderWorkbench<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self::with_service(OrderService::new(http))
    }

    pub fn with_service(service: OrderService<C>) -> Self {
        Self {
            service,
            scope: ViewScope::new(),
            orders: Vec::new(),
            page: 1,
            total_pages: 1,
            search_input: String::new(),
            search_term: String::new(),
            loading: false,
            order_modal: OrderModal::Closed,
            progress_modal: ProgressModal::Closed,
            notice: None,
        }
    }

    // ==================== Getters ====================

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Term the current list was fetched with
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn list_mode(&self) -> ListMode {
        if self.search_term.is_empty() {
            ListMode::Idle
        } else {
            ListMode::Searching
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn order_modal(&self) -> &OrderModal {
        &self.order_modal
    }

    pub fn progress_modal(&self) -> &ProgressModal {
        &self.progress_modal
    }

    /// Last success notice, e.g. after saving an order
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn scope_handle(&self) -> ScopeHandle {
        self.scope.handle()
    }

    // ==================== List ====================

    /// Initial fetch when the screen mounts
    pub async fn load(&mut self) {
        self.fetch_list().await;
    }

    /// Buffer typed search text; nothing is fetched until [`Self::submit_search`]
    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub async fn submit_search(&mut self) {
        self.search_term = self.search_input.trim().to_string();
        self.page = 1;
        self.fetch_list().await;
    }

    /// Pages outside `1..=total_pages` and the current page are ignored
    pub async fn go_to_page(&mut self, page: u32) {
        if page == 0 || page > self.total_pages.max(1) || page == self.page {
            tracing::debug!(page, total_pages = self.total_pages, "Ignoring page change");
            return;
        }
        self.page = page;
        self.fetch_list().await;
    }

    async fn fetch_list(&mut self) {
        let query = OrderListQuery {
            page: self.page,
            limit: ORDER_PAGE_SIZE,
            search: non_empty(&self.search_term),
        };
        self.loading = true;

        let Some(result) = self.scope.run(self.service.list(&query)).await else {
            return;
        };
        self.loading = false;

        match result {
            Ok(page) => {
                self.total_pages = page.total_pages();
                self.orders = page.items;
            }
            Err(e) => {
                tracing::error!(error = %e, page = self.page, "Failed to load orders");
                self.orders.clear();
            }
        }
    }

    // ==================== Order editor ====================

    pub fn open_create(&mut self) {
        self.notice = None;
        self.order_modal = OrderModal::Open(OrderEditor {
            mode: EditorMode::Create,
            form: OrderForm::default(),
            error: None,
        });
    }

    pub fn open_edit(&mut self, order: &Order) {
        self.notice = None;
        self.order_modal = OrderModal::Open(OrderEditor {
            mode: EditorMode::Edit(order.clone()),
            form: OrderForm::from_order(order),
            error: None,
        });
    }

    pub fn order_form_mut(&mut self) -> Option<&mut OrderForm> {
        match &mut self.order_modal {
            OrderModal::Open(editor) => Some(&mut editor.form),
            OrderModal::Closed => None,
        }
    }

    /// Discards the form without asking
    pub fn close_order_modal(&mut self) {
        self.order_modal = OrderModal::Closed;
    }

    pub async fn submit_order_form(&mut self) {
        let OrderModal::Open(editor) = &mut self.order_modal else {
            return;
        };
        editor.error = None;
        let form = editor.form.clone();
        let editing = match &editor.mode {
            EditorMode::Create => None,
            EditorMode::Edit(order) => Some(order.id),
        };

        let save = async {
            match editing {
                Some(id) => self.service.update(id, &form).await,
                None => self.service.create(&form).await,
            }
        };
        let Some(result) = self.scope.run(save).await else {
            return;
        };

        match result {
            Ok(_) => {
                // the table is refreshed before the modal goes away
                self.fetch_list().await;
                if !self.scope.is_active() {
                    return;
                }
                let notice = if editing.is_some() {
                    ORDER_UPDATED
                } else {
                    ORDER_CREATED
                };
                self.order_modal = OrderModal::Closed;
                self.notice = Some(notice.to_string());
            }
            Err(e) => {
                log_save_error(&e, "order");
                if let OrderModal::Open(editor) = &mut self.order_modal {
                    editor.error = Some(e.user_message(ORDER_SAVE_FAILED));
                }
            }
        }
    }

    // ==================== Progress panel ====================

    pub async fn open_progress(&mut self, order: &Order) {
        self.progress_modal = ProgressModal::Open(ProgressPanel {
            order: order.clone(),
            phase: ProgressPhase::Loading,
            timeline: Timeline::new(),
            form: ProgressForm::default(),
            error: None,
        });

        let Some(result) = self.scope.run(self.service.fetch_one(order.id)).await else {
            return;
        };
        let ProgressModal::Open(panel) = &mut self.progress_modal else {
            return;
        };

        match result {
            Ok(detail) => {
                panel.order = detail.order;
                panel.timeline = Timeline::from_entries(detail.progress);
            }
            Err(e) => {
                tracing::error!(order_id = order.id, error = %e, "Failed to load order detail");
                panel.timeline = Timeline::new();
                panel.error = Some(e.user_message(ORDER_LOAD_FAILED));
            }
        }
        panel.phase = ProgressPhase::Ready;
    }

    pub fn progress_form_mut(&mut self) -> Option<&mut ProgressForm> {
        match &mut self.progress_modal {
            ProgressModal::Open(panel) => Some(&mut panel.form),
            ProgressModal::Closed => None,
        }
    }

    /// Discards the form and timeline without asking
    pub fn close_progress_modal(&mut self) {
        self.progress_modal = ProgressModal::Closed;
    }

    /// Append the typed entry; the panel stays open on success
    pub async fn submit_progress(&mut self) {
        let ProgressModal::Open(panel) = &mut self.progress_modal else {
            return;
        };
        if panel.phase != ProgressPhase::Ready {
            return;
        }
        panel.error = None;
        let order_id = panel.order.id;
        let form = panel.form.clone();

        let Some(result) = self
            .scope
            .run(self.service.append_progress(order_id, &form))
            .await
        else {
            return;
        };

        match result {
            Ok(entry) => {
                self.append_and_reflect_locally(entry);
                self.refresh_order_summary().await;
            }
            Err(e) => {
                log_save_error(&e, "progress");
                if let ProgressModal::Open(panel) = &mut self.progress_modal {
                    panel.error = Some(e.user_message(PROGRESS_SAVE_FAILED));
                }
            }
        }
    }

    /// Push a saved entry onto the open panel's timeline and clear the form
    pub fn append_and_reflect_locally(&mut self, entry: ProgressEntry) {
        let ProgressModal::Open(panel) = &mut self.progress_modal else {
            return;
        };
        if panel.order.id != entry.order_id {
            tracing::warn!(
                panel_order = panel.order.id,
                entry_order = entry.order_id,
                "Entry belongs to another order"
            );
            return;
        }
        panel.timeline.append(entry);
        panel.form.clear();
    }

    /// Refetch the current list page so the row reflects backend changes
    pub async fn refresh_order_summary(&mut self) {
        self.fetch_list().await;
    }
}

fn log_save_error(err: &OrderError, what: &str) {
    if err.is_validation() {
        tracing::debug!(error = %err, what, "Rejected before submit");
    } else {
        tracing::error!(status = ?err.status(), error = %err, what, "Save failed");
    }
}
