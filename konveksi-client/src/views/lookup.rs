//! Public order lookup
//!
//! Customers paste the code (or id) they got from the workshop and see the
//! order header plus its timeline. Read-only.

use std::sync::Arc;

use shared::models::OrderDetail;

use super::ViewScope;
use super::messages::{LOOKUP_FAILED, LOOKUP_NOT_FOUND, MSG_LOOKUP_EMPTY};
use super::scope::ScopeHandle;
use crate::orders::{OrderError, OrderService};
use crate::HttpClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Found(OrderDetail),
    NotFound(String),
    Failed(String),
}

impl LookupState {
    pub fn detail(&self) -> Option<&OrderDetail> {
        match self {
            Self::Found(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::NotFound(msg) | Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

pub struct OrderLookupView<C> {
    service: OrderService<C>,
    scope: ViewScope,
    input: String,
    state: LookupState,
    hint: Option<String>,
}

impl<C: HttpClient> OrderLookupView<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            service: OrderService::new(http),
            scope: ViewScope::new(),
            input: String::new(),
            state: LookupState::Idle,
            hint: None,
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Inline hint shown next to the input
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn scope_handle(&self) -> ScopeHandle {
        self.scope.handle()
    }

    /// Look the typed identifier up, replacing any previous result
    pub async fn submit(&mut self) {
        let identifier = self.input.trim().to_string();
        if identifier.is_empty() {
            self.hint = Some(MSG_LOOKUP_EMPTY.to_string());
            return;
        }
        self.hint = None;
        self.state = LookupState::Loading;

        let Some(result) = self.scope.run(self.service.lookup_public(&identifier)).await else {
            return;
        };

        self.state = match result {
            Ok(detail) => LookupState::Found(detail),
            Err(OrderError::NotFound) => {
                tracing::info!(identifier = %identifier, "Order lookup found nothing");
                LookupState::NotFound(LOOKUP_NOT_FOUND.to_string())
            }
            Err(e) => {
                tracing::error!(
                    identifier = %identifier,
                    status = ?e.status(),
                    error = %e,
                    "Order lookup failed"
                );
                LookupState::Failed(LOOKUP_FAILED.to_string())
            }
        };
    }
}
