//! Order Model
//!
//! An order is a customer job tracked by the workshop. Its progress is an
//! append-only list of [`ProgressEntry`] values owned by the backend.
//!
//! `Order.status` and `ProgressEntry.status` are separate vocabularies with
//! separate update paths; nothing here derives one from the other.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Shown when an order form is submitted without a customer name
pub const MSG_CUSTOMER_NAME_REQUIRED: &str = "Nama pelanggan wajib diisi.";
/// Shown when a progress form has neither status nor description
pub const MSG_PROGRESS_EMPTY: &str = "Isi minimal status atau deskripsi progress.";
/// Shown when a public lookup is submitted without an identifier
pub const MSG_LOOKUP_EMPTY: &str = "Masukkan ID / Kode Order terlebih dahulu.";

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Proses,
    Selesai,
    Batal,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Proses,
        OrderStatus::Selesai,
        OrderStatus::Batal,
    ];

    /// Wire value (`pending`, `proses`, ...)
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Proses => "proses",
            OrderStatus::Selesai => "selesai",
            OrderStatus::Batal => "batal",
        }
    }

    /// Human-readable label for list badges and the public status page
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Proses => "Dalam Proses",
            OrderStatus::Selesai => "Selesai",
            OrderStatus::Batal => "Dibatalkan",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside the enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Shareable code, e.g. `K99-20250217-001`
    pub order_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// One immutable step in an order's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: i64,
    pub order_id: i64,
    /// Free-text step label (not an [`OrderStatus`])
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Order header plus its timeline, oldest entry first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: Order,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

/// Create order payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    /// Server generates one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_code: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Update order payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_code: Option<String>,
    #[validate(custom(function = "not_blank"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Append progress payload. At least one field must carry text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "has_progress_content"))]
pub struct ProgressCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Admin list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Admin list page size
pub const ORDER_PAGE_SIZE: u32 = 10;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    ORDER_PAGE_SIZE
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed(MSG_CUSTOMER_NAME_REQUIRED));
        return Err(err);
    }
    Ok(())
}

fn has_progress_content(progress: &ProgressCreate) -> Result<(), ValidationError> {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !filled(&progress.status) && !filled(&progress.description) {
        let mut err = ValidationError::new("progress_empty");
        err.message = Some(Cow::Borrowed(MSG_PROGRESS_EMPTY));
        return Err(err);
    }
    Ok(())
}

/// First human-readable message out of a validation failure
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Proses).unwrap();
        assert_eq!(json, "\"proses\"");

        let status: OrderStatus = serde_json::from_str("\"batal\"").unwrap();
        assert_eq!(status, OrderStatus::Batal);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("selesai".parse::<OrderStatus>(), Ok(OrderStatus::Selesai));
        assert!("Desain disetujui".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Proses.label(), "Dalam Proses");
    }

    #[test]
    fn test_order_create_requires_name() {
        let payload = OrderCreate {
            customer_name: "   ".to_string(),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(validation_message(&errors), MSG_CUSTOMER_NAME_REQUIRED);

        let payload = OrderCreate {
            customer_name: "Budi".to_string(),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_order_create_omits_empty_optionals() {
        let payload = OrderCreate {
            customer_name: "Budi".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "customer_name": "Budi" }));
    }

    #[test]
    fn test_order_update_skips_absent_name() {
        assert!(OrderUpdate::default().validate().is_ok());

        let update = OrderUpdate {
            customer_name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_progress_needs_status_or_description() {
        let errors = ProgressCreate::default().validate().unwrap_err();
        assert_eq!(validation_message(&errors), MSG_PROGRESS_EMPTY);

        let blank = ProgressCreate {
            status: Some("  ".to_string()),
            description: Some(String::new()),
        };
        assert!(blank.validate().is_err());

        let only_description = ProgressCreate {
            status: None,
            description: Some("Sedang dijahit".to_string()),
        };
        assert!(only_description.validate().is_ok());
    }

    #[test]
    fn test_order_detail_defaults_missing_progress() {
        let json = r#"{
            "order": {
                "id": 7,
                "order_code": "K99-20250217-001",
                "customer_name": "Budi",
                "created_at": "2025-02-17T02:30:00Z"
            }
        }"#;
        let detail: OrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.order.status, OrderStatus::Pending);
        assert!(detail.order.customer_phone.is_none());
        assert!(detail.progress.is_empty());
    }
}
