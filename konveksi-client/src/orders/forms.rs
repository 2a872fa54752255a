use shared::models::{Order, OrderCreate, OrderStatus, OrderUpdate, ProgressCreate};
use shared::util::non_empty;

/// Editable order fields as typed by the admin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// Left blank to let the backend generate one
    pub order_code: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: String,
    pub status: OrderStatus,
}

impl OrderForm {
    /// Seed the form from an existing row
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_code: order.order_code.clone(),
            customer_name: order.customer_name.clone(),
            customer_phone: order.customer_phone.clone().unwrap_or_default(),
            customer_address: order.customer_address.clone().unwrap_or_default(),
            notes: order.notes.clone().unwrap_or_default(),
            status: order.status,
        }
    }

    /// Create payload; blank optional fields are omitted
    pub fn to_create(&self) -> OrderCreate {
        OrderCreate {
            order_code: non_empty(&self.order_code),
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: non_empty(&self.customer_phone),
            customer_address: non_empty(&self.customer_address),
            notes: non_empty(&self.notes),
            status: Some(self.status),
        }
    }

    /// Update payload; blank fields are omitted and keep their stored value
    pub fn to_update(&self) -> OrderUpdate {
        OrderUpdate {
            order_code: non_empty(&self.order_code),
            customer_name: Some(self.customer_name.trim().to_string()),
            customer_phone: non_empty(&self.customer_phone),
            customer_address: non_empty(&self.customer_address),
            notes: non_empty(&self.notes),
            status: Some(self.status),
        }
    }
}

/// New timeline entry as typed by the admin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressForm {
    pub status: String,
    pub description: String,
}

impl ProgressForm {
    pub fn to_payload(&self) -> ProgressCreate {
        ProgressCreate {
            status: non_empty(&self.status),
            description: non_empty(&self.description),
        }
    }

    pub fn clear(&mut self) {
        self.status.clear();
        self.description.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.status.trim().is_empty() && self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use validator::Validate;

    #[test]
    fn test_default_form_is_pending() {
        let form = OrderForm::default();
        assert_eq!(form.status, OrderStatus::Pending);
        assert!(form.to_create().validate().is_err());
    }

    #[test]
    fn test_create_payload_trims_and_omits() {
        let form = OrderForm {
            customer_name: "  Budi  ".into(),
            customer_phone: "   ".into(),
            notes: "Seragam 30 pcs".into(),
            ..Default::default()
        };
        let payload = form.to_create();
        assert_eq!(payload.customer_name, "Budi");
        assert_eq!(payload.order_code, None);
        assert_eq!(payload.customer_phone, None);
        assert_eq!(payload.notes.as_deref(), Some("Seragam 30 pcs"));
        assert_eq!(payload.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn test_form_round_trips_an_order() {
        let order = Order {
            id: 3,
            order_code: "K99-20250217-003".into(),
            customer_name: "Sari".into(),
            customer_phone: Some("0812".into()),
            customer_address: None,
            notes: None,
            status: OrderStatus::Proses,
            created_at: Utc::now(),
        };
        let form = OrderForm::from_order(&order);
        assert_eq!(form.customer_address, "");

        let update = form.to_update();
        assert_eq!(update.order_code.as_deref(), Some("K99-20250217-003"));
        assert_eq!(update.customer_phone.as_deref(), Some("0812"));
        assert_eq!(update.customer_address, None);
        assert_eq!(update.status, Some(OrderStatus::Proses));
    }

    #[test]
    fn test_update_payload_omits_blank_fields() {
        let form = OrderForm {
            customer_name: "Budi".into(),
            customer_phone: "   ".into(),
            notes: String::new(),
            ..Default::default()
        };
        let json = serde_json::to_value(form.to_update()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "customer_name": "Budi", "status": "pending" })
        );
    }

    #[test]
    fn test_progress_form() {
        let mut form = ProgressForm {
            status: " Desain disetujui ".into(),
            description: "  ".into(),
        };
        assert!(!form.is_blank());
        let payload = form.to_payload();
        assert_eq!(payload.status.as_deref(), Some("Desain disetujui"));
        assert_eq!(payload.description, None);

        form.clear();
        assert!(form.is_blank());
        assert!(form.to_payload().validate().is_err());
    }
}
