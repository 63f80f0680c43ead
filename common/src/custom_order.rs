use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Price;
use crate::order::{short_id, OrderStatus};

/// Backend-assigned custom order identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomOrderId(pub String);

impl CustomOrderId {
    pub fn short(&self) -> &str {
        short_id(&self.0)
    }
}

/// A free-text request from the `custom_orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomOrder {
    pub id: CustomOrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub description: String,
    pub status: OrderStatus,
    /// Quoted by staff after review; absent until then.
    #[serde(default)]
    pub estimated_price: Option<Price>,
    pub created_at: DateTime<Utc>,
}

impl CustomOrder {
    /// A zero estimate is treated the same as no estimate.
    pub fn visible_estimate(&self) -> Option<Price> {
        self.estimated_price.filter(|p| !p.is_zero())
    }
}

/// Insert payload for `custom_orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub description: String,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_custom_order_row() {
        let row = r#"{
            "id": "ffee0011-2233-4455-6677-8899aabbccdd",
            "customer_name": "Sam",
            "customer_email": "sam@example.com",
            "description": "A mascot for our bakery",
            "status": "in_progress",
            "estimated_price": 320.5,
            "created_at": "2025-02-01T09:00:00+00:00"
        }"#;
        let order: CustomOrder = serde_json::from_str(row).unwrap();
        assert_eq!(order.id.short(), "ffee0011");
        assert_eq!(order.status.spaced_label(), "in progress");
        assert_eq!(order.visible_estimate(), Some(Price::from_cents(32_050)));
    }

    #[test]
    fn test_missing_and_zero_estimates_hidden() {
        let row = r#"{
            "id": "c-1",
            "customer_name": "Sam",
            "customer_email": "sam@example.com",
            "description": "Poster",
            "status": "pending",
            "estimated_price": null,
            "created_at": "2025-02-01T09:00:00Z"
        }"#;
        let mut order: CustomOrder = serde_json::from_str(row).unwrap();
        assert_eq!(order.visible_estimate(), None);
        order.estimated_price = Some(Price::ZERO);
        assert_eq!(order.visible_estimate(), None);
    }

    #[test]
    fn test_new_custom_order_payload() {
        let payload = NewCustomOrder {
            customer_name: "Sam".into(),
            customer_email: "sam@example.com".into(),
            description: "Poster".into(),
            status: OrderStatus::Pending,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], serde_json::json!("pending"));
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
