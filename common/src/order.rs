use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Price;
use crate::product::{Product, ProductId};

/// Backend-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// First eight characters, as shown in `Order #abcd1234`.
    pub fn short(&self) -> &str {
        short_id(&self.0)
    }
}

pub(crate) fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Fulfilment stage of an order.
///
/// The backend column is free text; labels outside the known set are kept
/// verbatim in `Unknown` so they display and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Unknown(String),
}

/// Badge colour for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Blue,
    Red,
    Gray,
}

impl StatusColor {
    pub fn class(self) -> &'static str {
        match self {
            StatusColor::Green => "status-green",
            StatusColor::Yellow => "status-yellow",
            StatusColor::Blue => "status-blue",
            StatusColor::Red => "status-red",
            StatusColor::Gray => "status-gray",
        }
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(label) => label,
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            OrderStatus::Completed => StatusColor::Green,
            OrderStatus::Pending => StatusColor::Yellow,
            OrderStatus::InProgress => StatusColor::Blue,
            OrderStatus::Cancelled => StatusColor::Red,
            OrderStatus::Unknown(_) => StatusColor::Gray,
        }
    }

    /// Badge text for custom orders: the first underscore becomes a space.
    pub fn spaced_label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "pending" => OrderStatus::Pending,
            "in_progress" => OrderStatus::InProgress,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown(label),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// A row of the `orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_price: Price,
    pub quantity: u32,
    pub total_amount: Price,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: OrderStatus,
    /// Reserved for a payment provider; never written by this client.
    #[serde(rename = "stripe_payment_intent_id", default)]
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Notes worth showing: present and non-empty.
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Insert payload for `orders`. `id` and `created_at` are filled in by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_price: Price,
    pub quantity: u32,
    pub total_amount: Price,
    pub notes: String,
    pub status: OrderStatus,
}

impl NewOrder {
    /// Snapshot `product` at its current price. The total is computed here and
    /// nowhere else.
    pub fn for_product(
        product: &Product,
        customer_name: String,
        customer_email: String,
        quantity: u32,
        notes: String,
    ) -> Self {
        Self {
            customer_name,
            customer_email,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_price: product.price,
            quantity,
            total_amount: product.price.times(quantity),
            notes,
            status: OrderStatus::Pending,
        }
    }
}
