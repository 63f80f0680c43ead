use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Price;

/// Backend-assigned product identifier (a UUID string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

/// A catalog entry from the `products` collection. Never written by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub description: String,
    pub price: Price,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub image_url: String,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
