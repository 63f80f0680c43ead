use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Serialize;

use designhub_common::custom_order::{CustomOrder, NewCustomOrder};
use designhub_common::history::HistoryResults;
use designhub_common::order::{NewOrder, Order};
use designhub_common::product::Product;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::query::{Query, CUSTOM_ORDERS, ORDERS, PRODUCTS};

/// Shared handle to the hosted backend.
///
/// Cheap to clone; clones share the underlying connection pool. No retry and
/// no timeout override: the HTTP stack's defaults apply.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            rest_url: config.rest_url(),
            api_key: config.api_key.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.rest_url, collection)
    }

    fn request(&self, method: reqwest::Method, collection: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.collection_url(collection))
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// Read rows of `collection` matching `query`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<T>, BackendError> {
        tracing::debug!(collection, ?query, "select");
        let resp = self
            .request(reqwest::Method::GET, collection)
            .query(&query.pairs())
            .send()
            .await
            .map_err(|source| BackendError::Http {
                collection: collection.to_string(),
                source,
            })?;

        let body = read_body(collection, resp).await?;
        serde_json::from_str(&body).map_err(|source| BackendError::Decode {
            collection: collection.to_string(),
            source,
        })
    }

    /// Insert one row into `collection`. The backend's copy is not returned.
    pub async fn insert<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        row: &T,
    ) -> Result<(), BackendError> {
        tracing::debug!(collection, "insert");
        // A row that fails to serialize surfaces when the request is built.
        let request = self
            .request(reqwest::Method::POST, collection)
            .header("Prefer", "return=minimal")
            .json(row)
            .build()
            .map_err(|source| BackendError::Encode {
                collection: collection.to_string(),
                source,
            })?;
        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|source| BackendError::Http {
                collection: collection.to_string(),
                source,
            })?;

        read_body(collection, resp).await?;
        Ok(())
    }

    /// Every catalog row, newest first. No pagination.
    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        self.select(PRODUCTS, &Query::new().newest_first()).await
    }

    pub async fn insert_order(&self, order: &NewOrder) -> Result<(), BackendError> {
        self.insert(ORDERS, order).await
    }

    pub async fn insert_custom_order(&self, order: &NewCustomOrder) -> Result<(), BackendError> {
        self.insert(CUSTOM_ORDERS, order).await
    }

    pub async fn orders_for_email(&self, email: &str) -> Result<Vec<Order>, BackendError> {
        let query = Query::new().eq("customer_email", email).newest_first();
        self.select(ORDERS, &query).await
    }

    pub async fn custom_orders_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<CustomOrder>, BackendError> {
        let query = Query::new().eq("customer_email", email).newest_first();
        self.select(CUSTOM_ORDERS, &query).await
    }

    /// Both order kinds for `email`, read one after the other. The first
    /// failing read aborts the lookup and neither result set is returned.
    pub async fn order_history(&self, email: &str) -> Result<HistoryResults, BackendError> {
        let orders = self.orders_for_email(email).await?;
        let custom_orders = self.custom_orders_for_email(email).await?;
        Ok(HistoryResults {
            orders,
            custom_orders,
        })
    }
}

/// Read the response body, turning non-2xx replies into `Status` errors.
async fn read_body(collection: &str, resp: reqwest::Response) -> Result<String, BackendError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|source| BackendError::Http {
        collection: collection.to_string(),
        source,
    })?;
    if !status.is_success() {
        tracing::warn!(collection, status = status.as_u16(), "backend rejected request");
        return Err(BackendError::Status {
            collection: collection.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
