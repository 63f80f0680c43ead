//! In-process stand-in for the hosted REST endpoint.
//!
//! Serves `/rest/v1/{collection}` with just enough of the query syntax for the
//! storefront: `eq.` filters and `order=<column>.desc|asc`. Every request is
//! recorded so tests can assert on the wire shape.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use designhub_client::{BackendClient, BackendConfig};

pub const API_KEY: &str = "test-anon-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub collection: String,
    pub params: Vec<(String, String)>,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub prefer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    rows: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone, Default)]
pub struct StubBackend {
    inner: Arc<Mutex<Inner>>,
}

impl StubBackend {
    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .rows
            .entry(collection.to_string())
            .or_default()
            .extend(rows);
    }

    /// Make every request to `collection` answer HTTP 500.
    pub fn fail(&self, collection: &str) {
        self.inner
            .lock()
            .unwrap()
            .failing
            .insert(collection.to_string());
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Bind on an ephemeral port and return a client pointed at it.
    pub async fn start(&self) -> (BackendClient, SocketAddr) {
        let app = Router::new()
            .route("/rest/v1/{collection}", get(select_rows).post(insert_row))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = BackendConfig {
            endpoint: format!("http://{addr}"),
            api_key: API_KEY.to_string(),
        };
        (BackendClient::new(&config), addr)
    }

    fn record(
        &self,
        method: &'static str,
        collection: &str,
        params: &[(String, String)],
        headers: &HeaderMap,
        body: Option<Value>,
    ) -> bool {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method,
            collection: collection.to_string(),
            params: params.to_vec(),
            apikey: header("apikey"),
            authorization: header("authorization"),
            prefer: header("prefer"),
            body,
        });
        inner.failing.contains(collection)
    }
}

fn backend_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": "simulated failure" })),
    )
        .into_response()
}

async fn select_rows(
    State(stub): State<StubBackend>,
    Path(collection): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    if stub.record("GET", &collection, &params, &headers, None) {
        return backend_failure();
    }

    let mut rows = stub.rows(&collection);
    for (column, expr) in &params {
        if let Some(value) = expr.strip_prefix("eq.") {
            if column != "select" && column != "order" {
                rows.retain(|row| row.get(column).and_then(Value::as_str) == Some(value));
            }
        }
    }
    if let Some((_, order)) = params.iter().find(|(k, _)| k == "order") {
        if let Some((column, direction)) = order.rsplit_once('.') {
            rows.sort_by(|a, b| {
                let a = a.get(column).and_then(Value::as_str).unwrap_or_default();
                let b = b.get(column).and_then(Value::as_str).unwrap_or_default();
                a.cmp(b)
            });
            if direction == "desc" {
                rows.reverse();
            }
        }
    }
    Json(rows).into_response()
}

async fn insert_row(
    State(stub): State<StubBackend>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if stub.record("POST", &collection, &[], &headers, Some(body.clone())) {
        return backend_failure();
    }
    stub.seed(&collection, vec![body]);
    StatusCode::CREATED.into_response()
}
