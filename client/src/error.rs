use thiserror::Error;

/// Failure of a single backend call. None of these are retried.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {collection} failed: {source}")]
    Http {
        collection: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{collection} returned HTTP {status}: {body}")]
    Status {
        collection: String,
        status: u16,
        body: String,
    },
    #[error("could not encode {collection} row: {source}")]
    Encode {
        collection: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode {collection} rows: {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    pub fn collection(&self) -> &str {
        match self {
            BackendError::Http { collection, .. }
            | BackendError::Status { collection, .. }
            | BackendError::Encode { collection, .. }
            | BackendError::Decode { collection, .. } => collection,
        }
    }
}
