//! Data access for the DesignHub storefront.
//!
//! All persistence lives in a hosted PostgREST endpoint. This crate holds the
//! one shared handle to it: configuration, query construction and the typed
//! read/insert operations for each collection.

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::BackendClient;
pub use config::{BackendConfig, ConfigError};
pub use error::BackendError;
pub use query::{Direction, Query};
