use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the backend endpoint, e.g. `https://xyz.supabase.co`.
pub const URL_VAR: &str = "DESIGNHUB_SUPABASE_URL";
/// Environment variable holding the public (anon) API key.
pub const ANON_KEY_VAR: &str = "DESIGNHUB_SUPABASE_ANON_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Credentials for the hosted backend. Read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl BackendConfig {
    /// Read both credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read both credentials through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let endpoint = read(URL_VAR)?;
        let api_key = read(ANON_KEY_VAR)?;

        if Url::parse(&endpoint).is_err() {
            return Err(ConfigError::InvalidUrl {
                var: URL_VAR,
                value: endpoint,
            });
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Base URL of the REST interface.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.endpoint)
    }
}
