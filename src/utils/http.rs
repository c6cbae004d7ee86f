//! HTTP client utilities.

use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

use crate::config::HttpSettings;
use crate::sources::SourceError;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Shared HTTP client with sensible defaults
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings (no request timeout)
    pub fn new() -> Result<Self, SourceError> {
        Self::with_settings(&HttpSettings::default())
    }

    /// Create a new HTTP client from configured settings
    pub fn with_settings(settings: &HttpSettings) -> Result<Self, SourceError> {
        let user_agent = settings.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut builder = Client::builder().user_agent(user_agent);

        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| SourceError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Start a GET request
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }
}
