//! PubMed research source implementation using E-utilities API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::{Config, Endpoints};
use crate::models::{ESearchResponse, ESummaryResponse, SummaryMap};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// Fixed page size for esearch
pub const MAX_RESULTS: usize = 10;

const SEARCH_FAILED: &str = "Error fetching data from PubMed API";
const SUMMARY_FAILED: &str = "Error fetching paper details";

/// PubMed research source
///
/// Uses NCBI esearch to resolve a query to PMIDs and esummary to fetch
/// document summaries for them.
#[derive(Debug, Clone)]
pub struct PubMedSource {
    client: Arc<HttpClient>,
    endpoints: Endpoints,
}

impl PubMedSource {
    /// Create a PubMed source from application configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::with_settings(&config.http)?),
            endpoints: config.endpoints.clone(),
        })
    }

    /// Create with a custom HTTP client and endpoints (for testing)
    pub fn with_client(client: Arc<HttpClient>, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Build the esearch URL for `query`
    fn build_search_url(&self, query: &str) -> String {
        let params = [
            ("db", "pubmed".to_string()),
            ("term", query.to_string()),
            ("retmax", MAX_RESULTS.to_string()),
            ("retmode", "json".to_string()),
        ];
        format!("{}?{}", self.endpoints.esearch_url, encode_params(&params))
    }

    /// Build the esummary URL for a batch of PMIDs
    fn build_summary_url(&self, ids: &[String]) -> String {
        let params = [
            ("db", "pubmed".to_string()),
            ("id", ids.join(",")),
            ("retmode", "json".to_string()),
        ];
        format!("{}?{}", self.endpoints.esummary_url, encode_params(&params))
    }

    /// GET `url` and decode the JSON body; anything but 200 OK is an error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<T, SourceError> {
        tracing::trace!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("{}: {}", context, e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SourceError::Status { context, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        Ok(serde_json::from_str(&body)?)
    }
}

fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait]
impl Source for PubMedSource {
    fn id(&self) -> &str {
        "pubmed"
    }

    fn name(&self) -> &str {
        "PubMed"
    }

    async fn search_ids(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let url = self.build_search_url(query);
        let response: ESearchResponse = self.get_json(&url, SEARCH_FAILED).await?;

        if let Some(error) = &response.esearchresult.error {
            tracing::warn!("PubMed reported a query error: {}", error);
        }

        let ids = response.into_ids();
        tracing::debug!("Fetched {} papers.", ids.len());

        Ok(ids)
    }

    async fn fetch_summaries(&self, ids: &[String]) -> Result<SummaryMap, SourceError> {
        let url = self.build_summary_url(ids);
        let response: ESummaryResponse = self.get_json(&url, SUMMARY_FAILED).await?;
        Ok(response.into_summaries())
    }
}
