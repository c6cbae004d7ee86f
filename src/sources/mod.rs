//! Literature sources.
//!
//! A [`Source`] resolves a free-text query to identifiers and then to summary
//! metadata. [`PubMedSource`] talks to NCBI E-utilities; [`MockSource`]
//! returns canned data for tests.
//!
//! [`collect_papers`] runs the two stages in order and returns one
//! [`PaperRecord`] per identifier.

mod mock;
mod pubmed;

pub use mock::MockSource;
pub use pubmed::{PubMedSource, MAX_RESULTS};

use async_trait::async_trait;

use crate::models::{PaperRecord, SummaryMap};

/// Interface implemented by every literature backend.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g., "pubmed")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Search for identifiers matching `query`, in server order
    async fn search_ids(&self, query: &str) -> Result<Vec<String>, SourceError>;

    /// Fetch summaries for `ids` in a single batch
    async fn fetch_summaries(&self, ids: &[String]) -> Result<SummaryMap, SourceError>;

    /// Fetch summaries and map them to one record per id, preserving order.
    ///
    /// An empty id list never reaches the network.
    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>, SourceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let summaries = self.fetch_summaries(ids).await?;
        let records: Vec<PaperRecord> = ids
            .iter()
            .map(|id| PaperRecord::from_summary(id, summaries.get(id)))
            .collect();

        tracing::debug!("Extracted details for {} papers.", records.len());

        Ok(records)
    }
}

/// Search `source` for `query` and fetch details for every hit.
pub async fn collect_papers(
    source: &dyn Source,
    query: &str,
) -> Result<Vec<PaperRecord>, SourceError> {
    if query.is_empty() {
        return Err(SourceError::InvalidRequest(
            "Search query must not be empty".to_string(),
        ));
    }

    tracing::trace!("Searching {} for {:?}", source.name(), query);

    let ids = source.search_ids(query).await?;
    source.fetch_details(&ids).await
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Upstream answered with something other than 200 OK
    #[error("{context} (HTTP {status})")]
    Status {
        context: &'static str,
        status: reqwest::StatusCode,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl SourceError {
    /// HTTP status for [`SourceError::Status`], if any
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            SourceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
