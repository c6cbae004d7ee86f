//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::{DocumentSummary, SummaryMap};
use crate::sources::{Source, SourceError};

/// A mock source that returns predefined identifiers and summaries.
///
/// Counts calls to each stage so tests can assert which requests would
/// have been made.
#[derive(Debug, Default)]
pub struct MockSource {
    ids: Vec<String>,
    summaries: SummaryMap,
    search_failure: Option<reqwest::StatusCode>,
    summary_failure: Option<reqwest::StatusCode>,
    search_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl MockSource {
    /// Create a mock that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers returned by the search stage.
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Summary returned for `id` by the detail stage.
    pub fn with_summary(mut self, id: &str, summary: DocumentSummary) -> Self {
        self.summaries.insert(id.to_string(), summary);
        self
    }

    /// Make the search stage fail with `status`.
    pub fn fail_search_with(mut self, status: reqwest::StatusCode) -> Self {
        self.search_failure = Some(status);
        self
    }

    /// Make the detail stage fail with `status`.
    pub fn fail_summary_with(mut self, status: reqwest::StatusCode) -> Self {
        self.summary_failure = Some(status);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search_ids(&self, _query: &str) -> Result<Vec<String>, SourceError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        match self.search_failure {
            Some(status) => Err(SourceError::Status {
                context: "Error fetching data from mock source",
                status,
            }),
            None => Ok(self.ids.clone()),
        }
    }

    async fn fetch_summaries(&self, ids: &[String]) -> Result<SummaryMap, SourceError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.summary_failure {
            return Err(SourceError::Status {
                context: "Error fetching details from mock source",
                status,
            });
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.summaries.get(id).map(|s| (id.clone(), s.clone())))
            .collect())
    }
}
