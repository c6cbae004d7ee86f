//! Core data models for PubMed search results and exported records.

mod paper;
mod summary;

pub use paper::{PaperRecord, CSV_HEADERS, NOT_AVAILABLE};
pub use summary::{
    DocumentSummary, ESearchResponse, ESearchResult, ESummaryResponse, SummaryMap,
};
