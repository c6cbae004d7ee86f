//! # PubMed Papers
//!
//! Search PubMed for papers matching a query, fetch their document summaries
//! and export them as a flat CSV table.
//!
//! ## Architecture
//!
//! - [`config`]: Endpoint and HTTP settings with environment overrides
//! - [`models`]: E-utilities response types and the exported [`PaperRecord`]
//! - [`sources`]: The [`Source`] trait, the PubMed backend and a mock
//! - [`output`]: CSV export and console rendering
//! - [`utils`]: HTTP client

pub mod config;
pub mod models;
pub mod output;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::PaperRecord;
pub use sources::{collect_papers, PubMedSource, Source, SourceError};
