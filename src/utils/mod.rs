//! Utility modules supporting the fetch pipeline.
//!
//! - [`HttpClient`]: shared reqwest client configured from [`HttpSettings`](crate::config::HttpSettings)

mod http;

pub use http::{HttpClient, DEFAULT_USER_AGENT};
