//! Typed views of the E-utilities JSON envelopes.
//!
//! Every field is optional: the upstream service routinely omits keys,
//! and a missing or mistyped key is data, not an error.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Summaries keyed by PubMed identifier
pub type SummaryMap = HashMap<String, DocumentSummary>;

/// Top-level esearch response
#[derive(Debug, Default, Deserialize)]
pub struct ESearchResponse {
    #[serde(default)]
    pub esearchresult: ESearchResult,
}

/// The `esearchresult` object
#[derive(Debug, Default, Deserialize)]
pub struct ESearchResult {
    #[serde(default)]
    pub idlist: Vec<String>,

    /// Query error reported inline with a 200 status
    #[serde(rename = "ERROR", default)]
    pub error: Option<String>,
}

impl ESearchResponse {
    /// Identifiers in server order
    pub fn into_ids(self) -> Vec<String> {
        self.esearchresult.idlist
    }
}

/// Top-level esummary response
#[derive(Debug, Default, Deserialize)]
pub struct ESummaryResponse {
    #[serde(default)]
    pub result: Option<Map<String, Value>>,
}

impl ESummaryResponse {
    /// Decode the `result` object into typed summaries.
    ///
    /// The `uids` index and any entry that is not an object are skipped.
    pub fn into_summaries(self) -> SummaryMap {
        let Some(result) = self.result else {
            return SummaryMap::new();
        };

        result
            .into_iter()
            .filter(|(key, value)| key != "uids" && value.is_object())
            .map(|(key, value)| (key, DocumentSummary::from_value(&value)))
            .collect()
    }
}

/// Summary metadata for one PubMed record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    pub title: Option<String>,
    pub pubdate: Option<String>,
}

impl DocumentSummary {
    /// Read each field independently; a field that is absent or not a
    /// string is `None` and leaves the others intact.
    pub fn from_value(value: &Value) -> Self {
        let string_field = |name: &str| value.get(name).and_then(Value::as_str).map(String::from);

        Self {
            title: string_field("title"),
            pubdate: string_field("pubdate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esearch_ids() {
        let json = r#"{
            "header": {"type": "esearch", "version": "0.3"},
            "esearchresult": {"count": "2", "retmax": "2", "idlist": ["111", "222"]}
        }"#;
        let response: ESearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.into_ids(), vec!["111", "222"]);
    }

    #[test]
    fn test_esearch_missing_idlist() {
        let response: ESearchResponse = serde_json::from_str(r#"{"esearchresult": {}}"#).unwrap();
        assert!(response.into_ids().is_empty());

        let response: ESearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_ids().is_empty());
    }

    #[test]
    fn test_esearch_inline_error() {
        let json = r#"{"esearchresult": {"ERROR": "Invalid query", "idlist": []}}"#;
        let response: ESearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.esearchresult.error.as_deref(), Some("Invalid query"));
    }

    #[test]
    fn test_esummary_skips_uids() {
        let json = r#"{
            "result": {
                "uids": ["111"],
                "111": {"uid": "111", "title": "Study A", "pubdate": "2023", "source": "J Test"}
            }
        }"#;
        let response: ESummaryResponse = serde_json::from_str(json).unwrap();
        let summaries = response.into_summaries();

        assert_eq!(summaries.len(), 1);
        let summary = &summaries["111"];
        assert_eq!(summary.title.as_deref(), Some("Study A"));
        assert_eq!(summary.pubdate.as_deref(), Some("2023"));
    }

    #[test]
    fn test_esummary_missing_result() {
        let response: ESummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_summaries().is_empty());
    }

    #[test]
    fn test_esummary_mistyped_title_is_missing() {
        let json = r#"{"result": {"111": {"title": 42, "pubdate": "2020"}, "222": "oops"}}"#;
        let response: ESummaryResponse = serde_json::from_str(json).unwrap();
        let summaries = response.into_summaries();

        assert_eq!(summaries["111"].title, None);
        assert_eq!(summaries["111"].pubdate.as_deref(), Some("2020"));
        assert!(!summaries.contains_key("222"));
    }

    #[test]
    fn test_esummary_stray_field_types_keep_title_and_date() {
        let json = r#"{"result": {
            "111": {"uid": 111, "title": "Study A", "pubdate": "2023"},
            "222": {"title": "Study B", "pubdate": "2024", "error": ["x"], "source": {"n": 1}}
        }}"#;
        let response: ESummaryResponse = serde_json::from_str(json).unwrap();
        let summaries = response.into_summaries();

        assert_eq!(summaries["111"].title.as_deref(), Some("Study A"));
        assert_eq!(summaries["111"].pubdate.as_deref(), Some("2023"));
        assert_eq!(summaries["222"].title.as_deref(), Some("Study B"));
        assert_eq!(summaries["222"].pubdate.as_deref(), Some("2024"));
    }

    #[test]
    fn test_esummary_error_entry() {
        let json = r#"{"result": {"uids": ["9"], "9": {"uid": "9", "error": "cannot get document summary"}}}"#;
        let response: ESummaryResponse = serde_json::from_str(json).unwrap();
        let summaries = response.into_summaries();

        assert_eq!(summaries["9"], DocumentSummary::default());
    }
}
