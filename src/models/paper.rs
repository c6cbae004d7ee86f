//! Flat paper record written to CSV or shown on the console.

use serde::Serialize;

use super::DocumentSummary;

/// Sentinel used for every field the upstream record does not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Column names in export order
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// A single exported row.
///
/// Every field is always populated. Missing upstream data is replaced by
/// [`NOT_AVAILABLE`], and the author/affiliation/email columns are never
/// derived from the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    /// PubMed identifier (PMID)
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Article title
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication date as reported by esummary (free-form, e.g. "2023 Jan 5")
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// Build a row for `pubmed_id` from its summary, if the summary service returned one.
    pub fn from_summary(pubmed_id: &str, summary: Option<&DocumentSummary>) -> Self {
        let title = summary.and_then(|s| s.title.clone());
        let publication_date = summary.and_then(|s| s.pubdate.clone());

        Self {
            pubmed_id: pubmed_id.to_string(),
            title: title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            publication_date: publication_date.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            non_academic_authors: NOT_AVAILABLE.to_string(),
            company_affiliations: NOT_AVAILABLE.to_string(),
            corresponding_author_email: NOT_AVAILABLE.to_string(),
        }
    }

    /// Field values in the same order as [`CSV_HEADERS`]
    pub fn fields(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }

    /// Canonical PubMed page for this record
    pub fn url(&self) -> String {
        format!("https://pubmed.ncbi.nlm.nih.gov/{}/", self.pubmed_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_summary_full() {
        let summary = DocumentSummary {
            title: Some("Study A".to_string()),
            pubdate: Some("2023".to_string()),
        };
        let record = PaperRecord::from_summary("111", Some(&summary));

        assert_eq!(record.pubmed_id, "111");
        assert_eq!(record.title, "Study A");
        assert_eq!(record.publication_date, "2023");
        assert_eq!(record.non_academic_authors, NOT_AVAILABLE);
        assert_eq!(record.company_affiliations, NOT_AVAILABLE);
        assert_eq!(record.corresponding_author_email, NOT_AVAILABLE);
    }

    #[test]
    fn test_from_summary_missing_record() {
        let record = PaperRecord::from_summary("222", None);

        assert_eq!(record.pubmed_id, "222");
        assert!(record.fields()[1..].iter().all(|f| *f == NOT_AVAILABLE));
    }

    #[test]
    fn test_from_summary_partial_record() {
        let summary = DocumentSummary {
            pubdate: Some("2021 Mar".to_string()),
            ..Default::default()
        };
        let record = PaperRecord::from_summary("333", Some(&summary));

        assert_eq!(record.title, NOT_AVAILABLE);
        assert_eq!(record.publication_date, "2021 Mar");
    }

    #[test]
    fn test_placeholder_fields_ignore_summary() {
        let summary = DocumentSummary {
            title: Some("T".to_string()),
            pubdate: Some("2020".to_string()),
        };
        let record = PaperRecord::from_summary("1", Some(&summary));
        let fields = record.fields();

        assert_eq!(&fields[3..], &[NOT_AVAILABLE; 3]);
    }

    #[test]
    fn test_serialized_names_match_headers() {
        let record = PaperRecord::from_summary("42", None);
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        for header in CSV_HEADERS {
            assert!(object.contains_key(header), "missing {}", header);
        }
        assert_eq!(object.len(), CSV_HEADERS.len());
    }

    #[test]
    fn test_url() {
        let record = PaperRecord::from_summary("12345", None);
        assert_eq!(record.url(), "https://pubmed.ncbi.nlm.nih.gov/12345/");
    }
}
