//! One competitor row from the corpus.

use serde::{Deserialize, Serialize};

/// Canonical column names in the competitors dataset.
pub const FIELD_NAME: &str = "Competitor Name";
pub const FIELD_DESCRIPTION: &str = "Product Description";
pub const FIELD_STRATEGY: &str = "Marketing Strategy";
pub const FIELD_FINANCIALS: &str = "Financial Summary";

/// A competitor record: an ordered mapping of column name to value.
///
/// Immutable once loaded. Missing cells are normalized to empty strings at
/// load time, so downstream text assembly never branches on absent fields.
/// Identity is row position in the corpus, not an enforced-unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    fields: Vec<(String, String)>,
}

impl CompetitorRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value for a column, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Source attribution for passages built from this record.
    /// "unknown" only when the name column is missing entirely.
    pub fn source_name(&self) -> &str {
        self.fields
            .iter()
            .find(|(name, _)| name == FIELD_NAME)
            .map(|(_, value)| value.as_str())
            .unwrap_or("unknown")
    }

    /// Fixed-order multi-line document used for embedding and indexing.
    pub fn document_text(&self) -> String {
        format!(
            "{FIELD_NAME}: {}\n{FIELD_DESCRIPTION}: {}\n{FIELD_STRATEGY}: {}\n{FIELD_FINANCIALS}: {}",
            self.get(FIELD_NAME),
            self.get(FIELD_DESCRIPTION),
            self.get(FIELD_STRATEGY),
            self.get(FIELD_FINANCIALS),
        )
    }

    /// All field values joined with spaces and lowercased, for lexical scoring.
    pub fn search_blob(&self) -> String {
        self.fields
            .iter()
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Column names in corpus order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> CompetitorRecord {
        CompetitorRecord::new(vec![
            (FIELD_NAME.to_string(), "Acme".to_string()),
            (FIELD_DESCRIPTION.to_string(), "Widgets".to_string()),
            (FIELD_STRATEGY.to_string(), "Low price".to_string()),
            (FIELD_FINANCIALS.to_string(), "Profitable".to_string()),
        ])
    }

    #[test]
    fn absent_column_reads_as_empty() {
        let record = CompetitorRecord::new(vec![(FIELD_NAME.to_string(), "Acme".to_string())]);
        assert_eq!(record.get(FIELD_STRATEGY), "");
    }

    #[test]
    fn source_name_defaults_to_unknown_without_name_column() {
        let record = CompetitorRecord::new(vec![("Extra".to_string(), "x".to_string())]);
        assert_eq!(record.source_name(), "unknown");
        assert_eq!(acme().source_name(), "Acme");
    }

    #[test]
    fn document_text_has_fixed_field_order() {
        let text = acme().document_text();
        assert_eq!(
            text,
            "Competitor Name: Acme\nProduct Description: Widgets\n\
             Marketing Strategy: Low price\nFinancial Summary: Profitable"
        );
    }

    #[test]
    fn document_text_tolerates_missing_fields() {
        let record = CompetitorRecord::new(vec![(FIELD_NAME.to_string(), "Acme".to_string())]);
        assert!(record.document_text().contains("Product Description: \n"));
    }

    #[test]
    fn search_blob_joins_all_values_lowercased() {
        let mut record = acme();
        record.fields.push(("Extra Column".to_string(), "NICHE".to_string()));
        assert_eq!(record.search_blob(), "acme widgets low price profitable niche");
    }
}
