//! The per-document field record and its merge semantics

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat mapping of business-field name to string value.
///
/// Produced once per document by the field extractor, then merged into a single
/// session-scoped record. The key set is whatever the model chose to emit; it is
/// never validated against the requested field list. Keys keep insertion order,
/// which is what the CSV export uses for its column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedRecord {
    fields: IndexMap<String, String>,
}

impl ExtractedRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert a field value, returning the previous value if the key existed
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Look up a field value by exact name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Whether the record contains the exact field name.
    ///
    /// This is an exact key match: no case folding, no synonym matching, and no
    /// value check (a field mapped to "N/A" still counts).
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Merge another record into this one.
    ///
    /// Keys from `other` overwrite same-named keys already present (last wins).
    /// Keys new to this record are appended in `other`'s order.
    pub fn merge(&mut self, other: ExtractedRecord) {
        self.fields.extend(other.fields);
    }

    /// Iterate over (field, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ExtractedRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<IndexMap<String, String>> for ExtractedRecord {
    fn from(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }
}

impl IntoIterator for ExtractedRecord {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ExtractedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_record() {
        let rec = ExtractedRecord::new();
        assert!(rec.is_empty());
        assert_eq!(rec.len(), 0);
        assert!(!rec.contains_field("Company Name"));
    }

    #[test]
    fn test_insert_and_get() {
        let mut rec = ExtractedRecord::new();
        rec.insert("Company Name", "Acme");
        assert_eq!(rec.get("Company Name"), Some("Acme"));
        assert_eq!(rec.get("Industry"), None);
    }

    #[test]
    fn test_contains_field_is_exact_match() {
        let mut rec = ExtractedRecord::new();
        rec.insert("Company Name", "N/A");
        // An "N/A" value still counts as present
        assert!(rec.contains_field("Company Name"));
        // No case-insensitivity
        assert!(!rec.contains_field("company name"));
    }

    #[test]
    fn test_merge_last_wins() {
        let mut merged = record(&[("Company Name", "First Corp"), ("Industry", "Retail")]);
        let later = record(&[("Company Name", "Second Corp"), ("Vision", "Growth")]);

        merged.merge(later);

        assert_eq!(merged.get("Company Name"), Some("Second Corp"));
        assert_eq!(merged.get("Industry"), Some("Retail"));
        assert_eq!(merged.get("Vision"), Some("Growth"));
    }

    #[test]
    fn test_merge_preserves_key_order() {
        let mut merged = record(&[("Company Name", "Acme"), ("Industry", "Retail")]);
        merged.merge(record(&[("Company Name", "Acme GmbH"), ("EBIT (EUR)", "1000")]));

        let names: Vec<&str> = merged.field_names().collect();
        // Overwritten keys keep their original position; new keys append
        assert_eq!(names, vec!["Company Name", "Industry", "EBIT (EUR)"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let rec = record(&[("Company Name", "Acme"), ("Use of Funds", "N/A")]);
        let json = serde_json::to_string(&rec).unwrap();
        let back: ExtractedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
