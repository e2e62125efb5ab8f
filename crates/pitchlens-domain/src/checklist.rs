//! Presence/absence checklist over the merged record

use crate::record::ExtractedRecord;
use serde::{Deserialize, Serialize};

/// The fields a campaign submission is required to carry, in report order.
pub const CHECKLIST_FIELDS: [&str; 8] = [
    "Company Name",
    "Funding Requested (EUR)",
    "Revenue Last Year (EUR)",
    "EBIT (EUR)",
    "Use of Funds",
    "Team Info",
    "Business Model",
    "Target Market",
];

/// Whether a required field was found in the merged record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    /// The exact field name exists in the record
    Present,
    /// The field name is absent from the record
    Missing,
}

impl ChecklistStatus {
    /// Whether this status is `Present`
    pub fn is_present(&self) -> bool {
        matches!(self, ChecklistStatus::Present)
    }
}

/// One line of the checklist report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    /// Required field name
    pub field: String,
    /// Presence status
    pub status: ChecklistStatus,
}

/// Ordered presence report over [`CHECKLIST_FIELDS`]
pub type Checklist = Vec<ChecklistEntry>;

/// Build the checklist for a merged record.
///
/// Pure function of its input: each of the 8 required fields is reported as
/// present if that exact key exists in the record, missing otherwise. A field
/// mapped to "N/A" counts as present; the value is never inspected.
pub fn build_checklist(record: &ExtractedRecord) -> Checklist {
    CHECKLIST_FIELDS
        .iter()
        .map(|field| ChecklistEntry {
            field: field.to_string(),
            status: if record.contains_field(field) {
                ChecklistStatus::Present
            } else {
                ChecklistStatus::Missing
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(pairs: &[(&str, &str)]) -> ExtractedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_record_all_missing() {
        let checklist = build_checklist(&ExtractedRecord::new());
        assert_eq!(checklist.len(), 8);
        assert!(checklist.iter().all(|e| e.status == ChecklistStatus::Missing));
    }

    #[test]
    fn test_checklist_order_matches_field_order() {
        let checklist = build_checklist(&ExtractedRecord::new());
        let fields: Vec<&str> = checklist.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, CHECKLIST_FIELDS.to_vec());
    }

    #[test]
    fn test_partial_record() {
        let rec = record(&[("Company Name", "Acme"), ("Use of Funds", "N/A")]);
        let checklist = build_checklist(&rec);

        let expected = [
            ("Company Name", ChecklistStatus::Present),
            ("Funding Requested (EUR)", ChecklistStatus::Missing),
            ("Revenue Last Year (EUR)", ChecklistStatus::Missing),
            ("EBIT (EUR)", ChecklistStatus::Missing),
            ("Use of Funds", ChecklistStatus::Present),
            ("Team Info", ChecklistStatus::Missing),
            ("Business Model", ChecklistStatus::Missing),
            ("Target Market", ChecklistStatus::Missing),
        ];
        for (entry, (field, status)) in checklist.iter().zip(expected.iter()) {
            assert_eq!(entry.field, *field);
            assert_eq!(entry.status, *status);
        }
    }

    #[test]
    fn test_na_value_counts_as_present() {
        let rec = record(&[("EBIT (EUR)", "N/A")]);
        let checklist = build_checklist(&rec);
        let ebit = checklist.iter().find(|e| e.field == "EBIT (EUR)").unwrap();
        assert!(ebit.status.is_present());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let rec = record(&[("Vision", "Be great"), ("Mission", "Do great")]);
        let checklist = build_checklist(&rec);
        // Only the 8 required fields appear, all missing here
        assert_eq!(checklist.len(), 8);
        assert!(checklist.iter().all(|e| e.status == ChecklistStatus::Missing));
    }

    proptest! {
        #[test]
        fn prop_checklist_is_idempotent(keys in proptest::collection::vec("[A-Za-z ()]{1,30}", 0..12)) {
            let rec: ExtractedRecord = keys
                .into_iter()
                .map(|k| (k, "value".to_string()))
                .collect();
            let first = build_checklist(&rec);
            let second = build_checklist(&rec);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_checklist_always_has_eight_entries(keys in proptest::collection::vec("[A-Za-z ()]{1,30}", 0..12)) {
            let rec: ExtractedRecord = keys
                .into_iter()
                .map(|k| (k, "value".to_string()))
                .collect();
            prop_assert_eq!(build_checklist(&rec).len(), 8);
        }
    }
}
