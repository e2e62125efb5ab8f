//! Result types for document processing

use pitchlens_domain::{Checklist, ExtractedRecord};
use serde::Serialize;

/// Non-fatal warning raised while processing one document.
///
/// A document whose reply could not be parsed contributes an empty record; the
/// rest of the batch is unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentWarning {
    /// Base name of the offending document
    pub document: String,

    /// Why the document's reply was discarded
    pub reason: String,
}

/// The result of processing one company's documents
#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport {
    /// Company name as entered by the user
    pub company: String,

    /// Merged field record, last-document-wins on key collision
    pub extracted_info: ExtractedRecord,

    /// Presence report over the required fields
    pub checklist: Checklist,

    /// Non-fatal per-document warnings, in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DocumentWarning>,
}
