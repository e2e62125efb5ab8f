//! Batch processing and record merging

use crate::error::ExtractorError;
use crate::extractor::FieldExtractor;
use crate::types::{CompanyReport, DocumentWarning};
use pitchlens_domain::traits::{CompletionProvider, DocumentReader};
use pitchlens_domain::{build_checklist, ExtractedRecord};
use pitchlens_pdf::extract_texts;
use std::path::PathBuf;
use tracing::{info, warn};

/// Runs extraction over a company's documents and merges the results
pub struct Aggregator<L, R>
where
    L: CompletionProvider,
    R: DocumentReader,
{
    extractor: FieldExtractor<L>,
    reader: R,
}

impl<L, R> Aggregator<L, R>
where
    L: CompletionProvider,
    R: DocumentReader,
    L::Error: std::fmt::Display,
    R::Error: std::fmt::Display,
{
    /// Create a new aggregator
    pub fn new(extractor: FieldExtractor<L>, reader: R) -> Self {
        Self { extractor, reader }
    }

    /// Process every document for one company.
    ///
    /// Text extraction runs first for all files; if any file fails there, the
    /// whole call fails. Field extraction then runs per document in file order,
    /// sequentially and synchronously. Per-document records are merged with
    /// later files overwriting same-named keys from earlier files. A document
    /// whose reply does not parse contributes an empty record and a warning;
    /// any other error aborts the run.
    pub fn process_company(
        &self,
        company_name: &str,
        paths: &[PathBuf],
    ) -> Result<CompanyReport, ExtractorError> {
        info!(
            "Processing {} document(s) for company '{}'",
            paths.len(),
            company_name
        );

        let texts = extract_texts(&self.reader, paths)
            .map_err(|e| ExtractorError::Document(e.to_string()))?;

        let mut merged = ExtractedRecord::new();
        let mut warnings = Vec::new();

        for (name, text) in &texts {
            info!("Extracting fields from '{}' ({} chars)", name, text.chars().count());

            match self.extractor.extract(text) {
                Ok(record) => {
                    info!("Extracted {} field(s) from '{}'", record.len(), name);
                    merged.merge(record);
                }
                Err(e) if e.is_parse_failure() => {
                    warn!("Reply for '{}' was not valid JSON: {}", name, e);
                    warnings.push(DocumentWarning {
                        document: name.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let checklist = build_checklist(&merged);

        Ok(CompanyReport {
            company: company_name.to_string(),
            extracted_info: merged,
            checklist,
            warnings,
        })
    }
}
