//! Pitchlens PDF Layer
//!
//! Implementations of the `DocumentReader` trait from `pitchlens-domain`.
//!
//! # Readers
//!
//! - `MockReader`: Deterministic mock for testing
//! - `PdfReader`: Real PDF text extraction via the `pdf-extract` crate
//!
//! # Examples
//!
//! ```
//! use pitchlens_pdf::MockReader;
//! use pitchlens_domain::traits::DocumentReader;
//! use std::path::Path;
//!
//! let mut reader = MockReader::default();
//! reader.add_document("deck.pdf", "Acme Corp raises 2M EUR");
//! let text = reader.read_text(Path::new("deck.pdf")).unwrap();
//! assert_eq!(text, "Acme Corp raises 2M EUR");
//! ```

#![warn(missing_docs)]

use indexmap::IndexMap;
use pitchlens_domain::traits::DocumentReader;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading documents
#[derive(Error, Debug)]
pub enum PdfError {
    /// The file could not be read from disk
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The bytes were not a parseable PDF
    #[error("failed to extract text from {path}: {source}")]
    Extract {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying extraction error
        source: pdf_extract::OutputError,
    },

    /// Mock-configured failure (testing only)
    #[error("document not available: {0}")]
    NotAvailable(String),
}

/// PDF text extraction backed by the `pdf-extract` crate.
///
/// Page texts are concatenated in page order with no separator inserted
/// between pages; page boundaries are not preserved in the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for PdfReader {
    type Error = PdfError;

    fn read_text(&self, path: &Path) -> Result<String, Self::Error> {
        let bytes = fs::read(path).map_err(|source| PdfError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|source| PdfError::Extract {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Mock document reader for deterministic testing.
///
/// Returns pre-configured text per path without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MockReader {
    documents: HashMap<PathBuf, String>,
}

impl MockReader {
    /// Register the text returned for a given path
    pub fn add_document(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }
}

impl DocumentReader for MockReader {
    type Error = PdfError;

    fn read_text(&self, path: &Path) -> Result<String, Self::Error> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| PdfError::NotAvailable(path.display().to_string()))
    }
}

/// Extract text for every path, keyed by each path's base name.
///
/// Returns exactly one entry per input path, in input order. If any single
/// document fails to read, the whole batch fails; there is no
/// partial-document skipping.
pub fn extract_texts<R: DocumentReader>(
    reader: &R,
    paths: &[PathBuf],
) -> Result<IndexMap<String, String>, R::Error> {
    let mut texts = IndexMap::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let text = reader.read_text(path)?;
        texts.insert(name, text);
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reader_returns_configured_text() {
        let mut reader = MockReader::default();
        reader.add_document("a.pdf", "page one textpage two text");

        let text = reader.read_text(Path::new("a.pdf")).unwrap();
        assert_eq!(text, "page one textpage two text");
    }

    #[test]
    fn test_mock_reader_unknown_path_errors() {
        let reader = MockReader::default();
        let result = reader.read_text(Path::new("missing.pdf"));
        assert!(matches!(result, Err(PdfError::NotAvailable(_))));
    }

    #[test]
    fn test_extract_texts_one_entry_per_path() {
        let mut reader = MockReader::default();
        reader.add_document("docs/pitch.pdf", "pitch text");
        reader.add_document("docs/financials.pdf", "financials text");

        let paths = vec![
            PathBuf::from("docs/pitch.pdf"),
            PathBuf::from("docs/financials.pdf"),
        ];
        let texts = extract_texts(&reader, &paths).unwrap();

        assert_eq!(texts.len(), 2);
        assert_eq!(texts.get("pitch.pdf").map(String::as_str), Some("pitch text"));
        assert_eq!(
            texts.get("financials.pdf").map(String::as_str),
            Some("financials text")
        );
    }

    #[test]
    fn test_extract_texts_keeps_input_order() {
        let mut reader = MockReader::default();
        reader.add_document("b.pdf", "b");
        reader.add_document("a.pdf", "a");

        let paths = vec![PathBuf::from("b.pdf"), PathBuf::from("a.pdf")];
        let texts = extract_texts(&reader, &paths).unwrap();

        let names: Vec<&String> = texts.keys().collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_extract_texts_aborts_batch_on_failure() {
        let mut reader = MockReader::default();
        reader.add_document("ok.pdf", "fine");

        let paths = vec![PathBuf::from("ok.pdf"), PathBuf::from("broken.pdf")];
        let result = extract_texts(&reader, &paths);
        assert!(result.is_err());
    }

    #[test]
    fn test_pdf_reader_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.pdf");

        let result = PdfReader::new().read_text(&path);
        assert!(matches!(result, Err(PdfError::Io { .. })));
    }

    #[test]
    fn test_pdf_reader_garbage_bytes_is_extract_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let result = PdfReader::new().read_text(&path);
        assert!(matches!(result, Err(PdfError::Extract { .. })));
    }
}
