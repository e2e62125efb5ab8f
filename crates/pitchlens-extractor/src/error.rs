//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during field extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Completion provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Document text extraction error
    #[error("Document error: {0}")]
    Document(String),

    /// Reply was not a JSON object after fence-stripping
    #[error("Invalid reply format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether this error is a bad-reply condition that is handled non-fatally:
    /// the document contributes an empty record and the batch continues.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            ExtractorError::JsonParse(_) | ExtractorError::InvalidFormat(_)
        )
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
