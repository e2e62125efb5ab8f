//! Pitchlens Extractor
//!
//! Converts business-document text to a structured field record using an LLM.
//!
//! # Overview
//!
//! The extractor is the pathway from uploaded PDF documents to the merged
//! business-field record and its checklist. It truncates each document's text
//! to a character budget, embeds it in an instruction prompt, submits it to a
//! completion provider, and parses the reply as a JSON object of fields.
//!
//! # Architecture
//!
//! ```text
//! Paths → DocumentReader → FieldExtractor → CompletionProvider → ExtractedRecord
//!                                                                      ↓
//!                                               Aggregator → merge → Checklist
//! ```
//!
//! # Example Usage
//!
//! ```
//! use pitchlens_extractor::{Aggregator, ExtractionConfig, FieldExtractor};
//! use pitchlens_llm::MockProvider;
//! use pitchlens_pdf::MockReader;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"Company Name": "Acme"}"#);
//! let mut reader = MockReader::default();
//! reader.add_document("deck.pdf", "Acme Corp is raising 2M EUR.");
//!
//! let extractor = FieldExtractor::new(llm, ExtractionConfig::default());
//! let aggregator = Aggregator::new(extractor, reader);
//!
//! let report = aggregator.process_company("Acme Corp", &[PathBuf::from("deck.pdf")])?;
//! assert_eq!(report.extracted_info.get("Company Name"), Some("Acme"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregator;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;


pub use aggregator::Aggregator;
pub use config::{ExtractionConfig, DEFAULT_CHAR_BUDGET, DEFAULT_FIELDS};
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use parser::{parse_record, strip_code_fence};
pub use prompt::PromptBuilder;
pub use types::{CompanyReport, DocumentWarning};
