//! Per-document field extraction

use crate::config::ExtractionConfig;
use crate::error::ExtractorError;
use crate::parser::parse_record;
use crate::prompt::PromptBuilder;
use pitchlens_domain::traits::CompletionProvider;
use pitchlens_domain::ExtractedRecord;
use tracing::debug;

/// Extracts a field record from one document's text via the completion API
pub struct FieldExtractor<L>
where
    L: CompletionProvider,
{
    provider: L,
    config: ExtractionConfig,
}

impl<L> FieldExtractor<L>
where
    L: CompletionProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new field extractor
    pub fn new(provider: L, config: ExtractionConfig) -> Self {
        Self { provider, config }
    }

    /// The extractor's configuration
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Build the outbound prompt for a document's text.
    ///
    /// The text is truncated to the first `char_budget` characters before it is
    /// embedded; anything beyond the budget is silently ignored, so fields that
    /// appear only later in a long document will come back as "N/A" or be
    /// omitted by the model.
    pub fn build_prompt(&self, text: &str) -> String {
        let truncated = truncate_chars(text, self.config.char_budget);
        PromptBuilder::new(truncated, &self.config.fields).build()
    }

    /// Extract the field record for one document.
    ///
    /// One blocking completion call; no retry on transient failure. A reply
    /// that does not parse as a JSON object surfaces as a parse-failure error
    /// which callers handle non-fatally.
    pub fn extract(&self, text: &str) -> Result<ExtractedRecord, ExtractorError> {
        let prompt = self.build_prompt(text);
        debug!("Prompt length: {} chars", prompt.chars().count());

        let reply = self
            .provider
            .complete(&prompt)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("Reply length: {} chars", reply.chars().count());

        parse_record(&reply)
    }
}

/// Take the first `max_chars` characters of `text`, never splitting a UTF-8
/// sequence. The budget counts characters, not bytes.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
