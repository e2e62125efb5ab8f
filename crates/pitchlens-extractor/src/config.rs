//! Configuration for field extraction

use serde::{Deserialize, Serialize};

/// Maximum number of characters of document text submitted per request
pub const DEFAULT_CHAR_BUDGET: usize = 3000;

/// The business fields requested from the model, in prompt order
pub const DEFAULT_FIELDS: [&str; 12] = [
    "Company Name",
    "Industry",
    "Funding Requested (EUR)",
    "Revenue Last Year (EUR)",
    "EBIT (EUR)",
    "Use of Funds",
    "Business Model",
    "Target Market",
    "Go-To-Market Strategy",
    "Team Info",
    "Vision",
    "Mission",
];

/// Configuration for the field extractor.
///
/// The field list, model identifier, character budget, and sampling temperature
/// are explicit configuration values so the field set and backend model are
/// swappable without touching extraction logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Fields requested from the model
    pub fields: Vec<String>,

    /// Model identifier sent with every request
    pub model: String,

    /// Truncation limit: only the first `char_budget` characters of each
    /// document are submitted; text beyond it is silently ignored
    pub char_budget: usize,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            model: "gpt-4o-mini".to_string(),
            char_budget: DEFAULT_CHAR_BUDGET,
            temperature: 0.0,
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("fields must not be empty".to_string());
        }
        if self.fields.iter().any(|f| f.trim().is_empty()) {
            return Err("field names must not be blank".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.char_budget == 0 {
            return Err("char_budget must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be within [0.0, 2.0]".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
