//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::path::Path;

/// Trait for single-turn text completion against a hosted model
///
/// Implemented by the infrastructure layer (pitchlens-llm)
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Submit a prompt and return the first completion's text
    fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for extracting the visible text of a document
///
/// Implemented by the infrastructure layer (pitchlens-pdf)
pub trait DocumentReader {
    /// Error type for read operations
    type Error;

    /// Return the concatenated text of all pages of the document at `path`,
    /// page order preserved, with no separator inserted between pages
    fn read_text(&self, path: &Path) -> Result<String, Self::Error>;
}
