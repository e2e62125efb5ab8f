//! Pitchlens Domain Layer
//!
//! This crate contains the core business logic and domain model for Pitchlens.
//! It defines the value objects and trait interfaces that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **ExtractedRecord**: flat mapping of business-field name to string value,
//!   produced once per document and merged last-document-wins
//! - **Checklist**: presence/absence report over a fixed 8-field subset of the
//!   merged record
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure business logic only
//! - Infrastructure implementations (PDF reading, LLM calls) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checklist;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use checklist::{build_checklist, Checklist, ChecklistEntry, ChecklistStatus, CHECKLIST_FIELDS};
pub use record::ExtractedRecord;
