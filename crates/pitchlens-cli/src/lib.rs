//! Pitchlens CLI library.
//!
//! This library provides the core functionality for the pitchlens command-line
//! interface: configuration management, command execution, output formatting,
//! and the CSV export.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
