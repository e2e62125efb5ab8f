//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pitchlens - Extract structured business info from PDF campaign documents.
#[derive(Debug, Parser)]
#[command(name = "pitchlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Record view plus checklist table (default)
    Table,
    /// Full report as JSON
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract business fields from one or more PDF documents
    Extract(ExtractArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Company name (required, non-empty)
    #[arg(short, long)]
    pub company: String,

    /// PDF documents to process, in merge order (later files win on key collision)
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,

    /// API credential for the completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Override the configured model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Override the configured API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Extraction settings file (TOML: fields, model, char_budget, temperature)
    #[arg(long)]
    pub extraction_config: Option<PathBuf>,

    /// Write the merged record to a CSV file
    #[arg(long)]
    pub csv: bool,

    /// Directory for the CSV export
    #[arg(long, default_value = ".")]
    pub csv_dir: PathBuf,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// API endpoint
        #[arg(short, long)]
        endpoint: String,
        /// Model identifier
        #[arg(short, long)]
        model: String,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command_parsing() {
        let cli = Cli::parse_from([
            "pitchlens",
            "extract",
            "--company",
            "Acme Corp",
            "--api-key",
            "sk-test",
            "deck.pdf",
            "financials.pdf",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.company, "Acme Corp");
                assert_eq!(args.documents.len(), 2);
                assert!(!args.csv);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_extract_csv_dir_flag() {
        let cli = Cli::parse_from([
            "pitchlens",
            "extract",
            "--company",
            "Acme",
            "--api-key",
            "sk-test",
            "--csv",
            "--csv-dir",
            "/tmp/exports",
            "deck.pdf",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert!(args.csv);
                assert_eq!(args.csv_dir, PathBuf::from("/tmp/exports"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_extract_requires_documents() {
        let result = Cli::try_parse_from([
            "pitchlens",
            "extract",
            "--company",
            "Acme",
            "--api-key",
            "sk-test",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_set_parsing() {
        let cli = Cli::parse_from([
            "pitchlens",
            "profile",
            "set",
            "staging",
            "--endpoint",
            "https://api.example.com",
            "--model",
            "gpt-4o-mini",
        ]);
        match cli.command {
            Command::Profile(args) => match args.action {
                ProfileAction::Set { name, endpoint, model } => {
                    assert_eq!(name, "staging");
                    assert_eq!(endpoint, "https://api.example.com");
                    assert_eq!(model, "gpt-4o-mini");
                }
                _ => panic!("Expected Set action"),
            },
            _ => panic!("Expected Profile command"),
        }
    }
}
