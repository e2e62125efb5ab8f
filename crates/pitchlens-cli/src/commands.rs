//! Command execution.

use crate::cli::{ExtractArgs, ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::export;
use crate::output::Formatter;
use pitchlens_extractor::{Aggregator, ExtractionConfig, FieldExtractor};
use pitchlens_llm::{ApiKey, OpenAiProvider};
use pitchlens_pdf::PdfReader;
use std::fs;

/// Run the extract command: process the documents, print the report, and
/// export the CSV when requested.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.company.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "company name must not be empty".to_string(),
        ));
    }

    let profile = config.get_active_profile()?;

    let mut extraction = match &args.extraction_config {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            ExtractionConfig::from_toml(&contents).map_err(CliError::Config)?
        }
        None => ExtractionConfig {
            model: profile.model.clone(),
            ..ExtractionConfig::default()
        },
    };
    if let Some(model) = args.model {
        extraction.model = model;
    }
    extraction.validate().map_err(CliError::Config)?;

    let endpoint = args.endpoint.unwrap_or_else(|| profile.endpoint.clone());

    // Credential is acquired once, here, before any request goes out; the
    // ApiKey buffer is cleared when the provider drops at the end of the run.
    let api_key = ApiKey::new(args.api_key);
    let provider = OpenAiProvider::new(endpoint, extraction.model.clone(), api_key)
        .with_temperature(extraction.temperature);

    let aggregator = Aggregator::new(FieldExtractor::new(provider, extraction), PdfReader::new());
    let report = aggregator.process_company(&args.company, &args.documents)?;

    for warning in &report.warnings {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "JSON decode error in {}: {}",
                warning.document, warning.reason
            ))
        );
    }

    println!("{}", formatter.format_report(&report)?);

    if args.csv {
        let path = export::write_csv(&report.extracted_info, &args.csv_dir, &report.company)?;
        println!(
            "{}",
            formatter.success(&format!("Extracted info written to {}", path.display()))
        );
    }

    Ok(())
}

/// Run a profile management action.
pub fn execute_profile(args: ProfileArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ProfileAction::List => {
            for (name, profile) in &config.profiles {
                let marker = if *name == config.active_profile { "*" } else { " " };
                println!("{} {} ({}, {})", marker, name, profile.endpoint, profile.model);
            }
        }
        ProfileAction::Show => {
            let profile = config.get_active_profile()?;
            println!("{}", config.active_profile);
            println!("  endpoint: {}", profile.endpoint);
            println!("  model:    {}", profile.model);
        }
        ProfileAction::Switch { name } => {
            config.switch_profile(name.clone())?;
            config.save()?;
            println!("{}", formatter.success(&format!("Switched to profile '{}'", name)));
        }
        ProfileAction::Set { name, endpoint, model } => {
            config.set_profile(name.clone(), Profile { endpoint, model });
            config.save()?;
            println!("{}", formatter.success(&format!("Profile '{}' saved", name)));
        }
        ProfileAction::Delete { name } => {
            config.delete_profile(&name)?;
            config.save()?;
            println!("{}", formatter.success(&format!("Profile '{}' deleted", name)));
        }
    }

    Ok(())
}
