//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pitchlens_domain::{Checklist, ExtractedRecord};
use pitchlens_extractor::CompanyReport;
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a company report.
    pub fn format_report(&self, report: &CompanyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => self.format_report_sections(report),
        }
    }

    /// Format the report as its two on-screen sections: the extracted info as
    /// a JSON view, the checklist as a Field/Status table.
    fn format_report_sections(&self, report: &CompanyReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.heading("Extracted Info"));
        out.push('\n');
        out.push_str(&self.format_record_json(&report.extracted_info)?);
        out.push_str("\n\n");

        out.push_str(&self.heading("Compliance Checklist"));
        out.push('\n');
        out.push_str(&self.format_checklist_table(&report.checklist));

        Ok(out)
    }

    /// Pretty-printed JSON view of the merged record.
    fn format_record_json(&self, record: &ExtractedRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }

    /// Two-column Field/Status table over the checklist.
    fn format_checklist_table(&self, checklist: &Checklist) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Status"]);

        for entry in checklist {
            let status = if entry.status.is_present() {
                "✅"
            } else {
                "⚠️ Missing"
            };
            builder.push_record([entry.field.as_str(), status]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Section heading.
    fn heading(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
