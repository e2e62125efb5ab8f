//! CSV export of the merged record.

use crate::error::Result;
use pitchlens_domain::ExtractedRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a company's export: spaces become underscores.
pub fn csv_file_name(company_name: &str) -> String {
    format!("{}_extracted_info.csv", company_name.replace(' ', "_"))
}

/// Render the merged record as a single-row CSV.
///
/// Header = the record's keys in insertion order, one data row = the values.
/// Fields containing a comma, quote, or line break are quoted per RFC 4180.
pub fn record_to_csv(record: &ExtractedRecord) -> String {
    let header: Vec<String> = record.field_names().map(quote_field).collect();
    let row: Vec<String> = record.values().map(quote_field).collect();
    format!("{}\n{}\n", header.join(","), row.join(","))
}

/// Write the record's CSV into `dir`, returning the file path.
///
/// Content is UTF-8; the file is named after the company with spaces replaced
/// by underscores.
pub fn write_csv(record: &ExtractedRecord, dir: &Path, company_name: &str) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(company_name));
    fs::write(&path, record_to_csv(record))?;
    Ok(path)
}

fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ExtractedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_csv_file_name_replaces_spaces() {
        assert_eq!(csv_file_name("Acme Corp"), "Acme_Corp_extracted_info.csv");
        assert_eq!(csv_file_name("Acme"), "Acme_extracted_info.csv");
    }

    #[test]
    fn test_record_to_csv_two_lines() {
        let rec = record(&[("Company Name", "Acme"), ("Industry", "Retail")]);
        let csv = record_to_csv(&rec);
        assert_eq!(csv, "Company Name,Industry\nAcme,Retail\n");
    }

    #[test]
    fn test_record_to_csv_quotes_embedded_commas() {
        let rec = record(&[("Use of Funds", "Hiring, marketing")]);
        let csv = record_to_csv(&rec);
        assert_eq!(csv, "Use of Funds\n\"Hiring, marketing\"\n");
    }

    #[test]
    fn test_record_to_csv_escapes_quotes() {
        let rec = record(&[("Vision", "Be the \"best\"")]);
        let csv = record_to_csv(&rec);
        assert_eq!(csv, "Vision\n\"Be the \"\"best\"\"\"\n");
    }

    #[test]
    fn test_csv_column_order_is_insertion_order() {
        let rec = record(&[("Vision", "a"), ("Company Name", "b")]);
        let csv = record_to_csv(&rec);
        assert!(csv.starts_with("Vision,Company Name\n"));
    }

    #[test]
    fn test_write_csv_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let rec = record(&[("Company Name", "Acme"), ("Industry", "Retail")]);

        let path = write_csv(&rec, dir.path(), "Acme Corp").unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Acme_Corp_extracted_info.csv"
        );
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Company Name,Industry\nAcme,Retail\n");
    }
}
