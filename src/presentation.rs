// src/presentation.rs
use crate::config::Config;
use crate::filesystem::FileRecord;
use crate::metadata::{self, BklmlInfo};
use crate::options::OutputFormat;
use serde::Serialize;
use std::path::Path;

// Detail table column widths.
const PATH_WIDTH: usize = 35;
const VERSION_WIDTH: usize = 8;
const RULE_WIDTH: usize = 70;

/// Print the scan results to stdout.
///
/// Display order is lexicographic by path string, applied here so the
/// output is deterministic regardless of filesystem enumeration order.
pub fn print_results(records: &[FileRecord], config: &Config) {
    let records = sorted(records);

    match config.format {
        OutputFormat::Text => print_text(&records, config),
        OutputFormat::Json => print_json(&records, config),
    }
}

fn sorted(records: &[FileRecord]) -> Vec<&FileRecord> {
    let mut records: Vec<&FileRecord> = records.iter().collect();
    records.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    records
}

fn print_text(records: &[&FileRecord], config: &Config) {
    if records.is_empty() {
        println!("No .bklml files found.");
        return;
    }

    println!("Found {} .bklml file(s):", records.len());

    if config.details {
        print_detail_table(records);
    } else {
        print_path_list(records);
    }
}

fn print_path_list(records: &[&FileRecord]) {
    println!();
    println!("File paths:");
    for record in records {
        println!("  {}", record.path.display());
    }
}

fn print_detail_table(records: &[&FileRecord]) {
    println!();
    println!("{:<PATH_WIDTH$} | {:<VERSION_WIDTH$} | Description", "File path", "Version");
    println!("{}", "-".repeat(RULE_WIDTH));

    for record in records {
        let info = metadata::extract(&record.path);
        println!("{}", format_detail_row(&record.path, &info));
    }
}

fn format_detail_row(path: &Path, info: &BklmlInfo) -> String {
    let path = path.display().to_string();
    match &info.error {
        Some(error) => format!("{path:<PATH_WIDTH$} | {:<VERSION_WIDTH$} | {error}", "ERROR"),
        None => format!(
            "{path:<PATH_WIDTH$} | {:<VERSION_WIDTH$} | {}",
            info.version, info.description
        ),
    }
}

/// JSON row for detail mode: the record's path merged with its metadata.
#[derive(Serialize)]
struct DetailRow<'a> {
    path: &'a Path,
    version: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json(records: &[&FileRecord], config: &Config) {
    if config.details {
        let rows: Vec<DetailRow<'_>> = records
            .iter()
            .map(|record| {
                let info = metadata::extract(&record.path);
                DetailRow {
                    path: &record.path,
                    version: info.version,
                    description: info.description,
                    error: info.error,
                }
            })
            .collect();
        if let Ok(json) = serde_json::to_string_pretty(&rows) {
            println!("{json}");
        }
    } else if let Ok(json) = serde_json::to_string_pretty(records) {
        println!("{json}");
    }
}
