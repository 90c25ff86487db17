use crate::commands::{load_table, TableOpts};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

/// Validation report for a table specification
#[derive(Debug, Serialize)]
pub struct TableReport {
    /// Number of configured entries
    pub entries: usize,
    /// Canonical rendering of the mapping
    pub spec: String,
    /// Configured end-of-message marker, if any
    pub eol: Option<String>,
    /// Configured fixed width, if any
    pub width: Option<usize>,
}

pub fn execute(opts: &TableOpts, json: bool) -> Result<()> {
    let table = load_table(opts)?;

    info!("Table specification is valid ({} entries)", table.len());

    let report = TableReport {
        entries: table.len(),
        spec: table.to_spec(),
        eol: table.eol().map(str::to_string),
        width: table.width(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} table specification is valid", "OK".green().bold());
    println!("  entries: {}", report.entries);
    if !report.spec.is_empty() {
        println!("  canonical: {}", report.spec);
    }
    if let Some(eol) = &report.eol {
        println!("  eol marker: {}", eol);
    }
    match report.width {
        Some(width) => println!("  fixed width: {} bits", width),
        None => println!("  variable-length codewords"),
    }

    Ok(())
}
