pub mod check;
pub mod decode;
pub mod encode;
pub mod read;

use anyhow::{bail, Context, Result};
use std::fs;
use varicode_core::CodeTable;

/// Code-table options shared by every subcommand
#[derive(Debug, Default, clap::Args)]
pub struct TableOpts {
    /// Inline table specification: comma-separated "symbol"=codeword pairs
    #[arg(short, long)]
    pub table: Option<String>,

    /// File containing the table specification
    #[arg(long, conflicts_with = "table")]
    pub table_file: Option<String>,

    /// End-of-message marker codeword
    #[arg(long)]
    pub eol: Option<String>,

    /// Fixed code width in bits (omit for variable-length codes)
    #[arg(long)]
    pub width: Option<usize>,
}

/// Build and validate a code table from command-line options
pub fn load_table(opts: &TableOpts) -> Result<CodeTable> {
    let spec = match (&opts.table, &opts.table_file) {
        (Some(spec), _) => spec.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read table file: {}", path))?,
        (None, None) => String::new(),
    };

    let mut table = CodeTable::new();
    // Width first so the mapping and marker are normalized as they land
    if let Some(width) = opts.width {
        table
            .set_width(Some(width))
            .context("Invalid fixed width")?;
    }
    table
        .set_mapping(&spec)
        .context("Invalid table specification")?;
    if let Some(eol) = &opts.eol {
        table
            .set_eol(eol)
            .context("Invalid end-of-message marker")?;
    }

    Ok(table)
}

/// Read command input from a file argument or an inline literal
pub fn read_input(input: Option<&str>, literal: Option<&str>) -> Result<String> {
    match (input, literal) {
        (Some(path), None) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
        }
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => bail!("No input given: pass an input file or an inline value"),
        (Some(_), Some(_)) => bail!("Pass either an input file or an inline value, not both"),
    }
}

/// Write to a file when a path is given, otherwise print to stdout
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
