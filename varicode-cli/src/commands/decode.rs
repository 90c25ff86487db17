use crate::commands::{load_table, read_input, write_output, TableOpts};
use anyhow::{Context, Result};
use tracing::info;

pub fn execute(
    opts: &TableOpts,
    input: Option<&str>,
    bits: Option<&str>,
    output: Option<&str>,
    strict: bool,
) -> Result<()> {
    let table = load_table(opts)?;
    let bits = read_input(input, bits)?;
    let bits = bits.trim_end_matches('\n');

    let text = varicode_core::decode(&table, bits, strict).context("Decoding failed")?;

    info!("Decoded {} bits into {} characters", bits.len(), text.chars().count());

    write_output(output, &text)
}
