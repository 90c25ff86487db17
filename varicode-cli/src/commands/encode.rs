use crate::commands::{load_table, read_input, write_output, TableOpts};
use anyhow::{Context, Result};
use tracing::info;
use varicode_core::filter::Signature;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    opts: &TableOpts,
    input: Option<&str>,
    text: Option<&str>,
    output: Option<&str>,
    sign_start: Option<&str>,
    sign_end: Option<&str>,
    terminate: bool,
) -> Result<()> {
    let table = load_table(opts)?;
    let mut message = read_input(input, text)?;

    let signature = Signature::new(sign_start.unwrap_or(""), sign_end.unwrap_or(""));
    if !signature.is_empty() {
        message = signature.sign(&message);
    }

    let mut bits = varicode_core::encode(&table, &message).context("Encoding failed")?;

    // Close the outgoing message so receivers can frame it
    if terminate {
        if let Some(eol) = table.eol() {
            bits.push_str(eol);
        }
    }

    info!(
        "Encoded {} characters into {} bits",
        message.chars().count(),
        bits.len()
    );

    write_output(output, &bits)
}
