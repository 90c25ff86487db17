use crate::commands::{load_table, read_input, write_output, TableOpts};
use crate::ReadMode;
use anyhow::{Context, Result};
use tracing::info;
use varicode_core::filter::MessageFilter;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    opts: &TableOpts,
    input: Option<&str>,
    bits: Option<&str>,
    output: Option<&str>,
    mode: ReadMode,
    starts: Option<&str>,
    ends: Option<&str>,
    strict: bool,
    json: bool,
) -> Result<()> {
    let table = load_table(opts)?;
    let stream = read_input(input, bits)?;
    let stream = stream.trim_end_matches('\n');

    let messages =
        varicode_core::split_on_eol(&table, stream).context("Framing failed")?;
    info!("Stream of {} bits split into {} messages", stream.len(), messages.len());

    let filter = MessageFilter::new(starts.unwrap_or(""), ends.unwrap_or(""))
        .context("Invalid filter pattern")?;

    let messages = match mode {
        // Raw mode filters the bit patterns themselves
        ReadMode::Binary => filter.retain(messages),
        // Symbolic mode decodes first, then filters the decoded text
        ReadMode::Symbolic => {
            let mut decoded = Vec::with_capacity(messages.len());
            for message in &messages {
                let text = varicode_core::decode(&table, message, strict)
                    .with_context(|| format!("Failed to decode message {:?}", message))?;
                if filter.matches(&text) {
                    decoded.push(text);
                }
            }
            decoded
        }
    };

    info!("{} messages after filtering", messages.len());

    let rendered = if json {
        serde_json::to_string_pretty(&messages)?
    } else {
        messages
            .iter()
            .map(|m| format!("> {}", m))
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(output, &rendered)
}
