//! Framed channel example: fixed-width codes, message splitting, filtering

use varicode_core::filter::{MessageFilter, Signature};
use varicode_core::{decode, encode, split_on_eol, CodeTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Varicode Framed Channel Example\n");

    // Fixed-width setup: the width goes in first so the mapping lands
    // already normalized to 3 bits ("11" alone would be ambiguous)
    let mut table = CodeTable::new();
    table.set_width(Some(3))?;
    table.set_mapping(r#""x"=1, "y"=10, "z"=11"#)?;
    table.set_eol("111")?;

    println!("Normalized table: {}", table.to_spec());

    // A sender signs and encodes two messages onto the shared channel
    let signature = Signature::new("", "z");
    let outgoing = signature.sign("xy\nyx");
    let mut stream = encode(&table, &outgoing)?;
    if let Some(eol) = table.eol() {
        stream.push_str(eol);
    }
    println!("Channel stream: {}", stream);

    // The receiver splits the stream and keeps only messages ending in "z"
    let messages = split_on_eol(&table, &stream)?;
    let filter = MessageFilter::new("", table.codeword_of("z").unwrap_or(""))?;
    for message in filter.retain(messages) {
        if message.is_empty() {
            continue;
        }
        println!("Received: {} -> {:?}", message, decode(&table, &message, true)?);
    }

    Ok(())
}
