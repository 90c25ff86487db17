//! Basic encode/decode round-trip example

use varicode_core::{decode, encode, CodeTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Varicode Basic Round-Trip Example\n");

    // A small prefix code: short codewords for frequent symbols
    let mut table = CodeTable::parse(r#""e"=0, "t"=10, "a"=110, " "=111"#)?;
    table.set_eol("1011")?;

    println!("Table: {}", table.to_spec());

    let text = "eat tea";
    let bits = encode(&table, text)?;
    println!("Encoded {:?} -> {} ({} bits)", text, bits, bits.len());

    let back = decode(&table, &bits, true)?;
    println!("Decoded back -> {:?}", back);
    assert_eq!(back, text);

    // An ambiguous table is rejected at construction time
    match CodeTable::parse(r#""a"=0, "b"=00, "c"=000"#) {
        Err(err) => println!("\nAmbiguous table rejected: {}", err),
        Ok(_) => unreachable!("ambiguous table must not parse"),
    }

    Ok(())
}
