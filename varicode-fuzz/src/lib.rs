//! Fuzzing placeholder for varicode-core parsing and decoding
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

pub fn fuzz_parse(data: &[u8]) {
    use varicode_core::CodeTable;

    // Try to parse a table spec - should never panic
    let spec = String::from_utf8_lossy(data);
    let _ = CodeTable::parse(&spec);
}

pub fn fuzz_decode(data: &[u8]) {
    use varicode_core::{decode, split_on_eol, CodeTable};

    let mut table = CodeTable::parse("\"a\"=0, \"b\"=10, \"c\"=110, \"d\"=111")
        .expect("fixture table is valid");
    table.set_eol("1111").expect("fixture eol is valid");

    // Try to split and decode arbitrary input - should never panic
    let bits = String::from_utf8_lossy(data);
    if let Ok(messages) = split_on_eol(&table, &bits) {
        for message in messages {
            let _ = decode(&table, &message, true);
            let _ = decode(&table, &message, false);
        }
    }
}
