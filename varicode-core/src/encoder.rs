//! Greedy longest-match text encoding

use crate::constants::MESSAGE_BREAK;
use crate::error::CodecError;
use crate::table::CodeTable;
use alloc::string::{String, ToString};

/// Encode plain text into a bitstring using the table's mapping
///
/// At each position the longest matching symbol is consumed and its
/// codeword appended. A literal newline always emits the configured
/// end-of-message marker (or nothing when no marker is set), regardless of
/// the table contents.
///
/// Encoding the empty string yields the empty bitstring. Encoding
/// non-empty text with an empty table fails with [`CodecError::EmptyTable`];
/// a position where no symbol of any length matches fails with
/// [`CodecError::NotEncodable`] naming the unmatched remainder.
pub fn encode(table: &CodeTable, text: &str) -> Result<String, CodecError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    if table.is_empty() {
        return Err(CodecError::EmptyTable);
    }

    let map = table.symbol_map();
    let max_len = table.max_symbol_len();
    let mut out = String::new();
    let mut rest = text;

    'scan: while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(MESSAGE_BREAK) {
            if let Some(eol) = table.eol() {
                out.push_str(eol);
            }
            rest = tail;
            continue;
        }
        for len in (1..=max_len).rev() {
            if let Some(end) = prefix_len(rest, len) {
                if let Some(code) = map.get(&rest[..end]) {
                    out.push_str(code);
                    rest = &rest[end..];
                    continue 'scan;
                }
            }
        }
        return Err(CodecError::NotEncodable {
            fragment: rest.to_string(),
        });
    }

    Ok(out)
}

/// Byte length of the first `chars` characters of `s`, if that many exist
fn prefix_len(s: &str, chars: usize) -> Option<usize> {
    let mut count = 0;
    for (i, c) in s.char_indices() {
        count += 1;
        if count == chars {
            return Some(i + c.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_table() -> CodeTable {
        CodeTable::parse(r#""a"=0, "b"=10, "c"=110, "d"=111"#).unwrap()
    }

    #[test]
    fn test_encode_simple_text() {
        let table = prefix_table();
        assert_eq!(encode(&table, "abcd").unwrap(), "010110111");
    }

    #[test]
    fn test_encode_empty_text() {
        assert_eq!(encode(&prefix_table(), "").unwrap(), "");
        assert_eq!(encode(&CodeTable::new(), "").unwrap(), "");
    }

    #[test]
    fn test_encode_with_empty_table_fails() {
        assert_eq!(
            encode(&CodeTable::new(), "hello"),
            Err(CodecError::EmptyTable)
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let table = CodeTable::parse(r#""a"=0, "ab"=10"#).unwrap();
        assert_eq!(encode(&table, "ab").unwrap(), "10");
        assert_eq!(encode(&table, "a").unwrap(), "0");
    }

    #[test]
    fn test_unmatched_remainder_is_reported() {
        let table = prefix_table();
        assert_eq!(
            encode(&table, "abxali"),
            Err(CodecError::NotEncodable {
                fragment: "xali".into()
            })
        );
    }

    #[test]
    fn test_newline_emits_eol_marker() {
        let mut table = prefix_table();
        table.set_eol("1101").unwrap();
        assert_eq!(encode(&table, "a\nb").unwrap(), "0110110");
    }

    #[test]
    fn test_trailing_newline_terminates_cleanly() {
        let mut table = prefix_table();
        table.set_eol("1101").unwrap();
        assert_eq!(encode(&table, "ab\n").unwrap(), "0101101");
    }

    #[test]
    fn test_newline_without_eol_marker_is_dropped() {
        let table = prefix_table();
        assert_eq!(encode(&table, "a\nb").unwrap(), "010");
    }

    #[test]
    fn test_multi_character_symbols() {
        let table = CodeTable::parse(r#""yes"=01, "no"=10"#).unwrap();
        assert_eq!(encode(&table, "yesno").unwrap(), "0110");
    }
}
