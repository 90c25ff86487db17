//! End-of-message delimiter framing
//!
//! Splits a continuous bitstream into messages on the table's EOL marker.
//! In variable-width mode the marker is a plain substring delimiter; in
//! fixed-width mode the stream is scanned in width-sized steps so a marker
//! pattern straddling two codewords is not mistaken for a delimiter.

use crate::constants::is_binary;
use crate::error::CodecError;
use crate::table::CodeTable;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// Split a bitstream into messages on the end-of-message marker
///
/// Without a configured marker the whole input is a single message.
/// Matches are leftmost and non-overlapping; empty messages (adjacent or
/// leading/trailing markers) are kept, so the result always holds at least
/// one element. In fixed-width mode any dangling bits shorter than the
/// width are appended to the final, still-open message.
pub fn split_on_eol(table: &CodeTable, bits: &str) -> Result<Vec<String>, CodecError> {
    let eol = match table.eol() {
        Some(eol) if !eol.is_empty() => eol,
        _ => return Ok(vec![bits.to_string()]),
    };
    if !is_binary(eol) {
        return Err(CodecError::InvalidEolAlphabet {
            eol: eol.to_string(),
        });
    }

    match table.width() {
        Some(width) => {
            let eol_len = eol.chars().count();
            if eol_len != width {
                return Err(CodecError::EolLengthMismatch { eol_len, width });
            }

            let chars: Vec<char> = bits.chars().collect();
            let mut messages = Vec::new();
            let mut current = String::new();
            let mut chunks = chars.chunks_exact(width);
            for chunk in &mut chunks {
                let block: String = chunk.iter().collect();
                if block == eol {
                    messages.push(core::mem::take(&mut current));
                } else {
                    current.push_str(&block);
                }
            }
            current.extend(chunks.remainder());
            messages.push(current);
            Ok(messages)
        }
        None => {
            // The marker is pure ASCII, so match offsets are char boundaries
            let mut messages = Vec::new();
            let mut from = 0;
            for pos in memchr::memmem::find_iter(bits.as_bytes(), eol.as_bytes()) {
                messages.push(bits[from..pos].to_string());
                from = pos + eol.len();
            }
            messages.push(bits[from..].to_string());
            Ok(messages)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marker_yields_single_message() {
        let table = CodeTable::new();
        assert_eq!(split_on_eol(&table, "010101").unwrap(), vec!["010101"]);
    }

    #[test]
    fn test_variable_width_substring_split() {
        let mut table = CodeTable::new();
        table.set_eol("11").unwrap();
        // Leftmost non-overlapping matches, empty tail segment kept
        assert_eq!(
            split_on_eol(&table, "0111011").unwrap(),
            vec!["0", "10", ""]
        );
    }

    #[test]
    fn test_variable_width_split_keeps_empty_segments() {
        let mut table = CodeTable::new();
        table.set_eol("11").unwrap();
        assert_eq!(
            split_on_eol(&table, "11011011").unwrap(),
            vec!["", "0", "0", ""]
        );
    }

    #[test]
    fn test_fixed_width_chunked_split() {
        let mut table = CodeTable::new();
        table.set_width(Some(3)).unwrap();
        table.set_eol("000").unwrap();
        assert_eq!(
            split_on_eol(&table, "001000010").unwrap(),
            vec!["001", "010"]
        );
    }

    #[test]
    fn test_fixed_width_marker_straddling_chunks_is_no_delimiter() {
        let mut table = CodeTable::new();
        table.set_width(Some(3)).unwrap();
        table.set_eol("000").unwrap();
        // "000" appears across the chunk boundary of "100"+"001" only
        assert_eq!(split_on_eol(&table, "100001").unwrap(), vec!["100001"]);
    }

    #[test]
    fn test_fixed_width_dangling_bits_stay_in_last_message() {
        let mut table = CodeTable::new();
        table.set_width(Some(3)).unwrap();
        table.set_eol("000").unwrap();
        assert_eq!(
            split_on_eol(&table, "00100001").unwrap(),
            vec!["001", "01"]
        );
    }

    #[test]
    fn test_empty_input_yields_one_empty_message() {
        let mut table = CodeTable::new();
        table.set_eol("11").unwrap();
        assert_eq!(split_on_eol(&table, "").unwrap(), vec![""]);
    }
}
