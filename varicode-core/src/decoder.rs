//! Bitstring decoding
//!
//! Two strategies, selected by the table's width setting: fixed-width
//! decoding reads the input in constant-size chunks and is a pure lookup;
//! variable-width decoding segments the input with dynamic programming over
//! bit positions, which is safe to do greedily because tables are verified
//! uniquely decodable when they are built.

use crate::error::CodecError;
use crate::table::CodeTable;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// Decode a bitstring back into text
///
/// In strict mode an undecodable input fails with
/// [`CodecError::NotDecodable`]; in lenient mode the input is returned
/// unchanged instead. An empty input or an empty table always passes the
/// input through unchanged.
pub fn decode(table: &CodeTable, bits: &str, strict: bool) -> Result<String, CodecError> {
    if bits.is_empty() || table.is_empty() {
        return Ok(bits.to_string());
    }
    match table.width() {
        Some(w) => decode_fixed(table, bits, w, strict),
        None => decode_variable(table, bits, strict),
    }
}

/// Fixed-width decoding: consecutive chunks of exactly `width` characters
///
/// Chunks missing from the table are passed through verbatim; this is a
/// deliberate leniency so partially configured tables stay usable. Only a
/// dangling final chunk shorter than the width is treated as a failure.
///
/// A table deserialized from untrusted settings can bypass the setters, so
/// the codeword widths are re-checked here the same way the framer
/// re-checks its marker; a mismatch fails in both modes.
fn decode_fixed(
    table: &CodeTable,
    bits: &str,
    width: usize,
    strict: bool,
) -> Result<String, CodecError> {
    for entry in table.entries() {
        if entry.codeword.chars().count() != width {
            return Err(CodecError::CodewordLengthMismatch {
                codeword: entry.codeword.clone(),
                width,
            });
        }
    }
    let rev = table.reverse_map();

    let chars: Vec<char> = bits.chars().collect();
    let mut out = String::new();
    let mut chunks = chars.chunks_exact(width);
    for chunk in &mut chunks {
        let code: String = chunk.iter().collect();
        match rev.get(code.as_str()) {
            Some(symbol) => out.push_str(symbol),
            None => out.push_str(&code),
        }
    }

    let dangling = chunks.remainder();
    if !dangling.is_empty() {
        if strict {
            return Err(CodecError::NotDecodable {
                fragment: dangling.iter().collect(),
            });
        }
        return Ok(bits.to_string());
    }

    Ok(out)
}

/// Variable-width decoding via dynamic programming over bit positions
///
/// `dp[i]` records the first discovered `(start, symbol)` whose codeword
/// covers the characters `start..i` with `dp[start]` reachable. Unique
/// decodability guarantees at most one segmentation exists, so the first
/// discovery is the only one and no backtracking is needed.
fn decode_variable(table: &CodeTable, bits: &str, strict: bool) -> Result<String, CodecError> {
    let rev = table.reverse_map();
    let chars: Vec<char> = bits.chars().collect();
    let n = chars.len();
    let max_len = table.max_codeword_len();

    let mut dp: Vec<Option<(usize, &str)>> = vec![None; n + 1];
    dp[0] = Some((0, ""));
    for i in 1..=n {
        for l in 1..=max_len.min(i) {
            if dp[i - l].is_none() {
                continue;
            }
            let code: String = chars[i - l..i].iter().collect();
            if let Some(symbol) = rev.get(code.as_str()) {
                dp[i] = Some((i - l, *symbol));
                break;
            }
        }
    }

    if dp[n].is_none() {
        if strict {
            return Err(CodecError::NotDecodable {
                fragment: bits.to_string(),
            });
        }
        return Ok(bits.to_string());
    }

    let mut segments: Vec<&str> = Vec::new();
    let mut idx = n;
    while idx > 0 {
        match dp[idx] {
            Some((start, symbol)) => {
                segments.push(symbol);
                idx = start;
            }
            // Recorded predecessors are always reachable
            None => break,
        }
    }

    let mut out = String::new();
    for symbol in segments.iter().rev() {
        out.push_str(symbol);
    }
    Ok(out)
}
