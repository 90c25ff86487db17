//! Fixed-width codeword normalization
//!
//! When a fixed code width is configured, every codeword (including the
//! end-of-message marker) is reconciled to exactly that many bits, treating
//! the codeword as the binary representation of an unsigned integer: short
//! codewords are left-padded with `0`, long codewords may only shed leading
//! `0` bits.

use alloc::string::{String, ToString};

/// Fit a codeword to exactly `width` bits
///
/// Returns `None` when the codeword is too long and a `1` bit would have to
/// be dropped, i.e. when the encoded integer does not fit in `width` bits.
pub fn fit(code: &str, width: usize) -> Option<String> {
    let len = code.chars().count();
    if len < width {
        let mut padded = String::with_capacity(width);
        for _ in 0..width - len {
            padded.push('0');
        }
        padded.push_str(code);
        Some(padded)
    } else if len > width {
        let cut = len - width;
        let mut chars = code.char_indices();
        // Byte offset where the kept tail starts
        let keep_from = chars.nth(cut).map(|(i, _)| i)?;
        if code[..keep_from].contains('1') {
            return None;
        }
        Some(code[keep_from..].to_string())
    } else {
        Some(code.to_string())
    }
}
