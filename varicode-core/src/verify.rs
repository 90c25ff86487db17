//! Unique-decodability verification
//!
//! Implements the Sardinas–Patterson condition over a set of words: a code
//! is uniquely decodable iff no dangling suffix produced by repeatedly
//! stripping words off one another is itself a word of the code.

use crate::error::CodecError;
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashSet;

/// Search for a witness that the given words are *not* uniquely decodable
///
/// Maintains a working set of dangling suffixes, initialized to the word
/// set itself. Each round strips every word off the front of every tracked
/// suffix (and vice versa); an empty remainder is ignored, a remainder that
/// equals one of the original words proves ambiguity and is returned as the
/// witness. The search terminates when the working set empties or repeats
/// an already-seen set.
///
/// The working sets are ordered so the reported witness is deterministic.
/// Exact duplicates must be rejected before calling this; the suffix
/// construction alone does not flag them.
pub fn ambiguity_witness<'a, I>(words: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    if words.len() < 2 {
        return None;
    }
    let word_set: HashSet<&str> = words.iter().copied().collect();

    let mut suffixes: BTreeSet<String> = words.iter().map(|w| w.to_string()).collect();
    let mut seen: Vec<BTreeSet<String>> = Vec::new();
    seen.push(suffixes.clone());

    while !suffixes.is_empty() {
        let mut next: BTreeSet<String> = BTreeSet::new();
        for suffix in &suffixes {
            for word in &words {
                // word is a prefix of the suffix: track what dangles past it
                if let Some(rest) = suffix.strip_prefix(word) {
                    if !rest.is_empty() {
                        if word_set.contains(rest) {
                            return Some(rest.to_string());
                        }
                        next.insert(rest.to_string());
                    }
                }
                // suffix is a prefix of the word: the tail dangles
                if let Some(rest) = word.strip_prefix(suffix.as_str()) {
                    if !rest.is_empty() {
                        if word_set.contains(rest) {
                            return Some(rest.to_string());
                        }
                        next.insert(rest.to_string());
                    }
                }
            }
        }
        if seen.iter().any(|s| *s == next) {
            return None;
        }
        seen.push(next.clone());
        suffixes = next;
    }

    None
}

/// Reject a word set that is not uniquely decodable
pub fn ensure_uniquely_decodable<'a, I>(words: I) -> Result<(), CodecError>
where
    I: IntoIterator<Item = &'a str>,
{
    match ambiguity_witness(words) {
        Some(witness) => Err(CodecError::AmbiguousCode { witness }),
        None => Ok(()),
    }
}
