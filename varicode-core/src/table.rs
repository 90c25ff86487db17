//! Code table parsing, rendering and atomic reconfiguration
//!
//! A [`CodeTable`] maps plain-text symbols to binary codewords, optionally
//! carries an end-of-message marker and a fixed code width. Every mutating
//! operation validates a full candidate table and either commits it
//! wholesale or leaves the previous table untouched.

use crate::constants::{is_binary, ENTRY_SEPARATOR, PAIR_SEPARATOR, SYMBOL_QUOTE};
use crate::error::CodecError;
use crate::{verify, width};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Placeholder symbol naming the end-of-message marker in width errors
const EOL_NAME: &str = "<eol>";

/// A single symbol-to-codeword association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// The plain-text symbol (word, letter or short phrase)
    pub symbol: String,

    /// The binary codeword assigned to the symbol
    pub codeword: String,
}

/// A validated symbol/codeword mapping with optional EOL marker and width
///
/// Invariants held between mutations:
/// - symbols are unique, codewords are unique and non-empty binary strings
/// - the codeword set and the symbol set are each uniquely decodable
/// - the EOL marker, if set, is binary and distinct from every codeword
/// - with a fixed width configured, every codeword and the EOL marker have
///   exactly that width
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    eol: Option<String>,
    width: Option<usize>,
}

impl CodeTable {
    /// Create an empty table with no EOL marker and variable width
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a textual table specification into a fresh table
    ///
    /// The specification is a comma-separated list of `"symbol"=codeword`
    /// pairs; quotes around the symbol are optional. An empty specification
    /// yields an empty table.
    pub fn parse(spec: &str) -> Result<Self, CodecError> {
        let mut table = Self::new();
        table.set_mapping(spec)?;
        Ok(table)
    }

    /// Replace the symbol/codeword mapping from a textual specification
    ///
    /// The EOL marker and fixed width are retained and re-applied to the new
    /// mapping. On any error the previous mapping stays in place.
    pub fn set_mapping(&mut self, spec: &str) -> Result<(), CodecError> {
        let entries = parse_entries(spec)?;
        let candidate = CodeTable {
            entries,
            eol: self.eol.clone(),
            width: self.width,
        };
        self.commit(candidate)
    }

    /// Replace the end-of-message marker; an empty marker clears it
    ///
    /// The marker is normalized to the fixed width (if any) and the whole
    /// table is re-checked before the change takes effect.
    pub fn set_eol(&mut self, eol: &str) -> Result<(), CodecError> {
        let eol = eol.trim();
        if !eol.is_empty() && !is_binary(eol) {
            return Err(CodecError::InvalidEolAlphabet {
                eol: eol.to_string(),
            });
        }
        let candidate = CodeTable {
            entries: self.entries.clone(),
            eol: if eol.is_empty() {
                None
            } else {
                Some(eol.to_string())
            },
            width: self.width,
        };
        self.commit(candidate)
    }

    /// Replace the fixed code width; `None` or `Some(0)` selects variable width
    ///
    /// All codewords and the EOL marker are re-normalized to the new width
    /// and the table is re-checked before the change takes effect.
    pub fn set_width(&mut self, width: Option<usize>) -> Result<(), CodecError> {
        let candidate = CodeTable {
            entries: self.entries.clone(),
            eol: self.eol.clone(),
            width: width.filter(|w| *w > 0),
        };
        self.commit(candidate)
    }

    /// Render the table back into its textual specification
    ///
    /// Each entry is rendered as `"symbol"=codeword`; entries are joined by
    /// `", "` with a trailing comma. An empty table renders as the empty
    /// string. `parse` of the result reproduces the mapping.
    pub fn to_spec(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(ENTRY_SEPARATOR);
                out.push(' ');
            }
            out.push(SYMBOL_QUOTE);
            out.push_str(&entry.symbol);
            out.push(SYMBOL_QUOTE);
            out.push(PAIR_SEPARATOR);
            out.push_str(&entry.codeword);
        }
        out.push(ENTRY_SEPARATOR);
        out
    }

    /// The configured entries, in specification order
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    /// The end-of-message marker, if configured
    pub fn eol(&self) -> Option<&str> {
        self.eol.as_deref()
    }

    /// The fixed code width, if configured
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of configured entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the codeword assigned to a symbol
    pub fn codeword_of(&self, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.codeword.as_str())
    }

    /// Symbol-to-codeword lookup map borrowing from the table
    pub fn symbol_map(&self) -> HashMap<&str, &str> {
        self.entries
            .iter()
            .map(|e| (e.symbol.as_str(), e.codeword.as_str()))
            .collect()
    }

    /// Codeword-to-symbol lookup map borrowing from the table
    pub fn reverse_map(&self) -> HashMap<&str, &str> {
        self.entries
            .iter()
            .map(|e| (e.codeword.as_str(), e.symbol.as_str()))
            .collect()
    }

    /// Length in characters of the longest symbol (0 for an empty table)
    pub fn max_symbol_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.symbol.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Length in characters of the longest codeword (0 for an empty table)
    pub fn max_codeword_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.codeword.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Validate a candidate table and swap it in, or keep the current one
    fn commit(&mut self, mut candidate: CodeTable) -> Result<(), CodecError> {
        match candidate.normalize_and_check() {
            Ok(()) => {
                #[cfg(feature = "logging")]
                debug!(
                    "committed code table: {} entries, eol={:?}, width={:?}",
                    candidate.entries.len(),
                    candidate.eol,
                    candidate.width
                );
                *self = candidate;
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "logging")]
                warn!("rejected code table update: {:?}", err);
                Err(err)
            }
        }
    }

    /// Normalize codewords to the fixed width and run all integrity checks
    fn normalize_and_check(&mut self) -> Result<(), CodecError> {
        if let Some(w) = self.width {
            for entry in &mut self.entries {
                entry.codeword = width::fit(&entry.codeword, w).ok_or_else(|| {
                    CodecError::CannotFitLength {
                        symbol: entry.symbol.clone(),
                        codeword: entry.codeword.clone(),
                        width: w,
                    }
                })?;
            }
            if let Some(eol) = &mut self.eol {
                *eol = width::fit(eol, w).ok_or_else(|| CodecError::CannotFitLength {
                    symbol: EOL_NAME.to_string(),
                    codeword: eol.clone(),
                    width: w,
                })?;
            }
        }

        // Exact duplicates first; the suffix algorithm does not flag them
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.codeword.as_str()) {
                return Err(CodecError::DuplicateCodeword {
                    codeword: entry.codeword.clone(),
                });
            }
        }

        // The EOL marker must stay distinguishable from every codeword
        if let Some(eol) = &self.eol {
            if seen.contains(eol.as_str()) {
                return Err(CodecError::DuplicateCodeword {
                    codeword: eol.clone(),
                });
            }
        }

        verify::ensure_uniquely_decodable(self.entries.iter().map(|e| e.codeword.as_str()))?;
        verify::ensure_uniquely_decodable(self.entries.iter().map(|e| e.symbol.as_str()))?;

        Ok(())
    }
}

/// Parse the entry list of a textual table specification
fn parse_entries(spec: &str) -> Result<Vec<CodeEntry>, CodecError> {
    let body = spec.trim().trim_matches(ENTRY_SEPARATOR);
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<CodeEntry> = Vec::new();
    let mut symbols: HashSet<String> = HashSet::new();

    for raw in body.split(ENTRY_SEPARATOR) {
        if raw.trim().is_empty() {
            return Err(CodecError::MalformedEntry {
                entry: raw.to_string(),
            });
        }
        let mut parts = raw.split(PAIR_SEPARATOR);
        let (symbol_part, codeword_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(s), Some(c), None) => (s, c),
            _ => {
                return Err(CodecError::MalformedEntry {
                    entry: raw.trim().to_string(),
                })
            }
        };

        let codeword = codeword_part.trim();
        if codeword.is_empty() || !is_binary(codeword) {
            return Err(CodecError::InvalidAlphabet {
                fragment: raw.trim().to_string(),
            });
        }

        let symbol = symbol_part.trim().trim_matches(SYMBOL_QUOTE);
        if symbol.is_empty() {
            return Err(CodecError::MalformedEntry {
                entry: raw.trim().to_string(),
            });
        }
        if !symbols.insert(symbol.to_string()) {
            return Err(CodecError::DuplicateSymbol {
                symbol: symbol.to_string(),
            });
        }

        entries.push(CodeEntry {
            symbol: symbol.to_string(),
            codeword: codeword.to_string(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_spec() {
        let table = CodeTable::parse(r#""a"=0, "b"=10, "c"=110, "d"=111,"#).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.codeword_of("a"), Some("0"));
        assert_eq!(table.codeword_of("d"), Some("111"));
    }

    #[test]
    fn test_parse_unquoted_symbols() {
        let table = CodeTable::parse("yes=01, no=10").unwrap();
        assert_eq!(table.codeword_of("yes"), Some("01"));
        assert_eq!(table.codeword_of("no"), Some("10"));
    }

    #[test]
    fn test_empty_spec_yields_empty_table() {
        let table = CodeTable::parse("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.to_spec(), "");
    }

    #[test]
    fn test_stray_comma_is_malformed() {
        let result = CodeTable::parse(r#""a"=0,, "b"=10"#);
        assert!(matches!(result, Err(CodecError::MalformedEntry { .. })));
    }

    #[test]
    fn test_missing_equals_is_malformed() {
        let result = CodeTable::parse(r#""a"0"#);
        assert!(matches!(result, Err(CodecError::MalformedEntry { .. })));
    }

    #[test]
    fn test_double_equals_is_malformed() {
        let result = CodeTable::parse(r#""a"=0=1"#);
        assert!(matches!(result, Err(CodecError::MalformedEntry { .. })));
    }

    #[test]
    fn test_nonbinary_codeword_is_rejected() {
        let result = CodeTable::parse(r#""a"=012"#);
        assert!(matches!(result, Err(CodecError::InvalidAlphabet { .. })));
    }

    #[test]
    fn test_empty_codeword_is_rejected() {
        let result = CodeTable::parse(r#""a"="#);
        assert!(matches!(result, Err(CodecError::InvalidAlphabet { .. })));
    }

    #[test]
    fn test_duplicate_symbol_is_rejected() {
        let result = CodeTable::parse(r#""a"=0, "a"=1"#);
        assert_eq!(
            result,
            Err(CodecError::DuplicateSymbol { symbol: "a".into() })
        );
    }

    #[test]
    fn test_duplicate_codeword_is_rejected() {
        let result = CodeTable::parse(r#""a"=01, "b"=01"#);
        assert_eq!(
            result,
            Err(CodecError::DuplicateCodeword {
                codeword: "01".into()
            })
        );
    }

    #[test]
    fn test_ambiguous_code_is_rejected_with_witness() {
        let result = CodeTable::parse(r#""a"=0, "b"=00, "c"=000"#);
        assert_eq!(
            result,
            Err(CodecError::AmbiguousCode { witness: "0".into() })
        );
    }

    #[test]
    fn test_ambiguous_symbols_are_rejected() {
        // Codewords are fine, but the symbol set cannot be segmented uniquely
        let result = CodeTable::parse(r#""x"=0, "xy"=10, "y"=11"#);
        assert!(matches!(result, Err(CodecError::AmbiguousCode { .. })));
    }

    #[test]
    fn test_failed_update_keeps_previous_mapping() {
        let mut table = CodeTable::parse(r#""a"=0, "b"=10"#).unwrap();
        let before = table.clone();
        assert!(table.set_mapping(r#""a"=0, "b"=00, "c"=000"#).is_err());
        assert_eq!(table, before);
    }

    #[test]
    fn test_set_width_pads_all_codewords() {
        let mut table = CodeTable::parse(r#""x"=1, "y"=10"#).unwrap();
        table.set_width(Some(4)).unwrap();
        assert_eq!(table.codeword_of("x"), Some("0001"));
        assert_eq!(table.codeword_of("y"), Some("0010"));
    }

    #[test]
    fn test_set_width_rejects_unfittable_codeword_atomically() {
        let mut table = CodeTable::parse(r#""x"=1, "y"=10000"#).unwrap();
        let before = table.clone();
        let result = table.set_width(Some(4));
        assert_eq!(
            result,
            Err(CodecError::CannotFitLength {
                symbol: "y".into(),
                codeword: "10000".into(),
                width: 4,
            })
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_set_width_detects_collision_after_padding() {
        // "1" and "01" collapse to the same word at width 4
        let mut table = CodeTable::parse(r#""a"=1, "b"=01"#).unwrap();
        let result = table.set_width(Some(4));
        assert_eq!(
            result,
            Err(CodecError::DuplicateCodeword {
                codeword: "0001".into()
            })
        );
    }

    #[test]
    fn test_width_first_order_accepts_codes_ambiguous_at_variable_width() {
        // "11" factors as "1"+"1", so this mapping cannot land on a
        // variable-width table
        assert_eq!(
            CodeTable::parse(r#""x"=1, "y"=10, "z"=11"#),
            Err(CodecError::AmbiguousCode { witness: "1".into() })
        );
        // With the width configured first the codewords are padded apart
        // as they land
        let mut table = CodeTable::new();
        table.set_width(Some(3)).unwrap();
        table.set_mapping(r#""x"=1, "y"=10, "z"=11"#).unwrap();
        assert_eq!(table.codeword_of("x"), Some("001"));
        assert_eq!(table.codeword_of("z"), Some("011"));
    }

    #[test]
    fn test_set_eol_rejects_nonbinary_marker() {
        let mut table = CodeTable::new();
        assert!(matches!(
            table.set_eol("10a"),
            Err(CodecError::InvalidEolAlphabet { .. })
        ));
    }

    #[test]
    fn test_set_eol_rejects_collision_with_codeword() {
        let mut table = CodeTable::parse(r#""a"=0, "b"=10"#).unwrap();
        assert_eq!(
            table.set_eol("10"),
            Err(CodecError::DuplicateCodeword {
                codeword: "10".into()
            })
        );
        assert_eq!(table.eol(), None);
    }

    #[test]
    fn test_set_eol_is_normalized_to_width() {
        let mut table = CodeTable::new();
        table.set_width(Some(3)).unwrap();
        table.set_eol("1").unwrap();
        assert_eq!(table.eol(), Some("001"));
    }

    #[test]
    fn test_clearing_eol_and_width() {
        let mut table = CodeTable::parse(r#""a"=110"#).unwrap();
        table.set_eol("111").unwrap();
        table.set_eol("").unwrap();
        assert_eq!(table.eol(), None);
        table.set_width(Some(3)).unwrap();
        table.set_width(Some(0)).unwrap();
        assert_eq!(table.width(), None);
    }

    #[test]
    fn test_spec_rendering_round_trips() {
        let spec = r#""a"=0, "b"=10, "hello world"=110,"#;
        let table = CodeTable::parse(spec).unwrap();
        assert_eq!(table.to_spec(), spec);
        assert_eq!(CodeTable::parse(&table.to_spec()).unwrap(), table);
    }
}
