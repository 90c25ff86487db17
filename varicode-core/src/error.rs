//! Error types for varicode operations

use alloc::string::String;

/// Errors that can occur while building or using a code table
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A table-spec entry does not contain exactly one `=`
    #[cfg_attr(
        feature = "std",
        error("Malformed entry {entry:?}: expected exactly one `=`")
    )]
    MalformedEntry {
        /// The offending entry, echoed verbatim
        entry: String,
    },

    /// A codeword is empty or contains characters other than `0`/`1`
    #[cfg_attr(
        feature = "std",
        error("Invalid alphabet in {fragment:?}: only `0` and `1` are allowed")
    )]
    InvalidAlphabet {
        /// The offending value, echoed verbatim
        fragment: String,
    },

    /// The same symbol appears more than once in a table specification
    #[cfg_attr(feature = "std", error("Symbol {symbol:?} is mapped more than once"))]
    DuplicateSymbol {
        /// The repeated symbol
        symbol: String,
    },

    /// The same codeword is assigned to more than one symbol (or to the EOL marker)
    #[cfg_attr(
        feature = "std",
        error("Codeword {codeword:?} is assigned more than once")
    )]
    DuplicateCodeword {
        /// The repeated codeword
        codeword: String,
    },

    /// The code admits two distinct factorizations of some bitstring
    #[cfg_attr(
        feature = "std",
        error("Code is not uniquely decodable, witness suffix {witness:?}")
    )]
    AmbiguousCode {
        /// A dangling suffix proving the ambiguity
        witness: String,
    },

    /// A codeword cannot be normalized to the configured fixed width
    #[cfg_attr(
        feature = "std",
        error("Codeword {codeword:?} of {symbol:?} cannot be fit to width {width}")
    )]
    CannotFitLength {
        /// The symbol owning the codeword (`<eol>` for the end-of-message marker)
        symbol: String,
        /// The codeword that does not fit
        codeword: String,
        /// The configured fixed width
        width: usize,
    },

    /// No symbol in the table matches the input at some position
    #[cfg_attr(feature = "std", error("{fragment:?} is not encodable"))]
    NotEncodable {
        /// The unmatched remainder of the input
        fragment: String,
    },

    /// Encoding non-empty text requires a non-empty table
    #[cfg_attr(feature = "std", error("Cannot encode with an empty code table"))]
    EmptyTable,

    /// The bitstring has no valid segmentation into codewords (strict mode only)
    #[cfg_attr(feature = "std", error("{fragment:?} is not decodable"))]
    NotDecodable {
        /// The undecodable fragment of the input
        fragment: String,
    },

    /// The end-of-message marker contains characters other than `0`/`1`
    #[cfg_attr(
        feature = "std",
        error("End-of-message marker {eol:?}: only `0` and `1` are allowed")
    )]
    InvalidEolAlphabet {
        /// The offending marker
        eol: String,
    },

    /// Fixed-width decoding requires every codeword to have exactly the width
    #[cfg_attr(
        feature = "std",
        error("Codeword {codeword:?} does not match fixed width {width}")
    )]
    CodewordLengthMismatch {
        /// The codeword with the wrong length
        codeword: String,
        /// Configured fixed width
        width: usize,
    },

    /// Fixed-width framing requires the marker length to equal the width
    #[cfg_attr(
        feature = "std",
        error("End-of-message marker has length {eol_len}, expected width {width}")
    )]
    EolLengthMismatch {
        /// Actual marker length
        eol_len: usize,
        /// Configured fixed width
        width: usize,
    },
}
