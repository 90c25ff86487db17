//! Constants for the textual code-table specification format

/// Separator between entries in a table specification
pub const ENTRY_SEPARATOR: char = ',';

/// Separator between a symbol and its codeword within an entry
pub const PAIR_SEPARATOR: char = '=';

/// Quote character optionally wrapping a symbol in a table specification
pub const SYMBOL_QUOTE: char = '"';

/// Character that terminates a message in plain text input
pub const MESSAGE_BREAK: char = '\n';

/// The zero bit of the binary alphabet
pub const BIT_ZERO: char = '0';

/// The one bit of the binary alphabet
pub const BIT_ONE: char = '1';

/// Check that a string consists only of `0` and `1` characters
///
/// The empty string is considered binary.
pub fn is_binary(s: &str) -> bool {
    s.chars().all(|c| c == BIT_ZERO || c == BIT_ONE)
}
