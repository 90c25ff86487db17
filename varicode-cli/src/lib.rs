//! Library entry for varicode-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// How channel content is interpreted when reading
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadMode {
    /// Show framed messages as raw bitstrings
    Binary,
    /// Decode each framed message through the table
    Symbolic,
}
