//! # Varicode Core
//!
//! A variable-length binary code table with online integrity verification,
//! greedy encoding, two decoding strategies and delimiter-based framing.
//!
//! ## Modules
//!
//! - `constants`: Spec-text separators and the bit alphabet
//! - `error`: Codec error taxonomy (CodecError)
//! - `verify`: Sardinas–Patterson unique-decodability check
//! - `width`: Fixed-width codeword normalization
//! - `table`: Code table parsing, rendering and atomic reconfiguration
//! - `encoder`: Greedy longest-match text-to-bits encoding
//! - `decoder`: Fixed-width and variable-width (DP) bits-to-text decoding
//! - `framer`: End-of-message delimiter splitting
//! - `value`: Nested string/mapping transcoding and alphabet checks
//! - `filter`: Message filtering and signatures for channel collaborators

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod framer;
pub mod table;
pub mod value;
pub mod verify;
pub mod width;

// Re-export commonly used items
pub use decoder::decode;
pub use encoder::encode;
pub use error::CodecError;
pub use framer::split_on_eol;
pub use table::{CodeEntry, CodeTable};

/// Result type alias for varicode operations
pub type Result<T> = core::result::Result<T, CodecError>;
