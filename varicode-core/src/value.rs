//! Nested string/mapping transcoding
//!
//! Channel collaborators (filter and signature settings, address fields)
//! carry their configuration as strings or nested string mappings. This
//! module transcodes such trees through a code table and checks that they
//! conform to the channel's current alphabet.

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::CodecError;
use crate::table::CodeTable;
use crate::{constants, Result};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// A string or an arbitrarily nested string-keyed mapping of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A leaf text value
    Text(String),
    /// A nested mapping of field names to values
    Map(BTreeMap<String, FieldValue>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Check that every leaf of the value consists only of `0` and `1`
pub fn all_binary(value: &FieldValue) -> bool {
    first_non_binary(value).is_none()
}

/// Encode every leaf of the value through the table
pub fn encode_value(table: &CodeTable, value: &FieldValue) -> Result<FieldValue> {
    match value {
        FieldValue::Text(text) => Ok(FieldValue::Text(encode(table, text)?)),
        FieldValue::Map(map) => {
            let mut out = BTreeMap::new();
            for (key, val) in map {
                out.insert(key.clone(), encode_value(table, val)?);
            }
            Ok(FieldValue::Map(out))
        }
    }
}

/// Decode every leaf of the value through the table
pub fn decode_value(table: &CodeTable, value: &FieldValue, strict: bool) -> Result<FieldValue> {
    match value {
        FieldValue::Text(bits) => Ok(FieldValue::Text(decode(table, bits, strict)?)),
        FieldValue::Map(map) => {
            let mut out = BTreeMap::new();
            for (key, val) in map {
                out.insert(key.clone(), decode_value(table, val, strict)?);
            }
            Ok(FieldValue::Map(out))
        }
    }
}

/// Check that a collaborator value fits the channel's current mode
///
/// In symbolic mode every leaf must be encodable through the table; in raw
/// binary mode every leaf must consist only of `0` and `1`
/// ([`CodecError::InvalidAlphabet`] names the first offending leaf).
pub fn check_compliance(table: &CodeTable, value: &FieldValue, symbolic: bool) -> Result<()> {
    if symbolic {
        encode_value(table, value).map(|_| ())
    } else {
        match first_non_binary(value) {
            Some(fragment) => Err(CodecError::InvalidAlphabet {
                fragment: fragment.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// First leaf containing a character outside the binary alphabet
fn first_non_binary(value: &FieldValue) -> Option<&str> {
    match value {
        FieldValue::Text(text) => {
            if constants::is_binary(text) {
                None
            } else {
                Some(text)
            }
        }
        FieldValue::Map(map) => map.values().find_map(first_non_binary),
    }
}
