//! Message filtering and signatures
//!
//! Collaborator helpers for the shared channel: a [`MessageFilter`] keeps
//! only messages whose bit pattern (or decoded text) carries configured
//! start/end markers, and a [`Signature`] decorates outgoing lines with a
//! sender tag before encoding.

use crate::constants::is_binary;
use crate::error::CodecError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Start/end pattern filter applied to framed messages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageFilter {
    starts: String,
    ends: String,
}

impl MessageFilter {
    /// Build a filter from binary start/end patterns; empty patterns are off
    pub fn new(starts: &str, ends: &str) -> Result<Self, CodecError> {
        for pattern in [starts, ends] {
            if !is_binary(pattern) {
                return Err(CodecError::InvalidAlphabet {
                    fragment: pattern.to_string(),
                });
            }
        }
        Ok(Self {
            starts: starts.to_string(),
            ends: ends.to_string(),
        })
    }

    /// The required message prefix, empty when unset
    pub fn starts(&self) -> &str {
        &self.starts
    }

    /// The required message suffix, empty when unset
    pub fn ends(&self) -> &str {
        &self.ends
    }

    /// Whether no criteria are configured
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty() && self.ends.is_empty()
    }

    /// Whether a message satisfies the filter
    ///
    /// An empty filter matches everything; a non-empty filter never matches
    /// the empty message.
    pub fn matches(&self, message: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        if message.is_empty() {
            return false;
        }
        if !self.starts.is_empty() && !message.starts_with(&self.starts) {
            return false;
        }
        if !self.ends.is_empty() && !message.ends_with(&self.ends) {
            return false;
        }
        true
    }

    /// Keep only the messages that satisfy the filter
    pub fn retain(&self, messages: Vec<String>) -> Vec<String> {
        messages.into_iter().filter(|m| self.matches(m)).collect()
    }
}

/// Start/end text automatically stamped onto each line of a message
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    start: String,
    end: String,
}

impl Signature {
    /// Build a signature; empty parts are omitted when signing
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Whether the signature adds nothing
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// Stamp every line of the text with the start and end parts
    pub fn sign(&self, text: &str) -> String {
        let mut lines = text.split('\n');
        let mut out = String::new();
        if let Some(first) = lines.next() {
            out.push_str(&self.start);
            out.push_str(first);
            out.push_str(&self.end);
        }
        for line in lines {
            out.push('\n');
            out.push_str(&self.start);
            out.push_str(line);
            out.push_str(&self.end);
        }
        out
    }
}
