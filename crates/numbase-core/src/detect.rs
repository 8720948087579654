//! Best-effort radix detection for free-form input.
//!
//! Detection tries each built-in radix in a fixed priority order and picks
//! the first one that parses the input. The order is decimal, binary,
//! hexadecimal, octal, so `101` is reported as decimal even though it is
//! also valid binary. The result is a hint for a user interface, not a
//! grammar.

use crate::codec::NumberCodec;
use crate::radix::{RadixDefinition, BINARY, DECIMAL, HEXADECIMAL, OCTAL};
use tracing::trace;

/// Input longer than this is rejected without analysis
pub const DEFAULT_MAX_INPUT_LEN: usize = 100;

static DETECTION_ORDER: [&RadixDefinition; 4] = [&DECIMAL, &BINARY, &HEXADECIMAL, &OCTAL];

/// Classifies text into one of the built-in radices
#[derive(Debug, Clone)]
pub struct RadixDetector {
    codec: NumberCodec,
    max_input_len: usize,
}

impl Default for RadixDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixDetector {
    /// Creates a detector using a default codec
    pub fn new() -> Self {
        Self::with_codec(NumberCodec::new())
    }

    /// Creates a detector that parses with the given codec
    pub fn with_codec(codec: NumberCodec) -> Self {
        Self {
            codec,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Sets the maximum accepted input length, in characters
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    /// Returns the candidate radices in the order they are tried
    pub fn priority() -> &'static [&'static RadixDefinition; 4] {
        &DETECTION_ORDER
    }

    /// Returns the first built-in radix that parses `text`, if any
    pub fn detect(&self, text: &str) -> Option<&'static RadixDefinition> {
        if text.chars().count() > self.max_input_len {
            trace!("Input longer than {} characters, skipping detection", self.max_input_len);
            return None;
        }

        for &radix in DETECTION_ORDER.iter() {
            match self.codec.parse(text, radix) {
                Ok(Some(_)) => {
                    trace!("Detected {}", radix.display_name());
                    return Some(radix);
                }
                // Nothing to parse in any radix
                Ok(None) => return None,
                Err(e) => trace!("Not {}: {}", radix.display_name(), e),
            }
        }

        None
    }
}
