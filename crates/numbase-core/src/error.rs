//! Error types for the numbase-core library.
//!
//! Every failure in this crate is recoverable and returned to the caller.
//! Variants carry the radix display name or the violated bound so they can
//! be rendered as user-facing messages directly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for numbase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for parsing, formatting and radix construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A character has no digit value in the radix alphabet
    #[error("invalid character '{character}' for {radix_name}")]
    InvalidCharacter {
        /// Display name of the radix being parsed
        radix_name: String,
        /// The offending character
        character: char,
    },

    /// A sign was supplied for a radix rendered as a raw bit pattern
    #[error("negative values are not supported in {radix_name}")]
    NegativeNotSupported {
        /// Display name of the radix being parsed
        radix_name: String,
    },

    /// The accumulated value does not fit the radix range
    #[error("value is too large: maximum is {max_bound}")]
    Overflow {
        /// Largest magnitude representable for the radix
        max_bound: u64,
    },

    /// The base number is below 2
    #[error("invalid base number {base_number}: must be at least 2")]
    InvalidBaseNumber {
        /// The rejected base
        base_number: u32,
    },

    /// The alphabet has fewer than two distinct symbols
    #[error("invalid dictionary: {size} distinct symbol(s), at least 2 are required")]
    InvalidDictionarySize {
        /// Number of distinct symbols found
        size: usize,
    },

    /// The alphabet is shorter than the base number
    #[error("dictionary of {size} symbols cannot represent base {base_number}")]
    InvalidDictionaryBaseNumberPair {
        /// Number of distinct symbols in the alphabet
        size: usize,
        /// The requested base
        base_number: u32,
    },

    /// No radix with this name is known
    #[error("unknown radix '{name}'")]
    UnknownRadix {
        /// The requested name
        name: String,
    },

    /// Failed to read or decode a dictionary file
    #[error("failed to load dictionary file '{path}': {details}")]
    DictionaryFile {
        /// Path to the dictionary file
        path: PathBuf,
        /// Description of the I/O or decode failure
        details: String,
    },
}

impl Error {
    /// Creates a new invalid character error
    pub fn invalid_character(radix_name: impl Into<String>, character: char) -> Self {
        Self::InvalidCharacter {
            radix_name: radix_name.into(),
            character,
        }
    }

    /// Creates a new negative-not-supported error
    pub fn negative_not_supported(radix_name: impl Into<String>) -> Self {
        Self::NegativeNotSupported {
            radix_name: radix_name.into(),
        }
    }

    /// Creates a new overflow error
    pub fn overflow(max_bound: u64) -> Self {
        Self::Overflow { max_bound }
    }

    /// Creates a new unknown radix error
    pub fn unknown_radix(name: impl Into<String>) -> Self {
        Self::UnknownRadix { name: name.into() }
    }

    /// Creates a new dictionary file error
    pub fn dictionary_file(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::DictionaryFile {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Returns true if this error was produced while parsing input text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter { .. } | Self::NegativeNotSupported { .. } | Self::Overflow { .. }
        )
    }

    /// Returns true if this error was produced while building a radix definition
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBaseNumber { .. }
                | Self::InvalidDictionarySize { .. }
                | Self::InvalidDictionaryBaseNumberPair { .. }
        )
    }
}
