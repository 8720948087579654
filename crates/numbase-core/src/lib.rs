//! # numbase-core
//!
//! Arbitrary-radix number conversion over signed 64-bit values.
//!
//! This crate provides the core functionality for:
//! - Describing numbering systems, built-in or with a user-supplied alphabet
//! - Parsing display text in any radix into an `i64`, with exact overflow rules
//! - Rendering an `i64` in any radix, optionally with digit grouping
//! - Guessing which built-in radix a string is written in
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`radix`]: Radix definitions and the validating builder
//! - [`codec`]: Parsing and formatting
//! - [`detect`]: Radix auto-detection
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use numbase_core::{NumberCodec, RadixDetector, DECIMAL, HEXADECIMAL};
//!
//! let codec = NumberCodec::new();
//!
//! // Two's-complement rendering for non-decimal radices
//! let value = codec.parse("-1", &DECIMAL)?.unwrap();
//! assert_eq!(codec.format(value, &HEXADECIMAL, true), "FFFF FFFF FFFF FFFF");
//!
//! // Decimal wins ties during detection
//! let detected = RadixDetector::new().detect("101").unwrap();
//! assert_eq!(detected.display_name(), "Decimal");
//! # Ok::<(), numbase_core::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: load custom radices from TOML dictionary files, see `config`
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod codec;
#[cfg(feature = "serde")]
pub mod config;
pub mod detect;
pub mod error;
pub mod radix;

// Re-export primary types for convenience
pub use codec::{CodecConfig, NumberCodec, ParsedNumber};
#[cfg(feature = "serde")]
pub use config::{DictionaryFile, RadixEntry};
pub use detect::RadixDetector;
pub use error::{Error, Result};
pub use radix::{
    RadixDefinition, RadixDefinitionBuilder, RadixKind, BINARY, DECIMAL, HEXADECIMAL, OCTAL,
};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses `text` in `radix` with the default codec.
///
/// Returns `Ok(None)` for input that is empty once formatting is removed.
pub fn parse(text: &str, radix: &RadixDefinition) -> Result<Option<i64>> {
    NumberCodec::new().parse(text, radix)
}

/// Renders `value` in `radix` with the default codec
pub fn format(value: i64, radix: &RadixDefinition, grouped: bool) -> String {
    NumberCodec::new().format(value, radix, grouped)
}

/// Builds a validated custom radix
pub fn build_radix(
    base: u32,
    alphabet: Option<&str>,
    name: &str,
    group_size: u32,
    separator: char,
) -> Result<RadixDefinition> {
    let mut builder = RadixDefinitionBuilder::new(base)
        .display_name(name)
        .group_size(group_size)
        .group_separator(separator);
    if let Some(alphabet) = alphabet {
        builder = builder.alphabet(alphabet);
    }
    builder.build()
}

/// Detects the built-in radix of `text` with the default detector
pub fn detect_radix(text: &str) -> Option<&'static RadixDefinition> {
    RadixDetector::new().detect(text)
}
