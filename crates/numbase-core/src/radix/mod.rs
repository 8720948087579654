//! Radix definitions.
//!
//! A [`RadixDefinition`] describes one positional numbering system: its base,
//! display name, grouping and digit alphabet. The four built-ins are statics;
//! custom radices are produced by [`RadixDefinitionBuilder`], which enforces
//! the alphabet and base invariants.

mod builder;
mod definition;

pub use builder::RadixDefinitionBuilder;
pub use definition::{
    RadixDefinition, RadixKind, BINARY, CANONICAL_ALPHABET, DECIMAL, DEFAULT_GROUP_SEPARATOR,
    DEFAULT_GROUP_SIZE, HEXADECIMAL, OCTAL,
};
