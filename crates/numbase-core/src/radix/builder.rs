//! Validated construction of custom radix definitions.

use super::definition::{
    RadixDefinition, RadixKind, CANONICAL_ALPHABET, DEFAULT_GROUP_SEPARATOR, DEFAULT_GROUP_SIZE,
};
use crate::error::{Error, Result};
use tracing::debug;

/// Builds a custom [`RadixDefinition`] from a base number and an optional alphabet.
///
/// Validation runs in [`build`](Self::build), in this order:
///
/// 1. a supplied alphabet with fewer than two distinct symbols is rejected
///    with [`Error::InvalidDictionarySize`]
/// 2. an alphabet (supplied or canonical) shorter than the base is rejected
///    with [`Error::InvalidDictionaryBaseNumberPair`]
/// 3. a base below 2 is rejected with [`Error::InvalidBaseNumber`]
///
/// Symbols are compared ignoring ASCII case. Repeated symbols keep their
/// first position and whitespace is dropped, since input text never keeps
/// whitespace to parse.
///
/// ```
/// use numbase_core::RadixDefinitionBuilder;
///
/// let base3 = RadixDefinitionBuilder::new(3)
///     .alphabet("xyz")
///     .display_name("Ternary")
///     .build()?;
/// assert_eq!(base3.base_number(), 3);
/// # Ok::<(), numbase_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RadixDefinitionBuilder {
    base_number: u32,
    alphabet: Option<String>,
    display_name: Option<String>,
    group_size: u32,
    group_separator: char,
    signed: bool,
}

impl RadixDefinitionBuilder {
    /// Creates a builder for the given base using the canonical alphabet
    pub fn new(base_number: u32) -> Self {
        Self {
            base_number,
            alphabet: None,
            display_name: None,
            group_size: DEFAULT_GROUP_SIZE,
            group_separator: DEFAULT_GROUP_SEPARATOR,
            signed: false,
        }
    }

    /// Starts from an existing definition, keeping its name, grouping and signedness.
    ///
    /// Built-in definitions keep the canonical alphabet, so raising the base
    /// does not trip over their truncated digit set.
    pub fn from_definition(definition: &RadixDefinition) -> Self {
        let alphabet = match definition.kind() {
            RadixKind::Custom => Some(definition.alphabet().iter().collect()),
            _ => None,
        };

        Self {
            base_number: definition.base_number(),
            alphabet,
            display_name: Some(definition.display_name().to_string()),
            group_size: definition.group_size(),
            group_separator: definition.group_separator(),
            signed: definition.is_signed(),
        }
    }

    /// Sets the base number
    pub fn base_number(mut self, base_number: u32) -> Self {
        self.base_number = base_number;
        self
    }

    /// Sets the digit alphabet, in digit-value order
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Reverts to the canonical `0-9a-z` alphabet
    pub fn default_alphabet(mut self) -> Self {
        self.alphabet = None;
        self
    }

    /// Sets the display name (defaults to `Base N`)
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets digits per group; 0 disables grouping
    pub fn group_size(mut self, size: u32) -> Self {
        self.group_size = size;
        self
    }

    /// Sets the group separator
    pub fn group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Sets whether values render with a sign, like decimal
    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Validates the settings and builds the definition
    pub fn build(self) -> Result<RadixDefinition> {
        let base_number = self.base_number;

        let symbols = match &self.alphabet {
            Some(alphabet) => {
                let symbols = distinct_symbols(alphabet);
                if symbols.len() < 2 {
                    debug!("Rejecting dictionary with {} symbol(s)", symbols.len());
                    return Err(Error::InvalidDictionarySize {
                        size: symbols.len(),
                    });
                }
                check_pair(symbols.len(), base_number)?;
                symbols
            }
            None => {
                check_pair(CANONICAL_ALPHABET.len(), base_number)?;
                CANONICAL_ALPHABET[..base_number as usize].to_vec()
            }
        };

        if base_number < 2 {
            debug!("Rejecting base number {}", base_number);
            return Err(Error::InvalidBaseNumber { base_number });
        }

        let display_name = self
            .display_name
            .unwrap_or_else(|| format!("Base {}", base_number));

        Ok(RadixDefinition::custom(
            base_number,
            display_name,
            self.group_size,
            self.group_separator,
            symbols,
            self.signed,
        ))
    }
}

fn check_pair(size: usize, base_number: u32) -> Result<()> {
    if (size as u64) < u64::from(base_number) {
        debug!(
            "Rejecting dictionary of {} symbols for base {}",
            size, base_number
        );
        return Err(Error::InvalidDictionaryBaseNumberPair { size, base_number });
    }
    Ok(())
}

fn distinct_symbols(alphabet: &str) -> Vec<char> {
    let mut symbols: Vec<char> = Vec::with_capacity(alphabet.len());
    for symbol in alphabet.chars().filter(|c| !c.is_whitespace()) {
        if !symbols.iter().any(|seen| seen.eq_ignore_ascii_case(&symbol)) {
            symbols.push(symbol);
        }
    }
    symbols
}
