//! Custom radix dictionaries stored as TOML.
//!
//! ```toml
//! [[radix]]
//! name = "DNA"
//! base = 4
//! alphabet = "acgt"
//! group_size = 3
//!
//! [[radix]]
//! name = "Base 36"
//! base = 36
//! signed = true
//! ```
//!
//! Every entry is validated through [`RadixDefinitionBuilder`], so a file
//! can only ever produce well-formed definitions.

use crate::error::{Error, Result};
use crate::radix::{RadixDefinition, RadixDefinitionBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One custom radix as written in a dictionary file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixEntry {
    /// Display name, also used for lookup
    pub name: String,
    /// Base number
    pub base: u32,
    /// Digit alphabet; the canonical `0-9a-z` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    /// Digits per group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
    /// Group separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_separator: Option<char>,
    /// Whether values render with a sign
    #[serde(default)]
    pub signed: bool,
}

impl RadixEntry {
    /// Validates the entry and builds its definition
    pub fn to_definition(&self) -> Result<RadixDefinition> {
        let mut builder = RadixDefinitionBuilder::new(self.base)
            .display_name(self.name.clone())
            .signed(self.signed);
        if let Some(alphabet) = &self.alphabet {
            builder = builder.alphabet(alphabet.clone());
        }
        if let Some(size) = self.group_size {
            builder = builder.group_size(size);
        }
        if let Some(separator) = self.group_separator {
            builder = builder.group_separator(separator);
        }
        builder.build()
    }
}

/// A set of custom radices loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryFile {
    /// The entries, in file order
    #[serde(default, rename = "radix")]
    pub radices: Vec<RadixEntry>,
}

impl DictionaryFile {
    /// Reads and decodes a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::dictionary_file(path, e))?;
        let file: Self = toml::from_str(&content).map_err(|e| Error::dictionary_file(path, e))?;
        debug!(
            "Loaded {} radix entries from {}",
            file.radices.len(),
            path.display()
        );
        Ok(file)
    }

    /// Decodes dictionary entries from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::dictionary_file("<inline>", e))
    }

    /// Encodes the entries as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::dictionary_file("<inline>", e))
    }

    /// Finds an entry by name, ignoring ASCII case
    pub fn find(&self, name: &str) -> Option<&RadixEntry> {
        self.radices
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Builds every entry, failing on the first invalid one
    pub fn build(&self) -> Result<Vec<RadixDefinition>> {
        self.radices.iter().map(RadixEntry::to_definition).collect()
    }
}
