//! Radix definitions and the built-in radices.

use std::borrow::Cow;
use std::fmt;

/// Canonical digit alphabet shared by the built-in radices and by custom
/// radices that do not supply their own symbols.
pub const CANONICAL_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default number of digits per group for custom radices
pub const DEFAULT_GROUP_SIZE: u32 = 4;

/// Default group separator for custom radices
pub const DEFAULT_GROUP_SEPARATOR: char = ' ';

const BINARY_DIGITS: [char; 2] = ['0', '1'];
const OCTAL_DIGITS: [char; 8] = ['0', '1', '2', '3', '4', '5', '6', '7'];
const DECIMAL_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const HEXADECIMAL_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Discriminant identifying which radix a definition describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadixKind {
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 10, the only signed built-in
    Decimal,
    /// Base 16
    Hexadecimal,
    /// A user-defined base and/or alphabet
    Custom,
}

/// Describes one positional numbering system.
///
/// Values are immutable once built. The four built-ins are exposed as
/// statics ([`BINARY`], [`OCTAL`], [`DECIMAL`], [`HEXADECIMAL`]); custom
/// definitions come from [`RadixDefinitionBuilder`](super::RadixDefinitionBuilder).
///
/// Unsigned radices render the raw two's-complement bit pattern of a value.
/// Signed radices render a `-` followed by the magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixDefinition {
    kind: RadixKind,
    base_number: u32,
    display_name: Cow<'static, str>,
    group_size: u32,
    group_separator: char,
    alphabet: Cow<'static, [char]>,
    signed: bool,
}

/// Base 2, grouped in nibbles
pub static BINARY: RadixDefinition = RadixDefinition {
    kind: RadixKind::Binary,
    base_number: 2,
    display_name: Cow::Borrowed("Binary"),
    group_size: 4,
    group_separator: ' ',
    alphabet: Cow::Borrowed(&BINARY_DIGITS),
    signed: false,
};

/// Base 8, grouped in threes
pub static OCTAL: RadixDefinition = RadixDefinition {
    kind: RadixKind::Octal,
    base_number: 8,
    display_name: Cow::Borrowed("Octal"),
    group_size: 3,
    group_separator: ' ',
    alphabet: Cow::Borrowed(&OCTAL_DIGITS),
    signed: false,
};

/// Base 10, signed, grouped in thousands
pub static DECIMAL: RadixDefinition = RadixDefinition {
    kind: RadixKind::Decimal,
    base_number: 10,
    display_name: Cow::Borrowed("Decimal"),
    group_size: 3,
    group_separator: ',',
    alphabet: Cow::Borrowed(&DECIMAL_DIGITS),
    signed: true,
};

/// Base 16, grouped in fours
pub static HEXADECIMAL: RadixDefinition = RadixDefinition {
    kind: RadixKind::Hexadecimal,
    base_number: 16,
    display_name: Cow::Borrowed("Hexadecimal"),
    group_size: 4,
    group_separator: ' ',
    alphabet: Cow::Borrowed(&HEXADECIMAL_DIGITS),
    signed: false,
};

static BUILTINS: [&RadixDefinition; 4] = [&BINARY, &OCTAL, &DECIMAL, &HEXADECIMAL];

impl RadixDefinition {
    pub(crate) fn custom(
        base_number: u32,
        display_name: String,
        group_size: u32,
        group_separator: char,
        alphabet: Vec<char>,
        signed: bool,
    ) -> Self {
        Self {
            kind: RadixKind::Custom,
            base_number,
            display_name: Cow::Owned(display_name),
            group_size,
            group_separator,
            alphabet: Cow::Owned(alphabet),
            signed,
        }
    }

    /// Returns the four built-in radices, binary first
    pub fn builtins() -> &'static [&'static RadixDefinition; 4] {
        &BUILTINS
    }

    /// Resolves a built-in radix by display name or short alias.
    ///
    /// Matching ignores ASCII case. Accepted aliases are `bin`/`b`/`2`,
    /// `oct`/`o`/`8`, `dec`/`d`/`10` and `hex`/`h`/`x`/`16`.
    pub fn by_name(name: &str) -> Option<&'static RadixDefinition> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "binary" | "bin" | "b" | "2" => Some(&BINARY),
            "octal" | "oct" | "o" | "8" => Some(&OCTAL),
            "decimal" | "dec" | "d" | "10" => Some(&DECIMAL),
            "hexadecimal" | "hex" | "h" | "x" | "16" => Some(&HEXADECIMAL),
            _ => None,
        }
    }

    /// Which radix this is
    pub fn kind(&self) -> RadixKind {
        self.kind
    }

    /// Number of distinct digit values
    pub fn base_number(&self) -> u32 {
        self.base_number
    }

    /// Human-readable label
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Digits per group in grouped rendering (0 disables grouping)
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Character inserted between groups
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Digit symbols, indexed by digit value.
    ///
    /// May be longer than [`base_number`](Self::base_number); trailing
    /// symbols are never used.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Whether values render with a sign instead of as a bit pattern
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Whether formatted output is padded to complete groups.
    pub fn pads_to_group(&self) -> bool {
        self.kind == RadixKind::Binary && self.group_size > 0
    }

    /// Looks up the digit value of a symbol, ignoring ASCII case
    pub fn digit_value(&self, symbol: char) -> Option<u32> {
        self.digits()
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(&symbol))
            .map(|value| value as u32)
    }

    /// Returns the output symbol for a digit value, upper-cased.
    ///
    /// # Panics
    ///
    /// Panics if `value >= base_number`.
    pub fn digit_symbol(&self, value: u32) -> char {
        self.digits()[value as usize].to_ascii_uppercase()
    }

    /// Largest magnitude a parsed value may reach in this radix
    pub fn max_bound(&self) -> u64 {
        if self.signed {
            i64::MAX as u64
        } else {
            u64::MAX
        }
    }

    /// Accumulator value above which one more digit always overflows
    pub fn overflow_threshold(&self) -> u64 {
        self.max_bound() / u64::from(self.base_number)
    }

    fn digits(&self) -> &[char] {
        let len = (self.base_number as usize).min(self.alphabet.len());
        &self.alphabet[..len]
    }
}

impl fmt::Display for RadixDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
