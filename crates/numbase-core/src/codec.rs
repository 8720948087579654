//! Text to integer conversion for a given radix.
//!
//! [`NumberCodec`] parses display text into a signed 64-bit value and
//! renders values back to text, optionally grouped.
//!
//! ## Value model
//!
//! Values are always `i64`. Signed radices (decimal, and custom radices
//! built with `.signed(true)`) accept a leading `+` or `-` and render a `-`
//! followed by the magnitude. Unsigned radices read and write the raw
//! 64-bit two's-complement pattern, so `-1` is `FFFFFFFFFFFFFFFF` in
//! hexadecimal and a sign glyph is rejected.
//!
//! ## Overflow
//!
//! Digits accumulate most-significant first into a `u64`. Before each
//! digit the accumulator is compared with `max_bound / base`, where
//! `max_bound` is `u64::MAX` for unsigned radices and `i64::MAX` for signed
//! ones. Signed radices additionally accept exactly `2^63` when the input
//! is negative, which is `i64::MIN`.

use crate::error::{Error, Result};
use crate::radix::RadixDefinition;
use tracing::trace;

/// Magnitude of `i64::MIN`
const SIGNED_MIN_MAGNITUDE: u64 = 1 << 63;

/// Result of parsing a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The parsed value
    pub value: i64,
    /// Whether the input carried a `-` sign (signed radices only)
    pub is_negative: bool,
}

/// Configuration for the codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Numeric group separator of the host locale, stripped from all input
    pub locale_group_separator: char,
    /// Also strip the radix's own group separator when it is not a digit
    pub strip_radix_separator: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            locale_group_separator: ',',
            strip_radix_separator: false,
        }
    }
}

impl CodecConfig {
    /// Creates a new codec config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale group separator
    pub fn locale_group_separator(mut self, separator: char) -> Self {
        self.locale_group_separator = separator;
        self
    }

    /// Sets whether the radix's own separator is stripped before parsing
    pub fn strip_radix_separator(mut self, strip: bool) -> Self {
        self.strip_radix_separator = strip;
        self
    }
}

/// Parses and formats numbers in any [`RadixDefinition`].
///
/// The codec holds no mutable state and can be shared across threads.
///
/// ```
/// use numbase_core::{NumberCodec, DECIMAL, HEXADECIMAL};
///
/// let codec = NumberCodec::new();
/// let value = codec.parse("ff", &HEXADECIMAL)?;
/// assert_eq!(value, Some(255));
/// assert_eq!(codec.format(-1_234_567, &DECIMAL, true), "-1,234,567");
/// # Ok::<(), numbase_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberCodec {
    config: CodecConfig,
}

impl NumberCodec {
    /// Creates a new codec with default configuration
    pub fn new() -> Self {
        Self {
            config: CodecConfig::default(),
        }
    }

    /// Creates a new codec with custom configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Removes whitespace and the locale group separator from `text`
    pub fn unformat(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| !c.is_whitespace() && c != self.config.locale_group_separator)
            .collect()
    }

    fn unformat_for(&self, text: &str, radix: &RadixDefinition) -> String {
        let separator = radix.group_separator();
        let strip_own =
            self.config.strip_radix_separator && radix.digit_value(separator).is_none();

        text.chars()
            .filter(|&c| {
                !c.is_whitespace()
                    && c != self.config.locale_group_separator
                    && !(strip_own && c == separator)
            })
            .collect()
    }

    /// Parses `text` in `radix`.
    ///
    /// Returns `Ok(None)` when nothing is left to parse after removing
    /// formatting, including a lone sign.
    pub fn parse(&self, text: &str, radix: &RadixDefinition) -> Result<Option<i64>> {
        Ok(self.parse_number(text, radix)?.map(|parsed| parsed.value))
    }

    /// Parses `text` in `radix`, also reporting whether a sign was present
    pub fn parse_number(&self, text: &str, radix: &RadixDefinition) -> Result<Option<ParsedNumber>> {
        let cleaned = self.unformat_for(text, radix);
        if cleaned.is_empty() {
            return Ok(None);
        }

        trace!("Parsing '{}' as {}", cleaned, radix.display_name());

        let (is_negative, digits) = split_sign(&cleaned, radix)?;
        if digits.is_empty() {
            return Ok(None);
        }

        let magnitude = accumulate(digits, radix)?;

        let value = if radix.is_signed() {
            match (is_negative, magnitude) {
                (true, SIGNED_MIN_MAGNITUDE) => i64::MIN,
                (_, m) if m > i64::MAX as u64 => {
                    trace!("Signed magnitude {} exceeds {}", m, i64::MAX);
                    return Err(Error::overflow(radix.max_bound()));
                }
                (true, m) => -(m as i64),
                (false, m) => m as i64,
            }
        } else {
            // Bit pattern reinterpretation
            magnitude as i64
        };

        Ok(Some(ParsedNumber { value, is_negative }))
    }

    /// Renders `value` in `radix`, inserting group separators when `grouped`.
    ///
    /// Binary output is always left-padded with zeros to a whole number of
    /// groups.
    pub fn format(&self, value: i64, radix: &RadixDefinition, grouped: bool) -> String {
        let negative = radix.is_signed() && value < 0;
        let mut magnitude = if radix.is_signed() {
            value.unsigned_abs()
        } else {
            value as u64
        };
        let base = u64::from(radix.base_number());
        let group_size = radix.group_size() as usize;

        // Least significant digit first
        let mut digits: Vec<char> = Vec::with_capacity(64);
        if magnitude == 0 {
            digits.push(radix.digit_symbol(0));
        }
        while magnitude > 0 {
            digits.push(radix.digit_symbol((magnitude % base) as u32));
            magnitude /= base;
        }

        if radix.pads_to_group() {
            while digits.len() % group_size != 0 {
                digits.push(radix.digit_symbol(0));
            }
        }

        let mut output: Vec<char> = Vec::with_capacity(digits.len() * 2 + 1);
        for (i, &digit) in digits.iter().enumerate() {
            if grouped && group_size > 0 && i > 0 && i % group_size == 0 {
                output.push(radix.group_separator());
            }
            output.push(digit);
        }
        if negative {
            output.push('-');
        }

        output.iter().rev().collect()
    }

    /// Parses `text` in `from` and renders the value in `to`
    pub fn convert(
        &self,
        text: &str,
        from: &RadixDefinition,
        to: &RadixDefinition,
        grouped: bool,
    ) -> Result<Option<String>> {
        Ok(self
            .parse(text, from)?
            .map(|value| self.format(value, to, grouped)))
    }
}

fn split_sign<'a>(text: &'a str, radix: &RadixDefinition) -> Result<(bool, &'a str)> {
    if radix.is_signed() {
        if let Some(rest) = text.strip_prefix('-') {
            return Ok((true, rest));
        }
        if let Some(rest) = text.strip_prefix('+') {
            return Ok((false, rest));
        }
    } else if text.starts_with('-') && radix.digit_value('-').is_none() {
        return Err(Error::negative_not_supported(radix.display_name()));
    }
    Ok((false, text))
}

fn accumulate(digits: &str, radix: &RadixDefinition) -> Result<u64> {
    let base = u64::from(radix.base_number());
    let threshold = radix.overflow_threshold();
    let mut result: u64 = 0;

    for symbol in digits.chars() {
        let digit = radix
            .digit_value(symbol)
            .ok_or_else(|| Error::invalid_character(radix.display_name(), symbol))?;

        if result > threshold {
            trace!("Accumulator {} above threshold {}", result, threshold);
            return Err(Error::overflow(radix.max_bound()));
        }

        result = result
            .checked_mul(base)
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or_else(|| Error::overflow(radix.max_bound()))?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::{RadixDefinitionBuilder, BINARY, DECIMAL, HEXADECIMAL, OCTAL};
    use pretty_assertions::assert_eq;

    fn codec() -> NumberCodec {
        NumberCodec::new()
    }

    #[test]
    fn test_unformat() {
        let codec = codec();
        assert_eq!(codec.unformat(" 1,234 \t567\n"), "1234567");
        assert_eq!(codec.unformat("   "), "");
        assert_eq!(codec.unformat("1_000"), "1_000");
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(codec().parse("", &DECIMAL), Ok(None));
        assert_eq!(codec().parse("  ", &HEXADECIMAL), Ok(None));
        assert_eq!(codec().parse("-", &DECIMAL), Ok(None));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let codec = codec();
        assert_eq!(codec.parse("ff", &HEXADECIMAL), Ok(Some(255)));
        assert_eq!(codec.parse("FF", &HEXADECIMAL), Ok(Some(255)));
        assert_eq!(codec.parse("fF", &HEXADECIMAL), Ok(Some(255)));
    }

    #[test]
    fn test_parse_grouped_input() {
        let codec = codec();
        assert_eq!(codec.parse("1010 0101", &BINARY), Ok(Some(0xA5)));
        assert_eq!(codec.parse("-1,234,567", &DECIMAL), Ok(Some(-1_234_567)));
        assert_eq!(codec.parse("+42", &DECIMAL), Ok(Some(42)));
    }

    #[test]
    fn test_sign_restriction() {
        let codec = codec();
        assert_eq!(
            codec.parse("-1A", &HEXADECIMAL),
            Err(Error::negative_not_supported("Hexadecimal"))
        );
        assert_eq!(
            codec.parse("-101", &BINARY),
            Err(Error::negative_not_supported("Binary"))
        );
        assert_eq!(
            codec.parse("+7", &OCTAL),
            Err(Error::invalid_character("Octal", '+'))
        );
    }

    #[test]
    fn test_invalid_character_reports_radix() {
        let err = codec().parse("12G4", &HEXADECIMAL).unwrap_err();
        assert_eq!(err, Error::invalid_character("Hexadecimal", 'G'));
        assert_eq!(
            codec().parse("102", &BINARY),
            Err(Error::invalid_character("Binary", '2'))
        );
        assert_eq!(
            codec().parse("78", &OCTAL),
            Err(Error::invalid_character("Octal", '8'))
        );
    }

    #[test]
    fn test_decimal_boundaries() {
        let codec = codec();
        assert_eq!(
            codec.parse("9223372036854775807", &DECIMAL),
            Ok(Some(i64::MAX))
        );
        assert_eq!(
            codec.parse("9223372036854775808", &DECIMAL),
            Err(Error::overflow(i64::MAX as u64))
        );
        assert_eq!(
            codec.parse("-9223372036854775808", &DECIMAL),
            Ok(Some(i64::MIN))
        );
        assert_eq!(
            codec.parse("-9223372036854775809", &DECIMAL),
            Err(Error::overflow(i64::MAX as u64))
        );
        assert_eq!(
            codec.parse("99999999999999999999", &DECIMAL),
            Err(Error::overflow(i64::MAX as u64))
        );
    }

    #[test]
    fn test_unsigned_boundaries() {
        let codec = codec();
        assert_eq!(codec.parse("FFFFFFFFFFFFFFFF", &HEXADECIMAL), Ok(Some(-1)));
        assert_eq!(
            codec.parse("1FFFFFFFFFFFFFFFF", &HEXADECIMAL),
            Err(Error::overflow(u64::MAX))
        );
        assert_eq!(codec.parse(&"1".repeat(64), &BINARY), Ok(Some(-1)));
        assert_eq!(
            codec.parse(&"1".repeat(65), &BINARY),
            Err(Error::overflow(u64::MAX))
        );
        assert_eq!(
            codec.parse("1777777777777777777777", &OCTAL),
            Ok(Some(-1))
        );
        assert_eq!(
            codec.parse("2000000000000000000000", &OCTAL),
            Err(Error::overflow(u64::MAX))
        );
        assert_eq!(
            codec.parse("8000000000000000", &HEXADECIMAL),
            Ok(Some(i64::MIN))
        );
    }

    #[test]
    fn test_custom_unsigned_boundary() {
        let base36 = RadixDefinitionBuilder::new(36).build().unwrap();
        let codec = codec();
        assert_eq!(codec.parse("3W5E11264SGSF", &base36), Ok(Some(-1)));
        assert_eq!(
            codec.parse("3W5E11264SGSG", &base36),
            Err(Error::overflow(u64::MAX))
        );
    }

    #[test]
    fn test_custom_signed_boundary() {
        let base3 = RadixDefinitionBuilder::new(3).signed(true).build().unwrap();
        let codec = codec();
        assert_eq!(
            codec.parse("2021110011022210012102010021220101220221", &base3),
            Ok(Some(i64::MAX))
        );
        assert_eq!(
            codec.parse("2021110011022210012102010021220101220222", &base3),
            Err(Error::overflow(i64::MAX as u64))
        );
        assert_eq!(
            codec.parse("-2021110011022210012102010021220101220222", &base3),
            Ok(Some(i64::MIN))
        );
        assert_eq!(codec.format(-5, &base3, false), "-12");
    }

    #[test]
    fn test_parse_number_sign_flag() {
        let parsed = codec().parse_number("-0", &DECIMAL).unwrap().unwrap();
        assert_eq!(
            parsed,
            ParsedNumber {
                value: 0,
                is_negative: true
            }
        );
        let parsed = codec().parse_number("FF", &HEXADECIMAL).unwrap().unwrap();
        assert!(!parsed.is_negative);
    }

    #[test]
    fn test_format_two_complement() {
        let codec = codec();
        assert_eq!(codec.format(-1, &HEXADECIMAL, false), "FFFFFFFFFFFFFFFF");
        assert_eq!(
            codec.format(i64::MIN, &HEXADECIMAL, true),
            "8000 0000 0000 0000"
        );
        assert_eq!(codec.format(-8, &OCTAL, false), "1777777777777777777770");
        assert_eq!(codec.format(i64::MIN, &DECIMAL, false), "-9223372036854775808");
    }

    #[test]
    fn test_format_zero() {
        let codec = codec();
        assert_eq!(codec.format(0, &DECIMAL, true), "0");
        assert_eq!(codec.format(0, &HEXADECIMAL, true), "0");
        assert_eq!(codec.format(0, &BINARY, false), "0000");
    }

    #[test]
    fn test_format_grouping() {
        let codec = codec();
        assert_eq!(codec.format(0x1234_5678, &HEXADECIMAL, true), "1234 5678");
        assert_eq!(codec.format(0xABCDE, &HEXADECIMAL, true), "A BCDE");
        assert_eq!(codec.format(-1_234_567, &DECIMAL, true), "-1,234,567");
        assert_eq!(codec.format(-123, &DECIMAL, true), "-123");
        assert_eq!(codec.format(0o1234567, &OCTAL, true), "1 234 567");
        assert_eq!(codec.format(0x1F, &BINARY, true), "0001 1111");
    }

    #[test]
    fn test_binary_padding() {
        let codec = codec();
        assert_eq!(codec.format(5, &BINARY, false), "0101");
        assert_eq!(codec.format(5, &BINARY, true), "0101");
        assert_eq!(codec.format(0x10, &BINARY, false), "00010000");
    }

    #[test]
    fn test_round_trip_extremes() {
        let codec = codec();
        let values = [0, 1, -1, 42, -42, 255, i64::MAX, i64::MIN, i64::MIN + 1];
        for radix in RadixDefinition::builtins() {
            for &value in &values {
                for grouped in [false, true] {
                    let text = codec.format(value, radix, grouped);
                    assert_eq!(
                        codec.parse(&text, radix),
                        Ok(Some(value)),
                        "{} in {} ({})",
                        value,
                        radix,
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn test_grouping_idempotence() {
        let codec = codec();
        for radix in RadixDefinition::builtins() {
            for value in [7, -7, 1 << 40, i64::MIN] {
                let grouped = codec.format(value, radix, true);
                assert_eq!(
                    codec.unformat(&grouped),
                    codec.format(value, radix, false)
                );
            }
        }
    }

    #[test]
    fn test_radix_separator_stripping() {
        let underscored = RadixDefinitionBuilder::new(16)
            .group_separator('_')
            .build()
            .unwrap();
        let text = codec().format(0xDEAD_BEEF, &underscored, true);
        assert_eq!(text, "DEAD_BEEF");

        assert_eq!(
            codec().parse(&text, &underscored),
            Err(Error::invalid_character("Base 16", '_'))
        );

        let stripping = NumberCodec::with_config(CodecConfig::new().strip_radix_separator(true));
        assert_eq!(stripping.parse(&text, &underscored), Ok(Some(0xDEAD_BEEF)));
    }

    #[test]
    fn test_locale_separator() {
        let codec = NumberCodec::with_config(CodecConfig::new().locale_group_separator('.'));
        assert_eq!(codec.parse("1.234.567", &DECIMAL), Ok(Some(1_234_567)));
        assert_eq!(
            codec.parse("1,234", &DECIMAL),
            Err(Error::invalid_character("Decimal", ','))
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let dna = RadixDefinitionBuilder::new(4)
            .alphabet("acgt")
            .display_name("DNA")
            .build()
            .unwrap();
        let codec = codec();
        assert_eq!(codec.parse("GATTACA", &dna), Ok(Some(0b10_00_11_11_00_01_00)));
        assert_eq!(codec.format(27, &dna, false), "CGT");
        assert_eq!(codec.format(0, &dna, false), "A");
    }

    #[test]
    fn test_convert() {
        let codec = codec();
        assert_eq!(
            codec.convert("255", &DECIMAL, &HEXADECIMAL, false),
            Ok(Some("FF".to_string()))
        );
        assert_eq!(
            codec.convert("-1", &DECIMAL, &BINARY, true).unwrap().unwrap(),
            ["1111"; 16].join(" ")
        );
        assert_eq!(codec.convert("", &DECIMAL, &OCTAL, false), Ok(None));
    }
}
