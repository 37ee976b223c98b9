// ============================================================================
// Chinese Numerals Library
// Parse Chinese numeral text into arbitrary-precision decimals, and back
// ============================================================================

//! # Chinese Numerals
//!
//! Converts Chinese numerals such as `一千零一`, `二万三千` or `负一万亿` into
//! [`BigDecimal`] values, and formats integers back into Chinese numerals.
//!
//! ## Features
//!
//! - **Standard, financial and ASCII digits** (`一`, `壹`, `1`; `两` for 2)
//! - **Magnitude units from 万 to 大数** (10^4 through 10^72), including
//!   stacked units such as `一万亿`
//! - **Plain decimal fast path**: `"123"` and `"-45.6"` bypass numeral parsing
//! - **Positional errors**: the offending character is bracketed as `>X<`
//! - **Stateless parsing**, safe to call from many threads at once
//!
//! ## Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use num_bigint::BigInt;
//!
//! assert_eq!(chinese_numerals::parse("一万零一").unwrap(), BigDecimal::from(10001));
//! assert_eq!(chinese_numerals::parse_as_int("负十五", 0).unwrap(), -15);
//! assert_eq!(chinese_numerals::to_chinese(&BigInt::from(23000)).unwrap(), "二万三千");
//!
//! let err = chinese_numerals::parse("一X三").unwrap_err();
//! assert!(err.to_string().contains("一>X<三"));
//! ```

pub mod config;
pub mod formatter;
pub mod numeric;
pub mod parser;
pub mod utils;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::formatter::ChineseFormatter;
use crate::numeric::{FormatResult, ParseResult};
use crate::parser::ChineseNumberParser;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{FormatConfig, NumeralStyle, ParserConfig};
    pub use crate::formatter::ChineseFormatter;
    pub use crate::numeric::{FormatError, MagnitudeTable, ParseError};
    pub use crate::parser::{ChineseNumber, ChineseNumberParser};
}

/// Parse a Chinese numeral (or plain decimal) with the default configuration.
pub fn parse(input: &str) -> ParseResult<BigDecimal> {
    ChineseNumberParser::default().parse(input)
}

/// Parse into an `i32`, returning `default` when the value is out of range.
pub fn parse_as_int(input: &str, default: i32) -> ParseResult<i32> {
    ChineseNumberParser::default().parse_as_int(input, default)
}

/// Parse into an `i64`, returning `default` when the value is out of range.
pub fn parse_as_long(input: &str, default: i64) -> ParseResult<i64> {
    ChineseNumberParser::default().parse_as_long(input, default)
}

/// Parse into a `rust_decimal::Decimal`, returning `default` when the value
/// is out of range.
pub fn parse_as_decimal(
    input: &str,
    default: rust_decimal::Decimal,
) -> ParseResult<rust_decimal::Decimal> {
    ChineseNumberParser::default().parse_as_decimal(input, default)
}

/// Format an integer as standard Chinese numerals.
pub fn to_chinese(value: &BigInt) -> FormatResult<String> {
    ChineseFormatter::default().format(value)
}

/// Format an `i64` as standard Chinese numerals.
pub fn format_i64(value: i64) -> FormatResult<String> {
    ChineseFormatter::default().format_i64(value)
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_documented_values() {
        let cases = [
            ("十", "10"),
            ("十五", "15"),
            ("一百二十三", "123"),
            ("一千零一", "1001"),
            ("一万", "10000"),
            ("一万零一", "10001"),
            ("二万三千", "23000"),
            ("一亿", "100000000"),
            ("负十", "-10"),
            ("负负十", "10"),
            ("一万亿", "1000000000000"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), dec(expected), "parsing {}", input);
        }
    }

    #[test]
    fn test_errors_are_invalid_argument() {
        let empty = parse("").unwrap_err();
        assert_eq!(empty, ParseError::Empty);

        let bad = parse("一X三").unwrap_err();
        assert!(bad.is_invalid_argument());
        assert!(bad.to_string().contains(">X<"));
    }

    #[test]
    fn test_format_then_parse() {
        for n in [0i64, 9, 10, 19, 101, 1010, 90_009, 100_000_001, -7_003_000_400] {
            let text = format_i64(n).unwrap();
            assert_eq!(parse(&text).unwrap(), BigDecimal::from(n), "{} -> {}", n, text);
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(parse_as_int("二万三千", 0), Ok(23_000));
        assert_eq!(parse_as_int("一百亿", 0), Ok(0));
        assert_eq!(parse_as_long("一百亿", 0), Ok(10_000_000_000));
        assert_eq!(
            parse_as_decimal("三点", rust_decimal::Decimal::ZERO).map_err(|e| e.is_invalid_argument()),
            Err(true)
        );
    }

    #[test]
    fn test_configured_round_trip() {
        let parser = ChineseNumberParser::new(ParserConfig::strict());
        let formatter = ChineseFormatter::new(FormatConfig::financial());
        let value = BigInt::from(-300_020_001i64);
        let text = formatter.format(&value).unwrap();
        assert_eq!(text, "负叁亿零贰万零壹");
        assert_eq!(parser.parse(&text).unwrap(), BigDecimal::new(value, 0));
    }
}
