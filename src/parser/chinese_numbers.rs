// ============================================================================
// Chinese Number Parser
// Converts Chinese numeral text into arbitrary-precision decimals
// ============================================================================

use super::tokenizer::{tokenize, Chunk, Tokens};
use crate::config::ParserConfig;
use crate::numeric::{classify, Glyph, MagnitudeTable, ParseError, ParseResult};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// Largest scale `rust_decimal::Decimal` can carry.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

/// Integer digits of `rust_decimal::Decimal::MAX` (79228162514264337593543950335).
const RUST_DECIMAL_MAX_DIGITS: i128 = 29;

/// Integer digits of `i32::MAX` and `i64::MAX`.
const I32_MAX_DIGITS: i128 = 10;
const I64_MAX_DIGITS: i128 = 19;

/// Parser for Chinese numerals such as `一千零一`, `二万三千` or `负一万亿`.
///
/// The parser holds only its configuration; every call works on local
/// state, so one instance can be shared freely across threads.
///
/// # Example
/// ```
/// use chinese_numerals::parser::ChineseNumberParser;
/// use bigdecimal::BigDecimal;
///
/// let parser = ChineseNumberParser::default();
/// assert_eq!(parser.parse("一百二十三").unwrap(), BigDecimal::from(123));
/// assert_eq!(parser.parse("-45.6").unwrap().to_string(), "-45.6");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseNumberParser {
    config: ParserConfig,
}

impl ChineseNumberParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `input` into a decimal value.
    ///
    /// Plain decimal strings are returned as-is. Anything else is split on
    /// magnitude units, each chunk decoded as a 0..9999 numeral, weighted by
    /// its unit and summed; stacked trailing units are then multiplied in and
    /// the sign applied.
    ///
    /// # Errors
    /// - `Empty` if the input is empty or whitespace
    /// - `UnexpectedCharacter` for a character no chunk can decode
    /// - `TooManySignMarkers` when the configured limit is exceeded
    pub fn parse(&self, input: &str) -> ParseResult<BigDecimal> {
        let trimmed = input.trim_start();
        let body = trimmed.trim_end();
        if body.is_empty() {
            tracing::debug!("rejected empty numeral");
            return Err(ParseError::Empty);
        }

        if self.config.plain_decimal_fast_path {
            if let Ok(value) = BigDecimal::from_str(body) {
                return Ok(value);
            }
        }

        let offset = input[..input.len() - trimmed.len()].chars().count();
        let tokens = tokenize(body, offset);

        if let Some(limit) = self.config.max_sign_markers {
            if tokens.negations > limit {
                tracing::debug!(input, found = tokens.negations, limit, "too many sign markers");
                return Err(ParseError::TooManySignMarkers {
                    found: tokens.negations,
                    limit,
                });
            }
        }

        let total = parse_unit(input, &tokens).inspect_err(|err| {
            tracing::debug!(input, error = %err, "rejected numeral");
        })?;
        let total = apply_stacked_units(&tokens, total);

        Ok(if tokens.is_negative() { -total } else { total })
    }

    /// Parse and truncate toward zero, falling back to `default` when the
    /// value does not fit in an `i32`.
    pub fn parse_as_int(&self, input: &str, default: i32) -> ParseResult<i32> {
        let value = self.parse(input)?;
        Ok(truncate_bounded(&value, I32_MAX_DIGITS)
            .and_then(|n| n.to_i32())
            .unwrap_or_else(|| {
                tracing::debug!(input, "value outside i32 range, using default");
                default
            }))
    }

    /// Parse and truncate toward zero, falling back to `default` when the
    /// value does not fit in an `i64`.
    pub fn parse_as_long(&self, input: &str, default: i64) -> ParseResult<i64> {
        let value = self.parse(input)?;
        Ok(truncate_bounded(&value, I64_MAX_DIGITS)
            .and_then(|n| n.to_i64())
            .unwrap_or_else(|| {
                tracing::debug!(input, "value outside i64 range, using default");
                default
            }))
    }

    /// Parse into a `rust_decimal::Decimal`, falling back to `default` when
    /// the value needs more than 96 bits of mantissa. Digits past the 28th
    /// decimal place are truncated.
    pub fn parse_as_decimal(
        &self,
        input: &str,
        default: rust_decimal::Decimal,
    ) -> ParseResult<rust_decimal::Decimal> {
        let value = self.parse(input)?;
        Ok(to_rust_decimal(&value).unwrap_or_else(|| {
            tracing::debug!(input, "value outside Decimal range, using default");
            default
        }))
    }
}

// ============================================================================
// Chunk Decoding
// ============================================================================

/// Decode one chunk (the text between two units) into its value.
///
/// A chunk that is already a plain decimal literal is used directly.
/// Otherwise digits set the pending multiplicand (default 1), place glyphs add
/// `pending * place`, zeros are skipped, and a digit in last position is added
/// as the ones digit.
fn parse_thousand(input: &str, chunk: &Chunk) -> ParseResult<BigDecimal> {
    if let Ok(value) = BigDecimal::from_str(&chunk.text()) {
        return Ok(value);
    }

    let last = chunk.len().saturating_sub(1);
    let mut num: u64 = 0;
    let mut per_num: u64 = 1;

    for (i, (position, c)) in chunk.glyphs().enumerate() {
        match classify(c) {
            Some(Glyph::Zero) => {}
            Some(Glyph::Digit(digit)) => {
                per_num = u64::from(digit);
                if i == last {
                    num += per_num;
                }
            }
            Some(Glyph::Place(place)) => num += per_num * u64::from(place),
            None => return Err(ParseError::unexpected(input, position)),
        }
    }

    Ok(BigDecimal::from(num))
}

/// Weighted accumulation over chunks and their units.
///
/// A blank chunk in front of a unit scales the running total by that unit
/// (`一万亿零五`). A unit with nothing before it at all therefore scales zero.
/// The unit-less remainder is added as-is.
fn parse_unit(input: &str, tokens: &Tokens) -> ParseResult<BigDecimal> {
    let table = MagnitudeTable::global();
    let mut total = BigDecimal::zero();

    for (i, chunk) in tokens.chunks.iter().enumerate() {
        let magnitude = tokens.units.get(i).and_then(|&unit| table.get(unit));
        match magnitude {
            Some(magnitude) if chunk.is_blank() => total = total * &magnitude.multiplier,
            Some(magnitude) => {
                total = total + parse_thousand(input, chunk)? * &magnitude.multiplier;
            }
            None if chunk.is_blank() => {}
            None => total = total + parse_thousand(input, chunk)?,
        }
    }

    Ok(total)
}

/// Multi-unit correction: with two or more units, every unit past the last
/// chunk is multiplied in, walking the unit list from the end.
///
/// `一万亿` has one chunk and units [万, 亿]; the chunk pass yields 10^4 and
/// this pass scales it by 亿. Runs of three or more stacked units simply
/// multiply through.
fn apply_stacked_units(tokens: &Tokens, total: BigDecimal) -> BigDecimal {
    if tokens.units.len() < 2 {
        return total;
    }
    let table = MagnitudeTable::global();
    let first_unpaired = tokens.chunks.len().min(tokens.units.len());

    tokens.units[first_unpaired..]
        .iter()
        .rev()
        .filter_map(|&unit| table.get(unit))
        .fold(total, |acc, magnitude| acc * &magnitude.multiplier)
}

/// Number of digits before the decimal point, computed from the mantissa
/// length and scale without expanding the value. Zero or negative when the
/// magnitude is below 1.
fn integer_digits(value: &BigDecimal) -> i128 {
    let (_, scale) = value.as_bigint_and_exponent();
    i128::from(value.digits()) - i128::from(scale)
}

/// Truncate toward zero, or `None` when the integer part has more than
/// `max_digits` digits. Values with huge exponents never reach `with_scale`.
fn truncate_bounded(value: &BigDecimal, max_digits: i128) -> Option<BigInt> {
    if value.is_zero() {
        return Some(BigInt::zero());
    }
    let digits = integer_digits(value);
    if digits <= 0 {
        return Some(BigInt::zero());
    }
    if digits > max_digits {
        return None;
    }
    Some(value.with_scale(0).into_bigint_and_exponent().0)
}

fn to_rust_decimal(value: &BigDecimal) -> Option<rust_decimal::Decimal> {
    if value.is_zero() {
        return Some(rust_decimal::Decimal::ZERO);
    }
    let normalized = value.normalized();
    let digits = integer_digits(&normalized);
    if digits > RUST_DECIMAL_MAX_DIGITS {
        return None;
    }
    if digits < -RUST_DECIMAL_MAX_SCALE as i128 {
        return Some(rust_decimal::Decimal::ZERO);
    }

    let (_, scale) = normalized.as_bigint_and_exponent();
    let scale = scale.clamp(0, RUST_DECIMAL_MAX_SCALE);
    let (mantissa, scale) = normalized.with_scale(scale).into_bigint_and_exponent();

    let mantissa = mantissa.to_i128()?;
    let scale = u32::try_from(scale).ok()?;
    rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

// ============================================================================
// ChineseNumber
// ============================================================================

/// A parsed numeral, usable with `str::parse`.
///
/// ```
/// use chinese_numerals::parser::ChineseNumber;
///
/// let n: ChineseNumber = "二万三千".parse().unwrap();
/// assert_eq!(n.to_string(), "23000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChineseNumber(BigDecimal);

impl ChineseNumber {
    #[inline]
    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl FromStr for ChineseNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChineseNumberParser::default().parse(s).map(Self)
    }
}

impl From<ChineseNumber> for BigDecimal {
    fn from(n: ChineseNumber) -> Self {
        n.0
    }
}

impl fmt::Display for ChineseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
