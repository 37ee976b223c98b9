// ============================================================================
// Chinese Numeral Formatter
// Writes integers as Chinese numerals the parser reads back exactly
// ============================================================================

use crate::config::{FormatConfig, NumeralStyle};
use crate::numeric::{
    glyphs, FormatError, FormatResult, GlyphSet, MagnitudeTable, MAGNITUDE_COUNT, NEGATIVE,
};
use arrayvec::ArrayVec;
use num_bigint::{BigInt, Sign};

/// Myriad groups a value may span: the ones group plus one per unit.
const MAX_GROUPS: usize = MAGNITUDE_COUNT + 1;

/// Formats integers as Chinese numerals.
///
/// Output always parses back to the same value: each run of skipped places
/// becomes a single 零, and 十 always carries an explicit digit except for a
/// leading 10..19 when `compact_teens` is set.
///
/// # Example
/// ```
/// use chinese_numerals::formatter::ChineseFormatter;
/// use num_bigint::BigInt;
///
/// let formatter = ChineseFormatter::default();
/// assert_eq!(formatter.format(&BigInt::from(10001)).unwrap(), "一万零一");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseFormatter {
    config: FormatConfig,
}

impl ChineseFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn glyph_set(&self) -> &'static GlyphSet {
        match self.config.style {
            NumeralStyle::Standard => &glyphs::STANDARD,
            NumeralStyle::Financial => &glyphs::FINANCIAL,
        }
    }

    /// Format `value`.
    ///
    /// # Errors
    /// Returns `OutOfRange` when the value has more myriad groups than the
    /// magnitude table can name (10^76 and above in magnitude).
    pub fn format(&self, value: &BigInt) -> FormatResult<String> {
        let glyphs = self.glyph_set();
        let digits = value.magnitude().to_string();
        let groups = split_groups(&digits)?;

        let mut out = String::with_capacity(digits.len() * 6);
        if value.sign() == Sign::Minus {
            out.push(NEGATIVE);
        }
        if groups.iter().all(|&g| g == 0) {
            out.push(glyphs.zero);
            return Ok(out);
        }

        let table = MagnitudeTable::global();
        let mut started = false;
        let mut skipped = false;

        for (index, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                skipped |= started;
                continue;
            }
            if started && (skipped || group < 1000) {
                out.push(glyphs.zero);
            }
            self.write_group(&mut out, group, !started);
            if let Some(magnitude) = index.checked_sub(1).and_then(|i| table.get(i)) {
                out.push_str(magnitude.glyph());
            }
            started = true;
            skipped = false;
        }

        Ok(out)
    }

    /// Format a machine integer. Every `i64` is in range.
    pub fn format_i64(&self, value: i64) -> FormatResult<String> {
        self.format(&BigInt::from(value))
    }

    /// Write one non-zero group (1..=9999).
    fn write_group(&self, out: &mut String, group: u16, leading: bool) {
        let glyphs = self.glyph_set();
        let places = [
            (group / 1000, Some(2)),
            (group / 100 % 10, Some(1)),
            (group / 10 % 10, Some(0)),
            (group % 10, None),
        ];
        let mut wrote = false;
        let mut gap = false;

        for (digit, place) in places {
            if digit == 0 {
                gap |= wrote;
                continue;
            }
            if gap {
                out.push(glyphs.zero);
                gap = false;
            }
            let compact_ten =
                self.config.compact_teens && leading && !wrote && digit == 1 && place == Some(0);
            if !compact_ten {
                out.push(glyphs.digits[usize::from(digit)]);
            }
            if let Some(place) = place {
                out.push(glyphs.places[place]);
            }
            wrote = true;
        }
    }
}

/// Split a decimal digit string into base-10000 groups, least significant
/// first.
fn split_groups(digits: &str) -> FormatResult<ArrayVec<u16, MAX_GROUPS>> {
    let mut groups = ArrayVec::new();
    for chunk in digits.as_bytes().rchunks(4) {
        let group = chunk
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        groups.try_push(group).map_err(|_| FormatError::OutOfRange {
            digits: digits.len(),
        })?;
    }
    Ok(groups)
}
