// ============================================================================
// Magnitude Table
// Build-once table of myriad units, 万 (10^4) through 大数 (10^72)
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Unit glyphs in ascending order. Each entry is 10^4 times the previous.
/// The first spelling of each entry is the one used when formatting.
const UNIT_GLYPHS: [&[&str]; 18] = [
    &["万", "萬"],
    &["亿"],
    &["兆"],
    &["京"],
    &["垓"],
    &["秭"],
    &["穰"],
    &["沟"],
    &["涧"],
    &["正"],
    &["载"],
    &["极"],
    &["恒河沙"],
    &["阿僧祗"],
    &["那由他"],
    &["不可思议"],
    &["无量"],
    &["大数"],
];

/// Number of named magnitude units.
pub const MAGNITUDE_COUNT: usize = UNIT_GLYPHS.len();

/// Factor between consecutive units.
const MYRIAD: u32 = 10_000;

static TABLE: Lazy<MagnitudeTable> = Lazy::new(MagnitudeTable::build);

/// One magnitude unit.
#[derive(Debug, Clone)]
pub struct Magnitude {
    /// Accepted spellings; the first is canonical
    pub glyphs: &'static [&'static str],
    /// Power of ten this unit stands for
    pub exponent: u32,
    /// 10^exponent
    pub multiplier: BigDecimal,
}

impl Magnitude {
    /// Canonical spelling used when formatting.
    #[inline]
    pub fn glyph(&self) -> &'static str {
        self.glyphs[0]
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (10^{})", self.glyph(), self.exponent)
    }
}

/// Ordered, immutable table of magnitude units.
///
/// Multipliers are strictly increasing; position `i` holds 10^(4 * (i + 1)).
#[derive(Debug)]
pub struct MagnitudeTable {
    entries: Vec<Magnitude>,
    by_glyph: HashMap<&'static str, usize>,
}

impl MagnitudeTable {
    fn build() -> Self {
        let mut entries = Vec::with_capacity(MAGNITUDE_COUNT);
        let mut by_glyph = HashMap::new();
        let mut multiplier = BigInt::from(MYRIAD);

        for (index, glyphs) in UNIT_GLYPHS.into_iter().enumerate() {
            for glyph in glyphs.iter() {
                by_glyph.insert(*glyph, index);
            }
            entries.push(Magnitude {
                glyphs,
                exponent: 4 * (index as u32 + 1),
                multiplier: BigDecimal::new(multiplier.clone(), 0),
            });
            multiplier *= MYRIAD;
        }

        Self { entries, by_glyph }
    }

    /// The process-wide table, computed on first use.
    #[inline]
    pub fn global() -> &'static MagnitudeTable {
        &TABLE
    }

    /// Look up a unit by any of its spellings, returning its index.
    #[inline]
    pub fn index_of(&self, glyph: &str) -> Option<usize> {
        self.by_glyph.get(glyph).copied()
    }

    /// Unit at `index` (0 is 万).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Magnitude> {
        self.entries.get(index)
    }

    /// Number of units in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Units in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Magnitude> {
        self.entries.iter()
    }

    /// Every accepted spelling, in table order.
    pub fn glyphs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().flat_map(|m| m.glyphs.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow10(n: u32) -> BigDecimal {
        BigDecimal::new(BigInt::from(10u8).pow(n), 0)
    }

    #[test]
    fn test_table_bounds() {
        let table = MagnitudeTable::global();
        assert_eq!(table.len(), MAGNITUDE_COUNT);
        assert_eq!(table.get(0).unwrap().multiplier, pow10(4));
        assert_eq!(table.get(1).unwrap().multiplier, pow10(8));
        assert_eq!(table.get(MAGNITUDE_COUNT - 1).unwrap().multiplier, pow10(72));
        assert!(table.get(MAGNITUDE_COUNT).is_none());
    }

    #[test]
    fn test_multipliers_strictly_increasing() {
        let table = MagnitudeTable::global();
        let multipliers: Vec<_> = table.iter().map(|m| m.multiplier.clone()).collect();
        for pair in multipliers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(&pair[0] * &pow10(4), pair[1]);
        }
    }

    #[test]
    fn test_index_of_alternate_spelling() {
        let table = MagnitudeTable::global();
        assert_eq!(table.index_of("万"), Some(0));
        assert_eq!(table.index_of("萬"), Some(0));
        assert_eq!(table.index_of("亿"), Some(1));
        assert_eq!(table.index_of("恒河沙"), Some(12));
        assert_eq!(table.index_of("大数"), Some(17));
        assert_eq!(table.index_of("十"), None);
    }

    #[test]
    fn test_display() {
        let table = MagnitudeTable::global();
        assert_eq!(table.get(2).unwrap().to_string(), "兆 (10^12)");
        assert_eq!(table.glyphs().count(), MAGNITUDE_COUNT + 1);
    }
}
