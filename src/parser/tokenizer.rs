// ============================================================================
// Numeral Tokenizer
// Splits input into sign markers, magnitude units and digit chunks
// ============================================================================

use crate::numeric::{MagnitudeTable, NEGATIVE};
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Fixed-order alternation: the negation marker, then every unit spelling in
/// ascending order. Multi-character units match as a whole.
static UNIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = std::iter::once(NEGATIVE.to_string())
        .chain(MagnitudeTable::global().glyphs().map(regex::escape))
        .collect();
    // Every alternative is an escaped literal, so compilation cannot fail.
    Regex::new(&alternatives.join("|")).expect("unit pattern is built from literal glyphs")
});

/// Run of characters between two magnitude units.
///
/// Each character keeps its 1-based position in the full input so errors can
/// point at it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    glyphs: SmallVec<[(usize, char); 8]>,
}

impl Chunk {
    #[inline]
    fn push(&mut self, position: usize, c: char) {
        self.glyphs.push((position, c));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.glyphs.iter().all(|(_, c)| c.is_whitespace())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `(position, character)` pairs in input order.
    pub fn glyphs(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.glyphs.iter().copied()
    }

    /// Chunk text with sign markers removed.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|(_, c)| *c).collect()
    }
}

/// Tokenized form of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Count of 负 markers seen anywhere in the input
    pub negations: usize,
    /// Magnitude table indices in order of appearance
    pub units: SmallVec<[usize; 4]>,
    /// Digit chunks; `chunks[i]` precedes `units[i]`, a trailing extra chunk
    /// is the unit-less remainder. Trailing empty chunks are dropped, but at
    /// least one chunk is always kept.
    pub chunks: Vec<Chunk>,
}

impl Tokens {
    /// Odd number of negation markers.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negations % 2 == 1
    }
}

/// Tokenize `input`, whose first character sits at 1-based position
/// `offset + 1` of the caller's original string.
///
/// Negation markers are counted and dropped without closing the current
/// chunk; every unit closes it.
pub fn tokenize(input: &str, offset: usize) -> Tokens {
    let table = MagnitudeTable::global();
    let mut tokens = Tokens::default();
    let mut current = Chunk::default();
    let mut position = offset;
    let mut cursor = 0;

    for found in UNIT_PATTERN.find_iter(input) {
        for c in input[cursor..found.start()].chars() {
            position += 1;
            current.push(position, c);
        }
        position += found.as_str().chars().count();
        cursor = found.end();

        if found.as_str().starts_with(NEGATIVE) {
            tokens.negations += 1;
        } else if let Some(index) = table.index_of(found.as_str()) {
            tokens.units.push(index);
            tokens.chunks.push(std::mem::take(&mut current));
        }
    }
    for c in input[cursor..].chars() {
        position += 1;
        current.push(position, c);
    }
    tokens.chunks.push(current);

    while tokens.chunks.len() > 1 && tokens.chunks.last().is_some_and(Chunk::is_empty) {
        tokens.chunks.pop();
    }

    tracing::trace!(
        input,
        negations = tokens.negations,
        units = ?tokens.units,
        chunks = tokens.chunks.len(),
        "tokenized numeral"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &Tokens) -> Vec<String> {
        tokens.chunks.iter().map(Chunk::text).collect()
    }

    #[test]
    fn test_single_unit() {
        let tokens = tokenize("二万三千", 0);
        assert_eq!(tokens.units.as_slice(), &[0]);
        assert_eq!(texts(&tokens), vec!["二", "三千"]);
        assert!(!tokens.is_negative());
    }

    #[test]
    fn test_no_units() {
        let tokens = tokenize("一百二十三", 0);
        assert!(tokens.units.is_empty());
        assert_eq!(texts(&tokens), vec!["一百二十三"]);
    }

    #[test]
    fn test_trailing_empty_chunks_dropped() {
        let tokens = tokenize("一万亿", 0);
        assert_eq!(tokens.units.as_slice(), &[0, 1]);
        assert_eq!(texts(&tokens), vec!["一"]);
    }

    #[test]
    fn test_inner_empty_chunk_kept() {
        let tokens = tokenize("一万亿零五", 0);
        assert_eq!(tokens.units.as_slice(), &[0, 1]);
        assert_eq!(texts(&tokens), vec!["一", "", "零五"]);
    }

    #[test]
    fn test_multi_character_units() {
        let tokens = tokenize("三恒河沙二不可思议", 0);
        assert_eq!(tokens.units.as_slice(), &[12, 15]);
        assert_eq!(texts(&tokens), vec!["三", "二"]);
    }

    #[test]
    fn test_negation_counted_not_split() {
        let tokens = tokenize("负负十", 0);
        assert_eq!(tokens.negations, 2);
        assert!(!tokens.is_negative());
        assert!(tokens.units.is_empty());
        assert_eq!(texts(&tokens), vec!["十"]);

        assert!(tokenize("负十", 0).is_negative());
    }

    #[test]
    fn test_positions_skip_units_and_signs() {
        let tokens = tokenize("负一万X", 0);
        let positions: Vec<_> = tokens.chunks.iter().flat_map(|c| c.glyphs()).collect();
        assert_eq!(positions, vec![(2, '一'), (4, 'X')]);
    }

    #[test]
    fn test_positions_respect_offset() {
        let tokens = tokenize("十五", 3);
        let positions: Vec<_> = tokens.chunks[0].glyphs().collect();
        assert_eq!(positions, vec![(4, '十'), (5, '五')]);
    }

    #[test]
    fn test_unit_pattern_matches_every_glyph() {
        let table = MagnitudeTable::global();
        for glyph in table.glyphs() {
            let found = UNIT_PATTERN.find(glyph).map(|m| m.as_str());
            assert_eq!(found, Some(glyph));
        }
        assert!(UNIT_PATTERN.is_match("负"));
        assert!(!UNIT_PATTERN.is_match("一二三十百千零"));
    }

    #[test]
    fn test_units_only_keep_one_chunk() {
        let tokens = tokenize("万亿", 0);
        assert_eq!(tokens.units.as_slice(), &[0, 1]);
        assert_eq!(tokens.chunks.len(), 1);
        assert!(tokens.chunks[0].is_empty());
    }

    #[test]
    fn test_blank_chunk() {
        let tokens = tokenize("一万 亿", 0);
        assert_eq!(tokens.chunks.len(), 2);
        assert!(tokens.chunks[1].is_blank());
        assert!(!tokens.chunks[1].is_empty());
    }
}
