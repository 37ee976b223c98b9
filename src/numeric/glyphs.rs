// ============================================================================
// Numeral Glyphs
// Zero, digit, place-value and sign glyphs in both directions
// ============================================================================

/// Negation marker. Each occurrence toggles the sign.
pub const NEGATIVE: char = '负';

/// A single glyph inside a digit chunk, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// 〇 零 0
    Zero,
    /// 1-9 in standard, financial or ASCII spelling
    Digit(u32),
    /// 十 百 千 and their financial forms, carrying 10 / 100 / 1000
    Place(u32),
}

/// Classify a character found inside a digit chunk.
///
/// Returns `None` for anything that is not a recognized numeral glyph.
pub fn classify(c: char) -> Option<Glyph> {
    let glyph = match c {
        '〇' | '零' | '0' => Glyph::Zero,
        '一' | '壹' | '1' => Glyph::Digit(1),
        '二' | '贰' | '貳' | '两' | '兩' | '2' => Glyph::Digit(2),
        '三' | '叁' | '叄' | '3' => Glyph::Digit(3),
        '四' | '肆' | '4' => Glyph::Digit(4),
        '五' | '伍' | '5' => Glyph::Digit(5),
        '六' | '陆' | '陸' | '6' => Glyph::Digit(6),
        '七' | '柒' | '7' => Glyph::Digit(7),
        '八' | '捌' | '8' => Glyph::Digit(8),
        '九' | '玖' | '9' => Glyph::Digit(9),
        '十' | '拾' => Glyph::Place(10),
        '百' | '佰' => Glyph::Place(100),
        '千' | '仟' => Glyph::Place(1000),
        _ => return None,
    };
    Some(glyph)
}

/// Glyph set used when writing numerals.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    pub zero: char,
    /// Index 0 is unused; 1..=9 are the digits
    pub digits: [char; 10],
    /// Tens, hundreds, thousands
    pub places: [char; 3],
}

/// 一二三 with 十百千
pub const STANDARD: GlyphSet = GlyphSet {
    zero: '零',
    digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    places: ['十', '百', '千'],
};

/// 壹贰叁 with 拾佰仟, as written on cheques and invoices
pub const FINANCIAL: GlyphSet = GlyphSet {
    zero: '零',
    digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
    places: ['拾', '佰', '仟'],
};
