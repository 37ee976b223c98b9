// ============================================================================
// Parser and Formatter Configuration
// Builder-style options with named presets
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Parser Configuration
// ============================================================================

/// Options for [`ChineseNumberParser`](crate::parser::ChineseNumberParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserConfig {
    /// Return plain decimal strings ("123", "-45.6") without touching the
    /// Chinese numeral logic
    pub plain_decimal_fast_path: bool,

    /// Optional: maximum number of 负 markers accepted.
    /// None means any count, each one toggling the sign
    pub max_sign_markers: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ParserConfig {
    /// Accept any number of sign markers
    pub fn lenient() -> Self {
        Self {
            plain_decimal_fast_path: true,
            max_sign_markers: None,
        }
    }

    /// Reject input with more than one 负
    pub fn strict() -> Self {
        Self::lenient().with_max_sign_markers(1)
    }

    /// Builder method: Set the sign marker limit
    pub fn with_max_sign_markers(mut self, limit: usize) -> Self {
        self.max_sign_markers = Some(limit);
        self
    }

    /// Builder method: Enable or disable the plain decimal fast path
    pub fn with_plain_decimal_fast_path(mut self, enabled: bool) -> Self {
        self.plain_decimal_fast_path = enabled;
        self
    }
}

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Glyph family used when writing numerals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralStyle {
    /// 一二三 十百千
    #[default]
    Standard,
    /// 壹贰叁 拾佰仟
    Financial,
}

/// Options for [`ChineseFormatter`](crate::formatter::ChineseFormatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    pub style: NumeralStyle,

    /// Write 10..19 as 十五 rather than 一十五 when it leads the numeral
    pub compact_teens: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormatConfig {
    pub fn standard() -> Self {
        Self {
            style: NumeralStyle::Standard,
            compact_teens: true,
        }
    }

    /// Financial glyphs, always spelling out the leading digit (壹拾伍)
    pub fn financial() -> Self {
        Self {
            style: NumeralStyle::Financial,
            compact_teens: false,
        }
    }

    /// Builder method: Set the glyph style
    pub fn with_style(mut self, style: NumeralStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder method: Toggle compact teens
    pub fn with_compact_teens(mut self, compact: bool) -> Self {
        self.compact_teens = compact;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_presets() {
        let lenient = ParserConfig::default();
        assert!(lenient.plain_decimal_fast_path);
        assert_eq!(lenient.max_sign_markers, None);

        let strict = ParserConfig::strict();
        assert_eq!(strict.max_sign_markers, Some(1));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ParserConfig::lenient()
            .with_plain_decimal_fast_path(false)
            .with_max_sign_markers(3);
        assert!(!config.plain_decimal_fast_path);
        assert_eq!(config.max_sign_markers, Some(3));

        let format = FormatConfig::standard()
            .with_style(NumeralStyle::Financial)
            .with_compact_teens(false);
        assert_eq!(format, FormatConfig::financial());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = ParserConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        let back: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let format: FormatConfig =
            serde_json::from_str(r#"{"style":"Financial","compact_teens":false}"#).unwrap();
        assert_eq!(format, FormatConfig::financial());
    }
}
