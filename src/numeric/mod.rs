// ============================================================================
// Numeric Module
// Glyph tables, magnitude constants and error types
// ============================================================================
//
// This module provides:
// - Glyph classification for zero, digit and place-value characters
// - MagnitudeTable: myriad units 万 .. 大数, built once and never mutated
// - ParseError / FormatError with result aliases
//
// Magnitudes run to 10^72, far past any fixed-width integer, so multipliers
// are held as BigDecimal.

mod errors;
pub mod glyphs;
mod magnitude;

pub use errors::{FormatError, FormatResult, ParseError, ParseResult};
pub use glyphs::{classify, Glyph, GlyphSet, NEGATIVE};
pub use magnitude::{Magnitude, MagnitudeTable, MAGNITUDE_COUNT};
