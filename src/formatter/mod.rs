// ============================================================================
// Formatter Module
// Integer to Chinese numeral text, the inverse of the parser
// ============================================================================

mod chinese_formatter;

pub use chinese_formatter::ChineseFormatter;
