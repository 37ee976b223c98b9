// ============================================================================
// Parser Module
// Chinese numeral text to arbitrary-precision decimal
// ============================================================================
//
// Parsing runs in three stages:
// 1. Tokenize: count 负 markers, record magnitude units, split digit chunks
// 2. Decode each chunk as a 0..9999 numeral and weight it by its unit
// 3. Multiply in stacked trailing units, then apply the sign
//
// The only shared state is the immutable magnitude table.

mod chinese_numbers;
pub mod tokenizer;

pub use chinese_numbers::{ChineseNumber, ChineseNumberParser};
