// ============================================================================
// Numeric Errors
// Error types for Chinese numeral parsing and formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a numeral.
///
/// Every variant is an invalid-argument failure: parsing is pure and
/// deterministic, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input was empty (or only whitespace)
    Empty,
    /// A character inside a digit chunk is not a recognized glyph
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// 1-based character position within the full input
        position: usize,
        /// The input with the offending character bracketed as `>X<`
        marked: String,
    },
    /// More negation markers than the parser configuration allows
    TooManySignMarkers { found: usize, limit: usize },
}

impl ParseError {
    /// Build an `UnexpectedCharacter` error for the character at `position`
    /// (1-based) of `input`.
    pub(crate) fn unexpected(input: &str, position: usize) -> Self {
        let mut marked = String::with_capacity(input.len() + 2);
        let mut character = char::REPLACEMENT_CHARACTER;
        for (i, c) in input.chars().enumerate() {
            if i + 1 == position {
                character = c;
                marked.push('>');
                marked.push(c);
                marked.push('<');
            } else {
                marked.push(c);
            }
        }
        ParseError::UnexpectedCharacter {
            character,
            position,
            marked,
        }
    }

    /// Whether the failure is caused by the caller's input. Every current
    /// variant is; the match has no wildcard so a new variant must pick a side.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            ParseError::Empty
            | ParseError::UnexpectedCharacter { .. }
            | ParseError::TooManySignMarkers { .. } => true,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "invalid argument: input is empty"),
            ParseError::UnexpectedCharacter {
                character,
                position,
                marked,
            } => write!(
                f,
                "invalid character '{}' at position {}: {}",
                character, position, marked
            ),
            ParseError::TooManySignMarkers { found, limit } => write!(
                f,
                "invalid argument: {} negation markers found, at most {} allowed",
                found, limit
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while formatting a value as Chinese numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Value needs more myriad groups than the magnitude table names
    OutOfRange { digits: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::OutOfRange { digits } => write!(
                f,
                "value out of range: {} digits exceed the largest named magnitude",
                digits
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for format operations
pub type FormatResult<T> = Result<T, FormatError>;
