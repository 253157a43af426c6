use thiserror::Error;

use crate::error::Position;

/// The reason a piece of source text could not be tokenized.
///
/// This is also the error type of the `logos` lexer, which requires a
/// `Default` variant for input that matches no token at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// A number with a trailing `.` and no fractional digits, such as `12.`.
    #[error("malformed number")]
    MalformedNumber,
    /// An integer literal that does not fit in 32 bits.
    #[error("integer literal out of range")]
    IntegerTooLarge,
    /// A character literal without its closing `'`, or with no character.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// A string literal without its closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A lexing failure at a known position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on {position}: {kind} '{lexeme}'{}", .position.snippet())]
pub struct LexError {
    /// What went wrong.
    pub kind:     LexErrorKind,
    /// The offending text.
    pub lexeme:   String,
    /// Where the offending text starts.
    pub position: Position,
}
