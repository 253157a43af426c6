use std::fmt;

use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning source text into tokens: unrecognized characters,
/// malformed or oversized numeric literals, and unterminated character or
/// string literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors include unexpected tokens, grammar violations such as a second
/// default case in a `match`, and lexing failures surfaced during parsing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include unbound names, type mismatches between operands,
/// rejected function calls and division by zero.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A location in the source text.
///
/// Lines and columns are 1-based. `source_line` holds the text of the line so
/// diagnostics can show it; it is empty until the error is attached to the
/// source it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line:        usize,
    /// 1-based column, counted in characters.
    pub column:      usize,
    /// The full text of the line, without its terminator.
    pub source_line: String,
}

impl Position {
    /// Creates a position that does not yet carry its line text.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line,
               column,
               source_line: String::new() }
    }

    /// Fills in `source_line` from the given source text.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source_line = source.lines()
                                 .nth(self.line.saturating_sub(1))
                                 .unwrap_or_default()
                                 .trim_end_matches('\r')
                                 .to_string();
        self
    }

    /// The offending line followed by a caret under the column, or an empty
    /// string when the line text is unknown.
    #[must_use]
    pub fn snippet(&self) -> String {
        if self.source_line.is_empty() {
            return String::new();
        }
        let padding = " ".repeat(self.column.saturating_sub(1));
        format!("\n    {}\n    {padding}^", self.source_line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Any failure produced while running a piece of source text.
///
/// Returned by [`run`](crate::run), which lexes, parses and executes in one
/// step.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be turned into a syntax tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}
