use thiserror::Error;

use crate::error::{LexError, Position};

/// Represents all errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected part of the source.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A token appeared where the grammar expected something else.
    #[error("Error on {position}: expected {expected}, found {found}{}", .position.snippet())]
    UnexpectedToken {
        /// A description of what the grammar allows here.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// Where the unexpected token starts.
        position: Position,
    },
    /// The source ended in the middle of a construct.
    #[error("Error on {position}: expected {expected}, found end of input{}", .position.snippet())]
    UnexpectedEndOfInput {
        /// A description of what the grammar allows here.
        expected: String,
        /// The end of the source.
        position: Position,
    },
    /// A `match` statement declared more than one `_` case.
    #[error("Error on {position}: a match statement may only have one default case{}", .position.snippet())]
    DuplicateDefaultCase {
        /// Where the second default case starts.
        position: Position,
    },
    /// A function was declared inside another function's body.
    #[error("Error on {position}: function '{name}' cannot be declared inside another function{}", .position.snippet())]
    NestedFunction {
        /// The name of the nested function.
        name:     String,
        /// Where the nested declaration starts.
        position: Position,
    },
    /// A function declared two parameters with the same name.
    #[error("Error on {position}: function '{function}' declares parameter '{name}' more than once{}", .position.snippet())]
    DuplicateParameter {
        /// The function being declared.
        function: String,
        /// The repeated parameter name.
        name:     String,
        /// Where the declaration starts.
        position: Position,
    },
    /// Statements or expressions nested deeper than the parser allows.
    #[error("Error on {position}: nesting exceeds the limit of {limit} levels{}", .position.snippet())]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// The token that would have opened one level too many.
        position: Position,
    },
}

impl ParseError {
    /// The position the error refers to.
    #[must_use]
    pub fn position(&self) -> &Position {
        match self {
            Self::Lex(error) => &error.position,
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::DuplicateDefaultCase { position }
            | Self::NestedFunction { position, .. }
            | Self::DuplicateParameter { position, .. }
            | Self::NestingTooDeep { position, .. } => position,
        }
    }

    /// Attaches the offending line of `source` to the error position.
    ///
    /// An end-of-input error is moved to the end of the last line.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        let at_end = matches!(self, Self::UnexpectedEndOfInput { .. });
        let position = match &mut self {
            Self::Lex(error) => &mut error.position,
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::DuplicateDefaultCase { position }
            | Self::NestedFunction { position, .. }
            | Self::DuplicateParameter { position, .. }
            | Self::NestingTooDeep { position, .. } => position,
        };
        if at_end {
            let line = source.lines().count().max(1);
            let column = source.lines().last().map_or(0, |l| l.chars().count()) + 1;
            *position = Position::new(line, column);
        }
        let located = std::mem::take(position).with_source(source);
        *position = located;
        self
    }
}
