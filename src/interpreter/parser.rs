/// Entry points for parsing programs and expressions.
///
/// Contains the program loop and the expression rule, including the one-token
/// lookahead that tells assignments apart from other expressions.
pub mod core;

/// Unary operators and factors.
///
/// Handles negation, `not`, `typeof`, literals, identifiers, calls and
/// parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from `is` down to `^`, all
/// left-associative.
pub mod binary;

/// Blocks and function declarations.
///
/// Parses braced statement lists and `fun` declarations with their parameter
/// lists.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations, error construction and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, control flow, `return`
/// and expression statements.
pub mod statement;
