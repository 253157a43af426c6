use std::{fmt, iter::Peekable};

use crate::{
    error::{ParseError, Position},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
        value::kind::ValueKind,
    },
};

/// Builds the error for a token that does not fit the grammar, or for the
/// input ending early when `found` is `None`.
pub(in crate::interpreter::parser) fn unexpected(expected: impl fmt::Display,
                                                 found: Option<&Token>)
                                                 -> ParseError {
    match found {
        Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                     found:    token.to_string(),
                                                     position: token.position(), },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   position: Position::default(), },
    }
}

/// Enters one more level of nesting.
///
/// # Errors
/// `ParseError::NestingTooDeep` at `token` once `depth` reaches
/// [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn nest(depth: usize, token: Option<&Token>) -> ParseResult<usize> {
    if depth < MAX_NESTING_DEPTH {
        return Ok(depth + 1);
    }
    Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                     position: token.map(Token::position).unwrap_or_default(), })
}

/// Consumes the next token if it has the expected kind.
///
/// # Errors
/// Returns a `ParseError` naming `expected` if the next token differs or the
/// input has ended.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == *expected)
          .ok_or_else(|| unexpected(expected, tokens.peek().copied()))
}

/// Returns `true` if the next token has the given kind.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>,
                                                   kind: &TokenKind)
                                                   -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.kind == *kind)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments and parameter lists. An
/// immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, if something other than
/// `,` or the closing token follows an item, or if the input ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == *closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma, .. }) => {},
            Some(token) if token.kind == *closing => break,
            found => return Err(unexpected(format!("',' or {closing}"), found)),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| matches!(token.kind, TokenKind::Identifier(_))) {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => Ok(name.clone()),
        _ => Err(unexpected("identifier", tokens.peek().copied())),
    }
}

/// Parses a reserved type name such as `int` or `STR`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a type name.
pub(in crate::interpreter::parser) fn parse_type_name<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<ValueKind>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| matches!(token.kind, TokenKind::Type(_))) {
        Some(Token { kind: TokenKind::Type(kind),
                     .. }) => Ok(*kind),
        _ => Err(unexpected("type name", tokens.peek().copied())),
    }
}
