use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_type_test, statement::parse_statement, utils::nest},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many statements and parenthesized or assigned expressions may enclose
/// one another before parsing fails with `ParseError::NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses a whole program.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The complete token stream of the source.
///
/// # Returns
/// A [`Program`] holding the top-level statements in order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens, false, 0)?);
    }
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. An identifier directly
/// followed by `=` starts an assignment, which is right-associative; anything
/// else begins at the lowest-precedence level, the type test, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar:
/// ```text
/// expression := IDENT "=" expression
///             | type_test
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `depth`: Nesting depth of the enclosing construct.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// `NestingTooDeep` once expressions and statements nest more than
/// [`MAX_NESTING_DEPTH`] levels, besides any syntax error.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let depth = nest(depth, tokens.peek().copied())?;
    if let Some(Token { kind: TokenKind::Identifier(name),
                        line,
                        .. }) = tokens.peek().copied()
    {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if matches!(lookahead.peek(),
                    Some(Token { kind: TokenKind::Assign,
                                 .. }))
        {
            tokens.next();
            tokens.next();
            let value = parse_expression(tokens, depth)?;
            return Ok(Expr::Assignment { name:  name.clone(),
                                         value: Box::new(value),
                                         line:  *line, });
        }
    }
    parse_type_test(tokens, depth)
}
