use std::iter::Peekable;

use crate::{
    ast::{Expr, MatchCase, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_function_declaration},
            core::{ParseResult, parse_expression},
            utils::{check, expect, nest, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The leading token selects the construct:
/// - `{` a block,
/// - `var` a variable declaration,
/// - `if`, `while` and `match` control flow,
/// - `fun` a function declaration,
/// - `return` a return statement,
/// - anything else an expression followed by `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the statement.
/// - `in_function`: Whether the statement is inside a function body, where
///   further function declarations are rejected.
/// - `depth`: Nesting depth of the enclosing statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              in_function: bool,
                              depth: usize)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected("statement", None));
    };
    let depth = nest(depth, Some(token))?;

    match token.kind {
        TokenKind::LBrace => parse_block(tokens, in_function, depth),
        TokenKind::Var => parse_variable_declaration(tokens, depth),
        TokenKind::If => parse_if(tokens, in_function, depth),
        TokenKind::While => parse_while(tokens, in_function, depth),
        TokenKind::Match => parse_match(tokens, in_function, depth),
        TokenKind::Fun => parse_function_declaration(tokens, in_function, depth),
        TokenKind::Return => parse_return(tokens, depth),
        _ => {
            let expr = parse_expression(tokens, depth)?;
            expect(tokens, &TokenKind::Semicolon)?;
            Ok(Statement::Expression { expr,
                                       line: token.line })
        },
    }
}

/// Parses `var name;` or `var name = expression;`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     depth: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Var)?.line;
    let name = parse_identifier(tokens)?;
    let init = if tokens.next_if(|token| token.kind == TokenKind::Assign).is_some() {
        Some(parse_expression(tokens, depth)?)
    } else {
        None
    };
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::VarDeclare { name, init, line })
}

/// Parses `if (condition) statement` with an optional `else statement`.
///
/// `else if` needs no special handling: the else branch is simply another
/// `if` statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   in_function: bool,
                   depth: usize)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::If)?.line;
    let condition = parse_condition(tokens, depth)?;
    let then_branch = Box::new(parse_statement(tokens, in_function, depth)?);
    let else_branch = if tokens.next_if(|token| token.kind == TokenKind::Else).is_some() {
        Some(Box::new(parse_statement(tokens, in_function, depth)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while (condition) statement`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      in_function: bool,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::While)?.line;
    let condition = parse_condition(tokens, depth)?;
    let body = Box::new(parse_statement(tokens, in_function, depth)?);

    Ok(Statement::While { condition, body, line })
}

/// Parses a `match` statement.
///
/// ```text
/// match := "match" "(" expression ")" "{" (TYPE ":" statement | "_" ":" statement)* "}"
/// ```
///
/// # Errors
/// Returns `ParseError::DuplicateDefaultCase` when `_` appears twice.
fn parse_match<'a, I>(tokens: &mut Peekable<I>,
                      in_function: bool,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Match)?.line;
    let subject = parse_condition(tokens, depth)?;
    expect(tokens, &TokenKind::LBrace)?;

    let mut cases = Vec::new();
    let mut default = None;
    loop {
        let Some(token) = tokens.next() else {
            return Err(unexpected("type name, '_' or '}'", None));
        };
        match token.kind {
            TokenKind::RBrace => break,
            TokenKind::Underscore => {
                if default.is_some() {
                    return Err(ParseError::DuplicateDefaultCase { position: token.position() });
                }
                expect(tokens, &TokenKind::Colon)?;
                default = Some(Box::new(parse_statement(tokens, in_function, depth)?));
            },
            TokenKind::Type(kind) => {
                expect(tokens, &TokenKind::Colon)?;
                let body = parse_statement(tokens, in_function, depth)?;
                cases.push(MatchCase { kind, body });
            },
            _ => return Err(unexpected("type name, '_' or '}'", Some(token))),
        }
    }

    Ok(Statement::Match { subject,
                          cases,
                          default,
                          line })
}

/// Parses `return;` or `return expression;`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Return)?.line;
    let value = if check(tokens, &TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expression(tokens, depth)?)
    };
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::Return { value, line })
}

/// Parses a parenthesized condition: `"(" expression ")"`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, &TokenKind::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, &TokenKind::RParen)?;
    Ok(condition)
}
