use std::iter::Peekable;

use crate::{
    ast::{Expr, Literal, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check, expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// `-` only applies to numeric literals and identifiers (including calls), and
/// `not` only to boolean literals and identifiers; anything else after them is
/// a parse error. `typeof` applies to any factor.
///
/// Grammar:
/// ```text
/// unary := "-" (INTEGER | FLOAT | IDENT) | "not" (BOOL | IDENT)
///        | "typeof" factor | factor
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the operand.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// An `Expr::UnaryOp` node, or the factor itself when no operator is present.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected("expression", None));
    };

    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        TokenKind::TypeOf => UnaryOperator::TypeOf,
        _ => return parse_factor(tokens, depth),
    };
    tokens.next();

    let operand_allowed = match (op, tokens.peek().map(|t| &t.kind)) {
        (UnaryOperator::TypeOf, _)
        | (UnaryOperator::Negate,
           Some(TokenKind::Integer(_) | TokenKind::Float(_) | TokenKind::Identifier(_)))
        | (UnaryOperator::Not, Some(TokenKind::Bool(_) | TokenKind::Identifier(_))) => true,
        _ => false,
    };
    if !operand_allowed {
        let expected = if op == UnaryOperator::Negate {
            "number or identifier after '-'"
        } else {
            "boolean or identifier after 'not'"
        };
        return Err(unexpected(expected, tokens.peek().copied()));
    }

    let operand = parse_factor(tokens, depth)?;
    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       line: token.line })
}

/// Parses a factor: a literal, an identifier, a call or a parenthesized
/// expression.
///
/// An identifier directly followed by `(` is a call; its arguments are
/// comma-separated expressions.
///
/// Grammar:
/// ```text
/// factor := INTEGER | FLOAT | BOOL | CHAR | STRING | NULL | TYPE
///         | IDENT | IDENT "(" (expression ("," expression)*)? ")"
///         | "(" expression ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start an expression or the
/// closing parenthesis is missing.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(unexpected("expression", None));
    };
    let line = token.line;

    let value = match &token.kind {
        TokenKind::Integer(v) => Literal::Integer(*v),
        TokenKind::Float(v) => Literal::Float(*v),
        TokenKind::Bool(v) => Literal::Bool(*v),
        TokenKind::Char(v) => Literal::Char(*v),
        TokenKind::String(v) => Literal::String(v.clone()),
        TokenKind::Null => Literal::Null,
        TokenKind::Type(kind) => Literal::Type(*kind),
        TokenKind::Identifier(name) => {
            if check(tokens, &TokenKind::LParen) {
                tokens.next();
                let arguments = parse_comma_separated(tokens,
                                                      |tokens| parse_expression(tokens, depth),
                                                      &TokenKind::RParen)?;
                return Ok(Expr::FunctionCall { name: name.clone(),
                                               arguments,
                                               line });
            }
            return Ok(Expr::Identifier { name: name.clone(),
                                         line });
        },
        TokenKind::LParen => {
            let expr = parse_expression(tokens, depth)?;
            expect(tokens, &TokenKind::RParen)?;
            return Ok(expr);
        },
        _ => return Err(unexpected("expression", Some(token))),
    };

    Ok(Expr::Literal { value, line })
}
