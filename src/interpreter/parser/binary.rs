use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses an optional type test.
///
/// The rule is: `type_test := or ("is" or)?`
///
/// The right operand is an ordinary expression; the evaluator requires it to
/// produce a type tag.
pub fn parse_type_test<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_or(tokens, depth)?;
    if let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Is) {
        let right = parse_or(tokens, depth)?;
        return Ok(Expr::BinaryOp { left:  Box::new(left),
                                   op:    BinaryOperator::Is,
                                   right: Box::new(right),
                                   line:  token.line, });
    }
    Ok(left)
}

/// `or := and ("or" and)*`
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::Or], parse_and)
}

/// `and := xor ("and" xor)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::And], parse_xor)
}

/// `xor := equality ("xor" equality)*`
pub fn parse_xor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::Xor], parse_equality)
}

/// `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_relational)
}

/// `relational := additive ((">" | ">=" | "<" | "<=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual,
                             BinaryOperator::Less,
                             BinaryOperator::LessEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the enclosing expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                           parse_exponent)
}

/// Parses exponentiation.
///
/// The rule is: `exponent := unary ("^" unary)*`, folded to the left, so
/// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::Pow], parse_unary)
}

/// Parses one precedence level: `operand (op operand)*` where `op` is one of
/// `operators`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operators: &[BinaryOperator],
                                 parse_operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_operand(tokens, depth)?;
    while let Some((op, line)) =
        tokens.peek()
              .and_then(|token| {
                  token_to_binary_operator(&token.kind).filter(|op| operators.contains(op))
                                                       .map(|op| (op, token.line))
              })
    {
        tokens.next();
        let right = parse_operand(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use xscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::Caret => BinaryOperator::Pow,
        TokenKind::Equal => BinaryOperator::Equal,
        TokenKind::NotEqual => BinaryOperator::NotEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        TokenKind::Xor => BinaryOperator::Xor,
        TokenKind::Is => BinaryOperator::Is,
        _ => return None,
    };
    Some(op)
}
