use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Parameter, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, parse_comma_separated, parse_identifier, parse_type_name, unexpected},
        },
    },
};

/// Parses a block statement delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `in_function`: Whether the block belongs to a function body.
/// - `depth`: Nesting depth of the block statement.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          in_function: bool,
                          depth: usize)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.peek().map_or(0, |token| token.line);
    let statements = parse_block_statements(tokens, in_function, depth)?;
    Ok(Statement::Block { statements, line })
}

/// Parses `"{" statement* "}"` and returns the statements.
pub(in crate::interpreter::parser) fn parse_block_statements<'a, I>(tokens: &mut Peekable<I>,
                                                                    in_function: bool,
                                                                    depth: usize)
                                                                    -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, &TokenKind::LBrace)?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some(Token { kind: TokenKind::RBrace,
                         .. }) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, in_function, depth)?),
            None => return Err(unexpected(TokenKind::RBrace, None)),
        }
    }

    Ok(statements)
}

/// Parses a function declaration.
///
/// ```text
/// fun_decl := "fun" IDENT "(" (TYPE IDENT ("," TYPE IDENT)*)? ")" ":" TYPE block
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at `fun`.
/// - `in_function`: Whether the declaration appears inside a function body.
/// - `depth`: Nesting depth of the declaration.
///
/// # Errors
/// Returns `ParseError::NestedFunction` when declared inside another function,
/// `ParseError::DuplicateParameter` when two parameters share a name, or an
/// unexpected-token error for malformed headers and bodies.
pub fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                         in_function: bool,
                                         depth: usize)
                                         -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, &TokenKind::Fun)?;
    let name = parse_identifier(tokens)?;
    if in_function {
        return Err(ParseError::NestedFunction { name,
                                                position: keyword.position() });
    }

    expect(tokens, &TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_parameter, &TokenKind::RParen)?;
    for (i, param) in params.iter().enumerate() {
        if params[..i].iter().any(|earlier| earlier.name == param.name) {
            return Err(ParseError::DuplicateParameter { function: name,
                                                        name:     param.name.clone(),
                                                        position: keyword.position() });
        }
    }
    expect(tokens, &TokenKind::Colon)?;
    let return_type = parse_type_name(tokens)?;
    let body = parse_block_statements(tokens, true, depth)?;

    Ok(Statement::FunctionDeclare(FunctionDef { name,
                                                params,
                                                return_type,
                                                body,
                                                line: keyword.line }))
}

/// Parses one `TYPE IDENT` parameter.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a Token> + Clone
{
    let kind = parse_type_name(tokens)?;
    let name = parse_identifier(tokens)?;
    Ok(Parameter { kind, name })
}
