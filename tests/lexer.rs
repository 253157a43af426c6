use pretty_assertions::assert_eq;
use xscript::{
    ValueKind,
    error::LexErrorKind,
    interpreter::lexer::{Lexer, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to lex {source:?}: {e}"))
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
}

#[test]
fn literals() {
    assert_eq!(kinds("42 3.5 true false 'c' \"text\" null"),
               vec![TokenKind::Integer(42),
                    TokenKind::Float(3.5),
                    TokenKind::Bool(true),
                    TokenKind::Bool(false),
                    TokenKind::Char('c'),
                    TokenKind::String("text".to_string()),
                    TokenKind::Null]);
}

#[test]
fn keywords_take_priority_over_identifiers() {
    assert_eq!(kinds("var variable fun is island"),
               vec![TokenKind::Var,
                    TokenKind::Identifier("variable".to_string()),
                    TokenKind::Fun,
                    TokenKind::Is,
                    TokenKind::Identifier("island".to_string())]);
}

#[test]
fn type_names_in_either_case() {
    assert_eq!(kinds("INT int STR str NULL Int null_"),
               vec![TokenKind::Type(ValueKind::Integer),
                    TokenKind::Type(ValueKind::Integer),
                    TokenKind::Type(ValueKind::String),
                    TokenKind::Type(ValueKind::String),
                    TokenKind::Type(ValueKind::Null),
                    TokenKind::Identifier("Int".to_string()),
                    TokenKind::Identifier("null_".to_string())]);
}

#[test]
fn operators_prefer_the_longest_match() {
    assert_eq!(kinds("= == => != < <= > >= _ _x"),
               vec![TokenKind::Assign,
                    TokenKind::Equal,
                    TokenKind::Arrow,
                    TokenKind::NotEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Underscore,
                    TokenKind::Identifier("_x".to_string())]);
}

#[test]
fn comments_and_newlines_produce_no_tokens() {
    assert_eq!(kinds("// nothing here\n\n   // or here"), vec![]);
    assert_eq!(kinds("1 // one\n2"), vec![TokenKind::Integer(1), TokenKind::Integer(2)]);
}

#[test]
fn tokens_know_where_they_start() {
    let tokens = tokenize("var x = 1;\n  x = \"a\nb\" + y;").unwrap();
    let positions = tokens.iter()
                          .map(|token| (token.lexeme.as_str(), token.line, token.column))
                          .collect::<Vec<_>>();

    assert_eq!(positions,
               vec![("var", 1, 1),
                    ("x", 1, 5),
                    ("=", 1, 7),
                    ("1", 1, 9),
                    (";", 1, 10),
                    ("x", 2, 3),
                    ("=", 2, 5),
                    ("\"a\nb\"", 2, 7),
                    ("+", 3, 4),
                    ("y", 3, 6),
                    (";", 3, 7)]);
}

#[test]
fn peeking_does_not_consume() {
    let mut lexer = Lexer::new("a b");
    let peeked = lexer.peek_token().unwrap().unwrap();
    assert_eq!(lexer.peek_token().unwrap().unwrap(), peeked);
    assert_eq!(lexer.next_token().unwrap().unwrap(), peeked);
    assert_eq!(lexer.next_token().unwrap().unwrap().lexeme, "b");
    assert!(lexer.next_token().is_none());
    assert!(lexer.peek_token().is_none());
}

#[test]
fn lexer_reports_its_line() {
    let mut lexer = Lexer::new("first\n  second line");
    lexer.next_token();
    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.source_line(), "first");

    lexer.next_token();
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.column(), 9);
    assert_eq!(lexer.source_line(), "  second line");
}

#[test]
fn errors_carry_kind_lexeme_and_position() {
    let error = tokenize("x = 1;\ny = 3.;").unwrap_err();
    assert_eq!(error.kind, LexErrorKind::MalformedNumber);
    assert_eq!(error.lexeme, "3.");
    assert_eq!((error.position.line, error.position.column), (2, 5));
    assert_eq!(error.to_string(),
               "Error on line 2, column 5: malformed number '3.'\n    y = 3.;\n        ^");
}

#[test]
fn char_literals_hold_any_single_character() {
    assert_eq!(kinds("'é' '€' '_' '\"'"),
               vec![TokenKind::Char('é'),
                    TokenKind::Char('€'),
                    TokenKind::Char('_'),
                    TokenKind::Char('"')]);
}

#[test]
fn unterminated_char_literals_are_errors() {
    for source in ["'a", "''", "'ab'", "'€", "'"] {
        let error = tokenize(source).unwrap_err();
        assert_eq!(error.kind, LexErrorKind::UnterminatedChar, "{source:?}");
    }
}

#[test]
fn newline_char_literal_advances_the_line() {
    let tokens = tokenize("x = '\n';\ny").unwrap();
    let positions = tokens.iter()
                          .map(|token| (token.lexeme.as_str(), token.line, token.column))
                          .collect::<Vec<_>>();

    assert_eq!(positions,
               vec![("x", 1, 1),
                    ("=", 1, 3),
                    ("'\n'", 1, 5),
                    (";", 2, 2),
                    ("y", 3, 1)]);
}
