use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{
    error::{LexError, LexErrorKind, Position},
    interpreter::value::kind::ValueKind,
};

/// The kind of a lexical token, together with the payload of literal tokens.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace, newlines and `//` comments are consumed without producing a
/// token. The end of input is signalled by the lexer returning `None`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Floating point literal tokens, such as `3.14` or `2.0`.
    #[regex(r"[0-9]+\.[0-9]*", lex_float)]
    Float(f32),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", lex_integer)]
    Integer(i32),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Character literal tokens, such as `'a'`.
    #[token("'", lex_char)]
    Char(char),
    /// String literal tokens, such as `"text"`. No escapes are processed.
    #[regex(r#""[^"]*"?"#, lex_string)]
    String(String),
    /// `null`
    #[token("null")]
    Null,
    /// A reserved type name such as `INT` or `str`.
    #[token("INT", type_name)]
    #[token("int", type_name)]
    #[token("FLT", type_name)]
    #[token("flt", type_name)]
    #[token("CHR", type_name)]
    #[token("chr", type_name)]
    #[token("STR", type_name)]
    #[token("str", type_name)]
    #[token("BOOL", type_name)]
    #[token("bool", type_name)]
    #[token("NULL", type_name)]
    Type(ValueKind),
    /// `var`
    #[token("var")]
    Var,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `match`
    #[token("match")]
    Match,
    /// `return`
    #[token("return")]
    Return,
    /// `typeof`
    #[token("typeof")]
    TypeOf,
    /// `is`
    #[token("is")]
    Is,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; variable or function names such as `x` or `$total`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=>`, reserved for lambdas.
    #[token("=>")]
    Arrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`, reserved.
    #[token("[")]
    LBracket,
    /// `]`, reserved.
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `_`, the default case of a `match`.
    #[token("_", priority = 3)]
    Underscore,
    /// Newlines only advance the line counter.
    #[token("\n", newline)]
    Newline,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
}

/// Tracks the current line while lexing.
///
/// `line_start` is the byte offset at which the current line begins, so that
/// columns can be computed without rescanning the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerExtras {
    /// The current 1-based line number.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

fn lex_float(lex: &mut logos::Lexer<'_, TokenKind>) -> Result<f32, LexErrorKind> {
    let slice = lex.slice();
    if slice.ends_with('.') {
        return Err(LexErrorKind::MalformedNumber);
    }
    slice.parse().map_err(|_| LexErrorKind::MalformedNumber)
}

fn lex_integer(lex: &mut logos::Lexer<'_, TokenKind>) -> Result<i32, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Reads the character after an opening `'` and the closing quote.
///
/// The character is taken whole from the remaining input, so multi-byte
/// characters are never split.
fn lex_char(lex: &mut logos::Lexer<'_, TokenKind>) -> Result<char, LexErrorKind> {
    let mut rest = lex.remainder().chars();
    let c = match rest.next() {
        Some('\'') => {
            lex.bump(1);
            return Err(LexErrorKind::UnterminatedChar);
        },
        Some(c) => c,
        None => return Err(LexErrorKind::UnterminatedChar),
    };
    lex.bump(c.len_utf8());
    if c == '\n' {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    }
    if rest.next() != Some('\'') {
        return Err(LexErrorKind::UnterminatedChar);
    }
    lex.bump(1);
    Ok(c)
}

fn type_name(lex: &mut logos::Lexer<'_, TokenKind>) -> Option<ValueKind> {
    ValueKind::from_type_name(lex.slice())
}

fn lex_string(lex: &mut logos::Lexer<'_, TokenKind>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    let start = lex.span().start;
    if let Some(last) = slice.rfind('\n') {
        lex.extras.line += slice.matches('\n').count();
        lex.extras.line_start = start + last + 1;
    }
    if slice.len() < 2 || !slice.ends_with('"') {
        return Err(LexErrorKind::UnterminatedString);
    }
    Ok(slice[1..slice.len() - 1].to_string())
}

fn newline(lex: &mut logos::Lexer<'_, TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Float(_) => "float literal",
            Self::Integer(_) => "integer literal",
            Self::Bool(_) => "boolean literal",
            Self::Char(_) => "character literal",
            Self::String(_) => "string literal",
            Self::Null => "'null'",
            Self::Type(_) => "type name",
            Self::Var => "'var'",
            Self::Fun => "'fun'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Match => "'match'",
            Self::Return => "'return'",
            Self::TypeOf => "'typeof'",
            Self::Is => "'is'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Xor => "'xor'",
            Self::Not => "'not'",
            Self::Identifier(_) => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Caret => "'^'",
            Self::Assign => "'='",
            Self::Equal => "'=='",
            Self::NotEqual => "'!='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Arrow => "'=>'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Underscore => "'_'",
            Self::Newline => "newline",
            Self::Comment => "comment",
        };
        f.write_str(text)
    }
}

/// A token produced by the [`Lexer`], with the text it was read from and the
/// position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// The position of the token, without its line text.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.lexeme)
    }
}

/// Turns source text into [`Token`]s.
///
/// The lexer is cheap to clone, which is how [`Lexer::peek_token`] looks one
/// token ahead without consuming anything.
///
/// # Example
/// ```
/// use xscript::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 1;");
/// let peeked = lexer.peek_token().unwrap().unwrap();
/// let next = lexer.next_token().unwrap().unwrap();
///
/// assert_eq!(peeked, next);
/// assert_eq!(next.kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().unwrap().unwrap().kind,
///            TokenKind::Identifier("x".to_string()));
/// ```
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Consumes and returns the next token.
    ///
    /// # Returns
    /// `None` at the end of input, otherwise the token or the reason the text
    /// at the current position is not a token.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        let result = self.inner.next()?;
        let position = self.locate(self.inner.span().start);
        let lexeme = self.inner.slice().to_string();

        Some(match result {
            Ok(kind) => {
                trace!(%kind, line = position.line, column = position.column, "token");
                Ok(Token { kind,
                           lexeme,
                           line: position.line,
                           column: position.column })
            },
            Err(kind) => Err(LexError { kind,
                                        lexeme,
                                        position: position.with_source(self.inner.source()) }),
        })
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek_token(&self) -> Option<Result<Token, LexError>> {
        self.clone().next_token()
    }

    /// The current 1-based line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// The 1-based column just past the last token read.
    #[must_use]
    pub fn column(&self) -> usize {
        self.locate(self.inner.span().end).column
    }

    /// The text of the current line.
    #[must_use]
    pub fn source_line(&self) -> &'src str {
        let source = self.inner.source();
        let rest = &source[self.inner.extras.line_start.min(source.len())..];
        rest.split('\n').next().unwrap_or_default().trim_end_matches('\r')
    }

    fn locate(&self, offset: usize) -> Position {
        let source = self.inner.source();
        let extras = &self.inner.extras;
        let (line, line_start) = if offset >= extras.line_start {
            (extras.line, extras.line_start)
        } else {
            let before = &source[..offset];
            (before.matches('\n').count() + 1, before.rfind('\n').map_or(0, |i| i + 1))
        };
        Position::new(line, source[line_start..offset].chars().count() + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lexes all of `source`, stopping at the first error.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
