use std::fmt;

use crate::interpreter::value::kind::ValueKind;

/// Represents a literal value in the language.
///
/// `Literal` covers all constant values that can appear directly in source
/// code, including type names used as values (`INT`, `str`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 32-bit signed integer literal.
    Integer(i32),
    /// A 32-bit floating-point literal.
    Float(f32),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A character literal such as `'a'`.
    Char(char),
    /// A string literal such as `"text"`.
    String(String),
    /// The `null` literal.
    Null,
    /// A type name such as `INT`.
    Type(ValueKind),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node records the line it starts on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value such as `42`, `'c'` or `INT`.
    Literal {
        /// The literal value.
        value: Literal,
        /// The source line.
        line:  usize,
    },
    /// A reference to a bound name.
    Identifier {
        /// The name being read.
        name: String,
        /// The source line.
        line: usize,
    },
    /// A unary operation such as `-x`, `not done` or `typeof x`.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// The source line.
        line:    usize,
    },
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// The source line.
        line:  usize,
    },
    /// Assignment to an existing binding: `name = value`.
    Assignment {
        /// The target name.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
        /// The source line.
        line:  usize,
    },
    /// A call such as `add(1, 2)`.
    FunctionCall {
        /// The name of the callee.
        name:      String,
        /// The argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// The source line.
        line:      usize,
    },
}

impl Expr {
    /// The line the expression starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// A parameter of a declared function: `int a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The declared kind.
    pub kind: ValueKind,
    /// The parameter name.
    pub name: String,
}

/// A function declaration: `fun add(int a, int b): int { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function name.
    pub name:        String,
    /// The parameters in declaration order.
    pub params:      Vec<Parameter>,
    /// The declared return kind.
    pub return_type: ValueKind,
    /// The statements of the body block.
    pub body:        Vec<Statement>,
    /// The line of the `fun` keyword.
    pub line:        usize,
}

/// One `TYPE: statement` arm of a `match`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    /// The kind this case matches.
    pub kind: ValueKind,
    /// The statement run when the kind matches.
    pub body: Statement,
}

/// Represents a statement in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var name;` or `var name = init;`
    VarDeclare {
        /// The declared name.
        name: String,
        /// The initializer; `null` when absent.
        init: Option<Expr>,
        /// The source line.
        line: usize,
    },
    /// A braced block, run in its own frame.
    Block {
        /// The statements in order.
        statements: Vec<Self>,
        /// The line of the opening brace.
        line:       usize,
    },
    /// `if (condition) then_branch else else_branch`
    If {
        /// The condition, coerced by truthiness.
        condition:   Expr,
        /// Run when the condition holds.
        then_branch: Box<Self>,
        /// Run otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// The source line.
        line:        usize,
    },
    /// `while (condition) body`
    While {
        /// The loop condition, coerced by truthiness.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// The source line.
        line:      usize,
    },
    /// `match (subject) { TYPE: statement ... _: statement }`
    Match {
        /// The expression whose kind is matched.
        subject: Expr,
        /// The typed cases in source order.
        cases:   Vec<MatchCase>,
        /// The `_` case.
        default: Option<Box<Self>>,
        /// The source line.
        line:    usize,
    },
    /// A function declaration.
    FunctionDeclare(FunctionDef),
    /// `return;` or `return value;`
    Return {
        /// The returned expression; `null` when absent.
        value: Option<Expr>,
        /// The source line.
        line:  usize,
    },
    /// An expression followed by `;`.
    Expression {
        /// The expression.
        expr: Expr,
        /// The source line.
        line: usize,
    },
}

impl Statement {
    /// The line the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::FunctionDeclare(def) => def.line,
            Self::VarDeclare { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Match { line, .. }
            | Self::Return { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// A parsed program: the top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// Binary operators supported in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `is`
    Is,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Is => "is",
        };
        f.write_str(symbol)
    }
}

/// Unary operators supported in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `not`
    Not,
    /// `typeof`
    TypeOf,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Negate => "-",
            Self::Not => "not",
            Self::TypeOf => "typeof",
        };
        f.write_str(symbol)
    }
}
