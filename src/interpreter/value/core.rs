use std::{fmt, rc::Rc};

use crate::{
    ast::Literal,
    interpreter::value::{function::Function, kind::ValueKind},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible values that can appear in expressions,
/// bindings, function arguments and returns. The payload always matches the
/// kind reported by [`Value::kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The single null value. Uninitialized declarations bind it.
    Null,
    /// A 32-bit signed integer. Arithmetic wraps on overflow.
    Integer(i32),
    /// A 32-bit floating point number.
    Float(f32),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A single character.
    Char(char),
    /// A string of characters.
    String(String),
    /// A type used as a value, as produced by `typeof` or written as `INT`.
    Type(ValueKind),
    /// A user-defined or native function. Equality is identity.
    Function(Rc<Function>),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<ValueKind> for Value {
    fn from(v: ValueKind) -> Self {
        Self::Type(v)
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(v) => Self::Integer(*v),
            Literal::Float(v) => Self::Float(*v),
            Literal::Bool(v) => Self::Bool(*v),
            Literal::Char(v) => Self::Char(*v),
            Literal::String(v) => Self::String(v.clone()),
            Literal::Null => Self::Null,
            Literal::Type(kind) => Self::Type(*kind),
        }
    }
}

impl Value {
    /// Returns the kind of this value.
    ///
    /// # Example
    /// ```
    /// use xscript::interpreter::value::{core::Value, kind::ValueKind};
    ///
    /// assert_eq!(Value::Integer(5).kind(), ValueKind::Integer);
    /// assert_eq!(Value::Type(ValueKind::Integer).kind(), ValueKind::TypeTag);
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Char(_) => ValueKind::Char,
            Self::String(_) => ValueKind::String,
            Self::Type(_) => ValueKind::TypeTag,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Coerces the value to a condition.
    ///
    /// `null` is false, booleans are themselves, and every other value is true,
    /// including `0` and the empty string.
    ///
    /// # Example
    /// ```
    /// use xscript::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            _ => true,
        }
    }

    /// The quoted representation used when echoing values back to a user:
    /// characters and strings keep their quotes, everything else prints as
    /// with `Display`.
    ///
    /// # Example
    /// ```
    /// use xscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Char('a').repr(), "'a'");
    /// assert_eq!(Value::from("hi").repr(), "\"hi\"");
    /// assert_eq!(Value::from("hi").to_string(), "hi");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Char(c) => format!("'{c}'"),
            Self::String(s) => format!("\"{s}\""),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Type(kind) => write!(f, "{kind}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
