use std::fmt;

/// The closed set of kinds known to the interpreter.
///
/// Every runtime [`Value`](crate::interpreter::value::core::Value) reports one
/// of these through `Value::kind`. `Identifier`, `Operator` and
/// `FunctionCallMarker` name evaluation items and never appear as the kind of
/// a runtime value. `Any` is a wildcard that only shows up in function
/// signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The kind of the single `null` value.
    Null,
    /// 32-bit signed integers.
    Integer,
    /// 32-bit floating point numbers.
    Float,
    /// Single characters.
    Char,
    /// `true` and `false`.
    Bool,
    /// Character strings.
    String,
    /// A name awaiting resolution.
    Identifier,
    /// An operator symbol.
    Operator,
    /// A type name used as a value, such as `INT`.
    TypeTag,
    /// User-defined and native functions.
    Function,
    /// A pending call.
    FunctionCallMarker,
    /// Matches every other kind in a signature.
    Any,
}

impl ValueKind {
    /// Resolves a reserved type name to its kind.
    ///
    /// Exactly the all-lowercase and all-uppercase spellings are accepted.
    /// `NULL` names the null type; the lowercase `null` is the null literal and
    /// is therefore not a type name.
    ///
    /// # Example
    /// ```
    /// use xscript::interpreter::value::kind::ValueKind;
    ///
    /// assert_eq!(ValueKind::from_type_name("int"), Some(ValueKind::Integer));
    /// assert_eq!(ValueKind::from_type_name("FLT"), Some(ValueKind::Float));
    /// assert_eq!(ValueKind::from_type_name("Int"), None);
    /// assert_eq!(ValueKind::from_type_name("null"), None);
    /// ```
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "INT" | "int" => Some(Self::Integer),
            "FLT" | "flt" => Some(Self::Float),
            "CHR" | "chr" => Some(Self::Char),
            "STR" | "str" => Some(Self::String),
            "BOOL" | "bool" => Some(Self::Bool),
            "NULL" => Some(Self::Null),
            _ => None,
        }
    }

    /// The canonical uppercase spelling used when displaying a kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer => "INT",
            Self::Float => "FLT",
            Self::Char => "CHR",
            Self::Bool => "BOOL",
            Self::String => "STR",
            Self::Identifier => "IDENT",
            Self::Operator => "OPERATOR",
            Self::TypeTag => "TYPE",
            Self::Function => "FUN",
            Self::FunctionCallMarker => "CALL",
            Self::Any => "ANY",
        }
    }

    /// Returns `true` when a parameter of this kind accepts an argument of
    /// kind `other`.
    ///
    /// `Any` on either side is compatible with everything.
    #[must_use]
    pub fn accepts(self, other: Self) -> bool {
        self == Self::Any || other == Self::Any || self == other
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
