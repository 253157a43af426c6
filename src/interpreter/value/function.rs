use std::{fmt, ptr, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, kind::ValueKind},
    },
};

/// A host callback invoked for a native function.
///
/// Receives the evaluated arguments and the line of the call.
pub type NativeCallback = Rc<dyn Fn(&[Value], usize) -> EvalResult<Value>>;

/// The parameter kinds a function accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameters {
    /// Exactly these kinds, in order.
    Fixed(Vec<ValueKind>),
    /// Any number of arguments, each accepted by this kind.
    Variadic(ValueKind),
}

/// A function name together with its parameter kinds.
///
/// Declared functions carry the signature from their header. A call builds
/// one from the kinds of its evaluated arguments. Native functions run only
/// if their signature [`accepts`](Self::accepts) the call; user-declared
/// functions only need [`accepts_arity`](Self::accepts_arity), and the call
/// signature serves to describe the call in errors.
///
/// # Example
/// ```
/// use xscript::interpreter::value::{function::FunctionSignature, kind::ValueKind};
///
/// let add = FunctionSignature::new("add", vec![ValueKind::Integer, ValueKind::Integer]);
/// let call = FunctionSignature::new("add", vec![ValueKind::Integer, ValueKind::Integer]);
/// let short = FunctionSignature::new("add", vec![ValueKind::Integer]);
///
/// assert!(add.accepts(&call));
/// assert!(!add.accepts(&short));
/// assert!(add.accepts_arity(2));
/// assert!(!add.accepts_arity(1));
/// assert_eq!(add.to_string(), "add(INT, INT)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// The function name.
    pub name:       String,
    /// The accepted parameter kinds.
    pub parameters: Parameters,
}

impl FunctionSignature {
    /// A signature with a fixed parameter list.
    #[must_use]
    pub fn new(name: &str, parameters: Vec<ValueKind>) -> Self {
        Self { name:       name.to_string(),
               parameters: Parameters::Fixed(parameters), }
    }

    /// The signature of a call with the given evaluated arguments.
    #[must_use]
    pub fn of_call(name: &str, arguments: &[Value]) -> Self {
        Self::new(name, arguments.iter().map(Value::kind).collect())
    }

    /// Returns `true` if `count` arguments match the number of parameters.
    #[must_use]
    pub fn accepts_arity(&self, count: usize) -> bool {
        match &self.parameters {
            Parameters::Fixed(parameters) => parameters.len() == count,
            Parameters::Variadic(_) => true,
        }
    }

    /// Returns `true` if a call with signature `call` may invoke a function
    /// with this signature: the arity matches and each argument kind is equal
    /// to the parameter kind or one of them is `Any`.
    #[must_use]
    pub fn accepts(&self, call: &Self) -> bool {
        let Parameters::Fixed(arguments) = &call.parameters else {
            return false;
        };
        match &self.parameters {
            Parameters::Fixed(parameters) => {
                parameters.len() == arguments.len()
                && parameters.iter()
                             .zip(arguments)
                             .all(|(parameter, argument)| parameter.accepts(*argument))
            },
            Parameters::Variadic(kind) => arguments.iter().all(|argument| kind.accepts(*argument)),
        }
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameters {
            Parameters::Fixed(kinds) => {
                let kinds = kinds.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}({})", self.name, kinds.join(", "))
            },
            Parameters::Variadic(kind) => write!(f, "{}({kind}...)", self.name),
        }
    }
}

/// A function declared in source with `fun`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    /// Name and parameter kinds.
    pub signature:       FunctionSignature,
    /// Parameter names, in the same order as the signature's kinds.
    pub parameter_names: Vec<String>,
    /// The declared return kind. Recorded, not enforced.
    pub return_type:     ValueKind,
    /// The statements of the body.
    pub body:            Vec<Statement>,
}

impl From<&FunctionDef> for UserFunction {
    fn from(def: &FunctionDef) -> Self {
        let kinds = def.params.iter().map(|p| p.kind).collect();
        Self { signature:       FunctionSignature::new(&def.name, kinds),
               parameter_names: def.params.iter().map(|p| p.name.clone()).collect(),
               return_type:     def.return_type,
               body:            def.body.clone(), }
    }
}

/// A function implemented by the host.
#[derive(Clone)]
pub struct NativeFunction {
    /// Name and parameter kinds.
    pub signature: FunctionSignature,
    /// The host callback.
    pub callback:  NativeCallback,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("signature", &self.signature)
         .finish_non_exhaustive()
    }
}

/// A callable value: either declared in source or provided by the host.
#[derive(Debug, Clone)]
pub enum Function {
    /// Declared with `fun`.
    User(UserFunction),
    /// Registered by the host.
    Native(NativeFunction),
}

impl Function {
    /// The declared signature.
    #[must_use]
    pub const fn signature(&self) -> &FunctionSignature {
        match self {
            Self::User(function) => &function.signature,
            Self::Native(function) => &function.signature,
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(function) => write!(f, "<fun {}: {}>", function.signature, function.return_type),
            Self::Native(function) => write!(f, "<native {}>", function.signature),
        }
    }
}
