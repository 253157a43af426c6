use thiserror::Error;

/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read or assign a name that is not bound in any enclosing
    /// frame.
    #[error("Error on line {line}: '{name}' is not defined")]
    UnboundIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a name that is already bound in the current frame.
    #[error("Error on line {line}: '{name}' is already declared in this scope")]
    RedeclaredIdentifier {
        /// The name of the declaration.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands it does not support.
    #[error("Error on line {line}: type mismatch: {details}")]
    TypeMismatch {
        /// The operator and the operands involved.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called a name that is unbound or not bound to a function.
    #[error("Error on line {line}: '{name}' is not a function")]
    UnknownFunction {
        /// The name of the callee.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee's signature does not accept the arguments given.
    #[error("Error on line {line}: cannot call {expected} as {found}")]
    ArgumentMismatch {
        /// The callee's declared signature.
        expected: String,
        /// The signature built from the argument kinds.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer division or modulo by zero.
    #[error("Error on line {line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Calls nested deeper than the configured limit.
    #[error("Error on line {line}: maximum call depth of {limit} exceeded")]
    CallDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions nested deeper than the configured limit.
    #[error("Error on line {line}: expression nesting exceeds the limit of {limit} levels")]
    NestingTooDeep {
        /// The configured maximum nesting.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The native `assert` received `false`.
    #[error("Error on line {line}: assertion failed")]
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A host-provided function reported a failure.
    #[error("Error on line {line}: {message}")]
    Native {
        /// The message reported by the host.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnboundIdentifier { line, .. }
            | Self::RedeclaredIdentifier { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::CallDepthExceeded { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::AssertionFailed { line }
            | Self::Native { line, .. } => *line,
        }
    }
}
