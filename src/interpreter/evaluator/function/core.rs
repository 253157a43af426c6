use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator, Flow},
            function::{builtin, print},
        },
        value::{
            core::Value,
            function::{Function, FunctionSignature, NativeFunction, Parameters, UserFunction},
            kind::ValueKind,
        },
    },
};

/// Type alias for native function handlers in the table below.
///
/// A native receives a slice of evaluated argument values and the line number
/// of the call.
type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// The parameter kinds of a table entry.
#[derive(Clone, Copy)]
enum NativeParameters {
    Fixed(&'static [ValueKind]),
    Variadic(ValueKind),
}

impl From<NativeParameters> for Parameters {
    fn from(parameters: NativeParameters) -> Self {
        match parameters {
            NativeParameters::Fixed(kinds) => Self::Fixed(kinds.to_vec()),
            NativeParameters::Variadic(kind) => Self::Variadic(kind),
        }
    }
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the accepted parameter kinds,
/// - a function pointer implementing the native.
///
/// The macro produces:
/// - `NativeDef` (internal metadata),
/// - `NATIVE_TABLE` (static table used by [`install_natives`]).
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                parameters: $parameters:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct NativeDef {
            name:       &'static str,
            parameters: NativeParameters,
            func:       NativeFn,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, parameters: $parameters, func: $func },
            )*
        ];
    };
}

native_functions! {
    "print"  => { parameters: NativeParameters::Variadic(ValueKind::Any), func: print::print },
    "assert" => { parameters: NativeParameters::Fixed(&[ValueKind::Bool]), func: builtin::assert_fn },
}

/// Binds every native from the table in the current frame of `env`.
///
/// Names that are already bound are left alone.
pub fn install_natives(env: &mut Environment) {
    for native in NATIVE_TABLE {
        if !register_native_function(env, native.name, native.parameters.into(), native.func) {
            debug!(name = native.name, "native already bound, skipping");
        }
    }
}

/// Binds a host callback as a function named `name` in the current frame of
/// `env`.
///
/// The callback is invoked through the same path as user-defined functions:
/// arguments are evaluated, checked against `parameters`, and passed in as a
/// slice together with the line of the call.
///
/// # Returns
/// `false`, without changing anything, if `name` is already bound in the
/// current frame.
///
/// # Example
/// ```
/// use xscript::{
///     interpreter::{
///         environment::Environment,
///         value::{core::Value, function::Parameters, kind::ValueKind},
///     },
///     register_native_function, run,
/// };
///
/// let mut env = Environment::new();
/// register_native_function(&mut env,
///                          "double",
///                          Parameters::Fixed(vec![ValueKind::Integer]),
///                          |args, _line| match args {
///                              [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
///                              _ => Ok(Value::Null),
///                          });
///
/// assert_eq!(run("double(21);", &mut env).unwrap(), Value::Integer(42));
/// assert!(run("double(1.5);", &mut env).is_err());
/// ```
pub fn register_native_function<F>(env: &mut Environment,
                                   name: &str,
                                   parameters: Parameters,
                                   callback: F)
                                   -> bool
    where F: Fn(&[Value], usize) -> EvalResult<Value> + 'static
{
    let signature = FunctionSignature { name: name.to_string(),
                                        parameters };
    let function = NativeFunction { signature,
                                    callback: Rc::new(callback) };
    env.define(name, Value::from(Function::Native(function)))
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right and their kinds form the call
    /// signature. The callee is looked up by name through the frame chain. A
    /// user-defined function only checks the number of arguments; a native
    /// function must accept the call signature. A user-defined function runs
    /// in a new frame whose parent is the frame active at the call; the frame
    /// is released when the call ends, whether it returns normally or fails.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is unbound or not a function.
    /// - `ArgumentMismatch` if the arity is wrong, or a native rejects the
    ///   argument kinds.
    /// - `CallDepthExceeded` if too many calls are active.
    /// - Any error raised while running the body or the native callback.
    #[tracing::instrument(level = "debug", skip(self, arguments), fields(depth = self.depth))]
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;
        let call = FunctionSignature::of_call(name, &values);

        let function = match self.env.get(name) {
            Some(Value::Function(function)) => Rc::clone(function),
            _ => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           line });
            },
        };

        let accepted = match &*function {
            Function::User(user) => user.signature.accepts_arity(values.len()),
            Function::Native(native) => native.signature.accepts(&call),
        };
        if !accepted {
            return Err(RuntimeError::ArgumentMismatch { expected: function.signature().to_string(),
                                                        found: call.to_string(),
                                                        line });
        }
        if self.depth >= self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.options.max_call_depth,
                                                         line });
        }

        match &*function {
            Function::Native(native) => (native.callback)(&values, line),
            Function::User(user) => self.call_user_defined_function(user, values, line),
        }
    }

    /// Runs a user-defined function in its own frame.
    fn call_user_defined_function(&mut self,
                                  function: &UserFunction,
                                  arguments: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        self.depth += 1;
        self.env.enter_scope();
        let result = self.run_function_body(function, arguments, line);
        self.env.exit_scope();
        self.depth -= 1;
        result
    }

    fn run_function_body(&mut self,
                         function: &UserFunction,
                         arguments: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        for (name, value) in function.parameter_names.iter().zip(arguments) {
            if !self.env.define(name, value) {
                return Err(RuntimeError::RedeclaredIdentifier { name: name.clone(),
                                                                line });
            }
        }
        match self.exec_sequence(&function.body)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal(_) => Ok(Value::Null),
        }
    }
}
