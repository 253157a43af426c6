use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Fails with `RuntimeError::AssertionFailed` unless the argument is `true`.
///
/// # Parameters
/// - `args`: Slice containing one boolean.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `null` when the assertion holds.
///
/// # Example
/// ```
/// use xscript::interpreter::{evaluator::function::builtin::assert_fn, value::core::Value};
///
/// assert_eq!(assert_fn(&[Value::Bool(true)], 1).unwrap(), Value::Null);
/// assert!(assert_fn(&[Value::Bool(false)], 1).is_err());
/// ```
pub fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "assert", line)?;

    match args[0] {
        Value::Bool(true) => Ok(Value::Null),
        _ => Err(RuntimeError::AssertionFailed { line }),
    }
}
