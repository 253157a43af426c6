use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints its arguments to standard output on one line, separated by spaces.
///
/// Accepts any number of arguments of any kind. Values use their plain
/// `Display` form, so strings and characters print without quotes.
///
/// # Parameters
/// - `args`: The values to print.
/// - `_line`: Line number of the call.
///
/// # Returns
/// `null`.
///
/// # Example
/// ```
/// use xscript::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// let result = print(&[Value::from("x ="), Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    println!("{}", join(args));
    Ok(Value::Null)
}

/// Joins values with single spaces, as `print` writes them.
#[must_use]
pub fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
