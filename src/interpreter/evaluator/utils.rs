use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Builds the error for a binary operator applied to operands it does not
/// support, naming the operator and both operands.
#[must_use]
pub fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} {} and {} {}",
                                                  left.kind(),
                                                  left.repr(),
                                                  right.kind(),
                                                  right.repr()),
                                 line }
}

/// Checks that a native function received exactly `expected` arguments.
///
/// Natives registered with a fixed signature are already checked before the
/// call; this guards callbacks that index into their arguments.
pub fn check_arity(args: &[Value],
                   expected: usize,
                   name: &str,
                   line: usize)
                   -> Result<(), RuntimeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::Native { message: format!("{name} expects {expected} argument(s), got {}",
                                                    args.len()),
                                   line })
    }
}
