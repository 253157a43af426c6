use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operator applied to an already evaluated operand.
    ///
    /// - `-` negates integers (wrapping) and floats.
    /// - `not` inverts booleans.
    /// - `typeof` returns the operand's kind as a type tag and never fails.
    ///
    /// # Example
    /// ```
    /// use xscript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         value::{core::Value, kind::ValueKind},
    ///     },
    /// };
    ///
    /// let negated = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(i32::MIN), 1);
    /// assert_eq!(negated.unwrap(), Value::Integer(i32::MIN));
    ///
    /// let kind = Evaluator::eval_unary(UnaryOperator::TypeOf, &Value::Float(1.5), 1);
    /// assert_eq!(kind.unwrap(), Value::Type(ValueKind::Float));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Not, &Value::Integer(1), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match (op, operand) {
            (UnaryOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
            (UnaryOperator::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
            (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (UnaryOperator::TypeOf, value) => Ok(Value::Type(value.kind())),
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} {}",
                                                                   operand.kind(),
                                                                   operand.repr()),
                                                  line }),
        }
    }
}
