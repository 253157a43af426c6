use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::i32_to_f32,
};

impl Evaluator<'_> {
    /// Evaluates an operator on two integers.
    ///
    /// `+ - * / %` wrap on overflow, `^` is computed on floats, and the
    /// comparison operators produce booleans.
    ///
    /// # Returns
    /// `Ok(None)` if the operator is not defined on integers.
    ///
    /// # Errors
    /// `RuntimeError::DivisionByZero` for `/` or `%` with a zero divisor.
    ///
    /// # Example
    /// ```
    /// use xscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let wrapped = Evaluator::eval_integer_op(BinaryOperator::Add, i32::MAX, 1, 1).unwrap();
    /// assert_eq!(wrapped, Some(Value::Integer(i32::MIN)));
    ///
    /// let power = Evaluator::eval_integer_op(BinaryOperator::Pow, 2, 3, 1).unwrap();
    /// assert_eq!(power, Some(Value::Float(8.0)));
    ///
    /// assert!(Evaluator::eval_integer_op(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_integer_op(op: BinaryOperator,
                           a: i32,
                           b: i32,
                           line: usize)
                           -> EvalResult<Option<Value>> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let value = match op {
            Add => Value::Integer(a.wrapping_add(b)),
            Sub => Value::Integer(a.wrapping_sub(b)),
            Mul => Value::Integer(a.wrapping_mul(b)),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { line }),
            Div => Value::Integer(a.wrapping_div(b)),
            Mod => Value::Integer(a.wrapping_rem(b)),
            Pow => Value::Float(i32_to_f32(a).powf(i32_to_f32(b))),
            _ => return Ok(Self::compare(op, &a, &b).map(Value::Bool)),
        };
        Ok(Some(value))
    }

    /// Evaluates an operator on two floats.
    ///
    /// Supports `+ - * / ^` and the comparison operators. Division by zero
    /// follows IEEE semantics.
    ///
    /// # Returns
    /// `None` if the operator is not defined on floats.
    #[must_use]
    pub fn eval_float_op(op: BinaryOperator, a: f32, b: f32) -> Option<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let value = match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => a / b,
            Pow => a.powf(b),
            _ => return Self::compare(op, &a, &b).map(Value::Bool),
        };
        Some(Value::Float(value))
    }
}
