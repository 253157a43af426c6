use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator<'_> {
    /// Evaluates a boolean operator.
    ///
    /// Both operands have already been evaluated, so `and` and `or` do not
    /// short-circuit.
    ///
    /// # Returns
    /// `None` for operators other than `and`, `or`, `xor`, `==` and `!=`.
    ///
    /// # Example
    /// ```
    /// use xscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_logic(BinaryOperator::Xor, true, true), Some(Value::Bool(false)));
    /// assert_eq!(Evaluator::eval_logic(BinaryOperator::Less, true, false), None);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, a: bool, b: bool) -> Option<Value> {
        let result = match op {
            BinaryOperator::And => a && b,
            BinaryOperator::Or => a || b,
            BinaryOperator::Xor => a ^ b,
            BinaryOperator::Equal => a == b,
            BinaryOperator::NotEqual => a != b,
            _ => return None,
        };
        Some(Value::Bool(result))
    }
}
