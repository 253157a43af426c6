use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::type_mismatch,
        },
        value::core::Value,
    },
    util::num::{char_to_i32, i32_to_f32},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `is` is handled first for every left operand. Otherwise the pair of
    /// operand kinds selects the handler:
    /// - two integers use wrapping integer arithmetic,
    /// - an integer and a float promote the integer to a float,
    /// - an integer and a character widen the character to its code point,
    /// - two floats, booleans, characters, strings or type tags use the
    ///   operations defined for that kind.
    ///
    /// Any other pairing, and any operator a kind does not define, is a type
    /// mismatch.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use xscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Float(0.5), 1);
    /// assert_eq!(sum.unwrap(), Value::Float(3.5));
    ///
    /// let code = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(1), &Value::Char('a'), 1);
    /// assert_eq!(code.unwrap(), Value::Integer(98));
    ///
    /// let mismatch = Evaluator::eval_binary(BinaryOperator::Add, &Value::Bool(true), &Value::Integer(1), 1);
    /// assert!(mismatch.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use Value::{Bool, Char, Float, Integer, String, Type};

        if op == BinaryOperator::Is {
            return Self::eval_type_test(left, right, line);
        }

        let result = match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, line)?,
            (Float(a), Float(b)) => Self::eval_float_op(op, *a, *b),
            (Integer(a), Float(b)) => Self::eval_float_op(op, i32_to_f32(*a), *b),
            (Float(a), Integer(b)) => Self::eval_float_op(op, *a, i32_to_f32(*b)),
            (Integer(a), Char(c)) => Self::eval_integer_op(op, *a, char_to_i32(*c), line)?,
            (Char(c), Integer(b)) => Self::eval_integer_op(op, char_to_i32(*c), *b, line)?,
            (Bool(a), Bool(b)) => Self::eval_logic(op, *a, *b),
            (Char(a), Char(b)) => Self::eval_char_op(op, *a, *b),
            (String(a), String(b)) => Self::eval_string_op(op, a, b),
            (Type(a), Type(b)) => Self::eval_type_equality(op, *a, *b),
            _ => None,
        };

        result.ok_or_else(|| type_mismatch(op, left, right, line))
    }
}
