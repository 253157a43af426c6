use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, kind::ValueKind},
    },
};

impl Evaluator<'_> {
    /// Applies a comparison operator to two ordered values.
    ///
    /// # Returns
    /// `None` if `op` is not one of `== != < <= > >=`.
    pub fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, a: &T, b: &T) -> Option<bool> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => a == b,
            NotEqual => a != b,
            Less => a < b,
            LessEqual => a <= b,
            Greater => a > b,
            GreaterEqual => a >= b,
            _ => return None,
        };
        Some(result)
    }

    /// `+` joins two characters into a string; comparisons use code points.
    pub(crate) fn eval_char_op(op: BinaryOperator, a: char, b: char) -> Option<Value> {
        if op == BinaryOperator::Add {
            return Some(Value::String(format!("{a}{b}")));
        }
        Self::compare(op, &a, &b).map(Value::Bool)
    }

    /// `+` concatenates; comparisons are lexicographic.
    pub(crate) fn eval_string_op(op: BinaryOperator, a: &str, b: &str) -> Option<Value> {
        if op == BinaryOperator::Add {
            return Some(Value::String(format!("{a}{b}")));
        }
        Self::compare(op, a, b).map(Value::Bool)
    }

    /// Type tags only support `==` and `!=`.
    pub(crate) fn eval_type_equality(op: BinaryOperator,
                                     a: ValueKind,
                                     b: ValueKind)
                                     -> Option<Value> {
        match op {
            BinaryOperator::Equal => Some(Value::Bool(a == b)),
            BinaryOperator::NotEqual => Some(Value::Bool(a != b)),
            _ => None,
        }
    }

    /// Evaluates `value is TYPE`.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` if the right operand is not a type tag.
    pub(crate) fn eval_type_test(value: &Value, tag: &Value, line: usize) -> EvalResult<Value> {
        match tag {
            Value::Type(kind) => Ok(Value::Bool(value.kind() == *kind)),
            other => Err(RuntimeError::TypeMismatch { details: format!("'is' expects a type on \
                                                                        the right, found {} {}",
                                                                       other.kind(),
                                                                       other.repr()),
                                                      line }),
        }
    }
}
