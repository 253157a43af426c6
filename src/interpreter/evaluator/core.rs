use tracing::trace;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Call depth allowed when no other limit is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

/// Expression nesting allowed when no other limit is configured.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Settings that control execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How many calls may be active at once before execution fails with
    /// `RuntimeError::CallDepthExceeded`.
    pub max_call_depth:    usize,
    /// How many expressions may be under evaluation at once, counted across
    /// calls, before execution fails with `RuntimeError::NestingTooDeep`.
    pub max_nesting_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH, }
    }
}

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement. Carries the value of the
    /// statement, if it had one, or `null`.
    Normal(Value),
    /// A `return` was executed; enclosing statements stop until the call (or
    /// the program) ends.
    Return(Value),
}

impl Flow {
    /// The value carried by either variant.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Normal(value) | Self::Return(value) => value,
        }
    }
}

/// Walks the syntax tree against an [`Environment`].
///
/// ## Usage
///
/// An `Evaluator` borrows the environment for as long as it runs, so
/// declarations made by one program remain visible to the next program run
/// against the same environment. Statement execution lives in the `statement`
/// module, operators in `unary` and `binary`, and calls in `function`.
pub struct Evaluator<'env> {
    pub(crate) env:     &'env mut Environment,
    pub(crate) options: Options,
    /// Number of calls currently active.
    pub(crate) depth:   usize,
    /// Number of expressions currently under evaluation.
    nesting:            usize,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over `env`.
    pub fn new(env: &'env mut Environment, options: Options) -> Self {
        Self { env,
               options,
               depth: 0,
               nesting: 0 }
    }

    /// Executes a whole program in the environment's current frame.
    ///
    /// A top-level `return` stops the program early.
    ///
    /// # Returns
    /// The value of the last statement executed, the value of a top-level
    /// `return`, or `null` for an empty program.
    pub fn execute(&mut self, program: &Program) -> EvalResult<Value> {
        Ok(self.exec_sequence(&program.statements)?.into_value())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right, and both operands of a binary operator
    /// are evaluated before it runs, so `and` and `or` never short-circuit.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than `Options::max_nesting_depth`
    /// expressions are under evaluation, besides any error of the expression
    /// itself.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        if self.nesting >= self.options.max_nesting_depth {
            return Err(RuntimeError::NestingTooDeep { limit: self.options.max_nesting_depth,
                                                      line:  expr.line(), });
        }
        self.nesting += 1;
        let result = self.eval_expr(expr);
        self.nesting -= 1;
        result
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line),
            Expr::UnaryOp { op, operand, line } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Assignment { name, value, line } => self.eval_assignment(name, value, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                             line })
    }

    fn eval_assignment(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(value)?;
        trace!(name, %value, line, "assign");
        if !self.env.assign(name, value.clone()) {
            return Err(RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                         line });
        }
        Ok(value)
    }
}
