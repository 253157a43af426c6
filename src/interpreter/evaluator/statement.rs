use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef, MatchCase, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::{
            core::Value,
            function::{Function, UserFunction},
        },
    },
};

impl Evaluator<'_> {
    /// Executes a single statement.
    ///
    /// # Returns
    /// `Flow::Return` if a `return` ran inside the statement, otherwise
    /// `Flow::Normal` with the statement's value: the value of an expression
    /// statement, the bound value of a declaration, or `null`.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        trace!(line = statement.line(), "statement");
        match statement {
            Statement::Expression { expr, .. } => Ok(Flow::Normal(self.eval(expr)?)),
            Statement::VarDeclare { name, init, line } => {
                self.exec_var_declare(name, init.as_ref(), *line)
            },
            Statement::Block { statements, .. } => self.exec_block(statements),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Ok(Flow::Normal(Value::Null))
                }
            },
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::Match { subject,
                               cases,
                               default,
                               .. } => self.exec_match(subject, cases, default.as_deref()),
            Statement::FunctionDeclare(def) => self.exec_function_declare(def),
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes statements in a fresh child frame, releasing the frame
    /// afterwards whether or not execution succeeded.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.env.enter_scope();
        let result = self.exec_sequence(statements);
        self.env.exit_scope();
        result
    }

    /// Executes statements in order in the current frame, stopping at the
    /// first `return`.
    pub(crate) fn exec_sequence(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        let mut last = Value::Null;
        for statement in statements {
            match self.exec_statement(statement)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(last))
    }

    fn exec_var_declare(&mut self,
                        name: &str,
                        init: Option<&Expr>,
                        line: usize)
                        -> EvalResult<Flow> {
        let value = match init {
            Some(expr) => self.eval(expr)?,
            None => Value::Null,
        };
        if !self.env.define(name, value.clone()) {
            return Err(RuntimeError::RedeclaredIdentifier { name: name.to_string(),
                                                            line });
        }
        trace!(name, %value, line, "declare");
        Ok(Flow::Normal(value))
    }

    fn exec_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() {
            if let flow @ Flow::Return(_) = self.exec_statement(body)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    /// Runs the first case whose kind equals the subject's kind, then the
    /// default case if none matched.
    fn exec_match(&mut self,
                  subject: &Expr,
                  cases: &[MatchCase],
                  default: Option<&Statement>)
                  -> EvalResult<Flow> {
        let kind = self.eval(subject)?.kind();
        match cases.iter().find(|case| case.kind == kind) {
            Some(case) => self.exec_statement(&case.body),
            None => match default {
                Some(body) => self.exec_statement(body),
                None => Ok(Flow::Normal(Value::Null)),
            },
        }
    }

    fn exec_function_declare(&mut self, def: &FunctionDef) -> EvalResult<Flow> {
        let function = Value::from(Function::User(UserFunction::from(def)));
        if !self.env.define(&def.name, function.clone()) {
            return Err(RuntimeError::RedeclaredIdentifier { name: def.name.clone(),
                                                            line: def.line });
        }
        debug!(name = %def.name, params = def.params.len(), line = def.line, "declared function");
        Ok(Flow::Normal(function))
    }
}
