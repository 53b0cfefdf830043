use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::environment::Environment,
        io::{InputSource, Output, StdinInput},
        value::{
            callable::{Callable, builtins},
            core::Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What evaluating a statement does to control flow.
///
/// The signal variants are internal: every caller re-propagates them until
/// the owning loop or call boundary absorbs them, so a program never observes
/// one directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Run the next statement; carries the statement's value.
    Normal(Value),
    /// Unwind to the nearest enclosing loop and stop it.
    Break,
    /// Unwind to the nearest enclosing loop and re-test its condition.
    Continue,
    /// Unwind to the call boundary with the returned value.
    Return(Value),
}

/// Executes parsed programs.
///
/// The interpreter owns the environment chain, the output sinks, the input
/// source, and the counter naming anonymous functions. Nothing is shared
/// between instances, so independent runs are fully isolated.
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) env: Rc<RefCell<Environment>>,
    out: Output,
    err: Output,
    input: Box<dyn InputSource>,
    pub(in crate::interpreter::evaluator) anon_counter: usize,
}

impl Interpreter {
    /// Creates an interpreter reading `lire` lines from standard input.
    #[must_use]
    pub fn new() -> Self {
        Self::with_input(Box::new(StdinInput))
    }

    /// Creates an interpreter reading `lire` lines from `input`.
    ///
    /// The global frame is seeded with the builtin functions.
    #[must_use]
    pub fn with_input(input: Box<dyn InputSource>) -> Self {
        let globals = Environment::new();
        {
            let mut bindings = globals.borrow_mut();
            for builtin in builtins() {
                bindings.define(builtin.name().to_string(), Value::Function(Rc::new(*builtin)));
            }
        }

        Self { env: globals,
               out: Output::default(),
               err: Output::default(),
               input,
               anon_counter: 0 }
    }

    /// Runs a whole program in the interpreter's global frame.
    ///
    /// Returns the value of the last evaluated statement. A signal escaping
    /// to the top level stops the program: `retour` yields its payload,
    /// `arreter`/`continuer` yield `rien`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` the program raises.
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in statements {
            match self.evaluate_statement(statement)? {
                Flow::Normal(value) => last = value,
                Flow::Return(value) => return Ok(value),
                Flow::Break | Flow::Continue => return Ok(Value::Null),
            }
        }
        Ok(last)
    }

    /// Runs `statements` with `frame` installed as the current frame.
    ///
    /// The previous frame is restored on every exit path, signals and errors
    /// included.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by a statement.
    pub fn run_block(&mut self,
                     statements: &[Statement],
                     frame: Rc<RefCell<Environment>>)
                     -> EvalResult<Flow> {
        let previous = std::mem::replace(&mut self.env, frame);
        let result = self.run_statements(statements);
        self.env = previous;
        result
    }

    fn run_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            match self.evaluate_statement(statement)? {
                Flow::Normal(_) => {},
                signal => return Ok(signal),
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    fn evaluate_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::VariableDeclaration { name, value, span } => {
                let value = match value {
                    Some(initializer) => self.evaluate_expression(initializer)?,
                    None => Value::Null,
                };
                self.env.borrow_mut().declare(name.clone(), value, *span)?;
                Ok(Flow::Normal(Value::Null))
            },
            Statement::Print { value, .. } => {
                let rendered = self.evaluate_expression(value)?.to_string();
                self.out.print(rendered);
                Ok(Flow::Normal(Value::Null))
            },
            Statement::If { condition, then_branch, else_branch, .. } => {
                self.eval_if(condition, then_branch, else_branch.as_deref())
            },
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::For { variable, init, condition, step, body, span } => {
                self.eval_for(variable, init, condition, step, body, *span)
            },
            Statement::Return { value, .. } => {
                Ok(Flow::Return(self.evaluate_expression(value)?))
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Expression { expr, .. } => {
                Ok(Flow::Normal(self.evaluate_expression(expr)?))
            },
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` describing the first failure.
    pub fn evaluate_expression(&mut self, expression: &Expr) -> EvalResult<Value> {
        match expression {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Null { .. } => Ok(Value::Null),
            Expr::Identifier { name, span } => Environment::lookup(&self.env, name, *span),
            Expr::Read { message, .. } => {
                let prompt = self.evaluate_expression(message)?.to_string();
                Ok(self.input.read_line(&prompt).map_or(Value::Null, Value::from))
            },
            Expr::Array { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.evaluate_expression(element)?);
                }
                Ok(Value::from(values))
            },
            Expr::Function { name, params, body, span } => {
                self.eval_function(name.as_deref(), params, body, *span)
            },
            Expr::Unary { op, operand, span } => self.eval_unary(*op, operand, *span),
            Expr::Binary { op, left, right, span } => self.eval_binary(*op, left, right, *span),
            Expr::Assignment { target, value, span } => {
                self.eval_assignment(target, value, *span)
            },
            Expr::Call { callee, arguments, span } => self.eval_call(callee, arguments, *span),
            Expr::Member { object, index, span } => {
                self.eval_member(object, index.as_deref(), *span)
            },
        }
    }

    /// The lines printed by `ecrire` so far, in order.
    #[must_use]
    pub fn output(&self) -> &Output {
        &self.out
    }

    /// The rendered diagnostics reported so far.
    #[must_use]
    pub fn error_output(&self) -> &Output {
        &self.err
    }

    /// Appends a rendered diagnostic to the error sink.
    pub fn report(&mut self, diagnostic: impl Into<String>) {
        self.err.print(diagnostic);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
