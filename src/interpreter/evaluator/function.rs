use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::{EvalResult, Interpreter}, environment::Environment},
        value::{callable::Closure, core::Value},
    },
    position::Span,
};

impl Interpreter {
    /// Evaluates a function literal into a closure over the current frame.
    ///
    /// A named function is also bound under its name, through assignment
    /// semantics so a later definition replaces an earlier one. Anonymous
    /// functions get a generated name used only for rendering.
    pub(in crate::interpreter::evaluator) fn eval_function(&mut self,
                                                           name: Option<&str>,
                                                           params: &[String],
                                                           body: &Rc<[Statement]>,
                                                           span: Span)
                                                           -> EvalResult<Value> {
        let bound = match name {
            Some(name) => name.to_string(),
            None => self.next_anonymous_name(),
        };

        let closure = Closure::new(bound.clone(),
                                   params.to_vec(),
                                   Rc::clone(body),
                                   Rc::clone(&self.env));
        let value = Value::Function(Rc::new(closure));

        if name.is_some() {
            if Environment::resolve(&self.env, &bound).is_none() {
                self.env.borrow_mut().define(bound.clone(), Value::Null);
            }
            Environment::assign(&self.env, &bound, value.clone(), span)?;
        }
        Ok(value)
    }

    /// Evaluates a call.
    ///
    /// The argument count is checked against the arity before any argument
    /// runs, so a mis-arity call has no side effects.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       arguments: &[Expr],
                                                       span: Span)
                                                       -> EvalResult<Value> {
        let Value::Function(callable) = self.evaluate_expression(callee)? else {
            return Err(RuntimeError::NotCallable { span });
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError::ArityMismatch { expected: callable.arity(),
                                                     found: arguments.len(),
                                                     span });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate_expression(argument)?);
        }
        callable.call(self, values, span)
    }

    fn next_anonymous_name(&mut self) -> String {
        self.anon_counter += 1;
        format!("anon_{}", self.anon_counter)
    }
}
