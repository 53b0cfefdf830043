use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            environment::Environment,
        },
        value::core::Value,
    },
    position::Span,
};

impl Interpreter {
    /// Evaluates a conditional.
    ///
    /// The condition's truthiness selects a branch, which runs in a fresh
    /// child frame; no branch taken yields `rien`.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     condition: &Expr,
                                                     then_branch: &[Statement],
                                                     else_branch: Option<&[Statement]>)
                                                     -> EvalResult<Flow> {
        let branch = if self.evaluate_expression(condition)?.is_truthy() {
            Some(then_branch)
        } else {
            else_branch
        };

        match branch {
            Some(statements) => {
                let frame = Environment::child_of(&self.env);
                self.run_block(statements, frame)
            },
            None => Ok(Flow::Normal(Value::Null)),
        }
    }

    /// Evaluates a `tantque` loop.
    ///
    /// One child frame lives for the whole loop and the body runs directly in
    /// it, so a body declaration persists across iterations and collides with
    /// itself on the second pass. `arreter` stops the loop and is absorbed
    /// here, `continuer` re-tests the condition, `retour` propagates.
    pub(in crate::interpreter::evaluator) fn eval_while(&mut self,
                                                        condition: &Expr,
                                                        body: &[Statement])
                                                        -> EvalResult<Flow> {
        let frame = Environment::child_of(&self.env);
        let previous = std::mem::replace(&mut self.env, frame);
        let result = self.while_loop(condition, body);
        self.env = previous;
        result
    }

    fn while_loop(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.evaluate_expression(condition)?.is_truthy() {
            match self.run_block(body, Rc::clone(&self.env))? {
                Flow::Normal(_) | Flow::Continue => {},
                Flow::Break => break,
                signal @ Flow::Return(_) => return Ok(signal),
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    /// Evaluates a desugared `pour` loop.
    ///
    /// The loop variable is rebound when an enclosing frame already declares
    /// it, and lives in the loop frame otherwise. The body shares that single
    /// frame across iterations. The implicit step assignment runs after each
    /// completed or continued iteration, not after `arreter`.
    pub(in crate::interpreter::evaluator) fn eval_for(&mut self,
                                                      variable: &str,
                                                      init: &Expr,
                                                      condition: &Expr,
                                                      step: &Expr,
                                                      body: &[Statement],
                                                      span: Span)
                                                      -> EvalResult<Flow> {
        let frame = Environment::child_of(&self.env);
        let previous = std::mem::replace(&mut self.env, frame);
        let result = self.for_loop(variable, init, condition, step, body, span);
        self.env = previous;
        result
    }

    fn for_loop(&mut self,
                variable: &str,
                init: &Expr,
                condition: &Expr,
                step: &Expr,
                body: &[Statement],
                span: Span)
                -> EvalResult<Flow> {
        let initial = self.evaluate_expression(init)?;
        match Environment::resolve(&self.env, variable) {
            Some(_) => Environment::assign(&self.env, variable, initial, span)?,
            None => self.env.borrow_mut().define(variable.to_string(), initial),
        }

        while self.evaluate_expression(condition)?.is_truthy() {
            match self.run_block(body, Rc::clone(&self.env))? {
                Flow::Normal(_) | Flow::Continue => {},
                Flow::Break => break,
                signal @ Flow::Return(_) => return Ok(signal),
            }
            self.evaluate_expression(step)?;
        }
        Ok(Flow::Normal(Value::Null))
    }
}
