use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::{EvalResult, Interpreter}, environment::Environment},
        value::core::Value,
    },
    position::Span,
};

impl Interpreter {
    /// Evaluates an assignment expression.
    ///
    /// The target must be an identifier or an element access; anything else
    /// is rejected. The assigned value is also the expression's value, which
    /// is what makes `a = b = c` chain.
    pub(in crate::interpreter::evaluator) fn eval_assignment(&mut self,
                                                             target: &Expr,
                                                             value: &Expr,
                                                             span: Span)
                                                             -> EvalResult<Value> {
        match target {
            Expr::Identifier { name, span: target_span } => {
                let value = self.evaluate_expression(value)?;
                Environment::assign(&self.env, name, value.clone(), *target_span)?;
                Ok(value)
            },
            Expr::Member { object, index, .. } => {
                self.assign_member(object, index.as_deref(), value, span)
            },
            _ => Err(RuntimeError::InvalidAssignmentTarget { span }),
        }
    }

    /// Reads an element out of an array.
    ///
    /// The bare-bracket form has no value to read, so it is only legal as an
    /// assignment target.
    pub(in crate::interpreter::evaluator) fn eval_member(&mut self,
                                                         object: &Expr,
                                                         index: Option<&Expr>,
                                                         span: Span)
                                                         -> EvalResult<Value> {
        let Value::Array(elements) = self.evaluate_expression(object)? else {
            return Err(RuntimeError::NotAnArray { span });
        };
        let Some(index) = index else {
            return Err(RuntimeError::MissingIndex { span });
        };

        let len = elements.borrow().len();
        let index = self.element_index(index, len, span)?;
        let element = elements.borrow()[index].clone();
        Ok(element)
    }

    fn assign_member(&mut self,
                     object: &Expr,
                     index: Option<&Expr>,
                     value: &Expr,
                     span: Span)
                     -> EvalResult<Value> {
        let Value::Array(elements) = self.evaluate_expression(object)? else {
            return Err(RuntimeError::NotAnArrayTarget { span });
        };

        match index {
            Some(index) => {
                let len = elements.borrow().len();
                let index = self.element_index(index, len, span)?;
                let value = self.evaluate_expression(value)?;
                elements.borrow_mut()[index] = value.clone();
                Ok(value)
            },
            None => {
                let value = self.evaluate_expression(value)?;
                elements.borrow_mut().push(value.clone());
                Ok(value)
            },
        }
    }

    /// Evaluates `index` down to a slot within `0..len`.
    ///
    /// The fractional part is truncated. The range check is written so that a
    /// NaN index fails it too.
    #[allow(clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss)]
    fn element_index(&mut self, index: &Expr, len: usize, span: Span) -> EvalResult<usize> {
        let Value::Number(number) = self.evaluate_expression(index)? else {
            return Err(RuntimeError::NonNumericIndex { span });
        };

        let slot = number.trunc();
        if !(slot >= 0.0 && slot < len as f64) {
            return Err(RuntimeError::IndexOutOfBounds { len, span });
        }
        Ok(slot as usize)
    }
}
