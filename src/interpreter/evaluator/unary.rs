use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    position::Span,
};

impl Interpreter {
    /// Evaluates a prefix operation.
    ///
    /// Negation is defined on numbers only; `non` accepts any value and
    /// inverts its truthiness.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: UnaryOperator,
                                                        operand: &Expr,
                                                        span: Span)
                                                        -> EvalResult<Value> {
        let value = self.evaluate_expression(operand)?;

        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::NonNumericNegation { span }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
