use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    position::Span,
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// Logical operators are routed first because they must not evaluate the
    /// right operand eagerly; everything else evaluates both operands left to
    /// right.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         op: BinaryOperator,
                                                         left: &Expr,
                                                         right: &Expr,
                                                         span: Span)
                                                         -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logical(op, left, right);
        }

        let left = self.evaluate_expression(left)?;
        let right = self.evaluate_expression(right)?;

        match op {
            BinaryOperator::Add => add(left, right, span),
            BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => arithmetic(op, &left, &right, span),
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual => Ok(compare(op, &left, &right)),
            BinaryOperator::And | BinaryOperator::Or => unreachable!(),
        }
    }

    /// `et` and `ou` short-circuit: the right operand only runs when the left
    /// has not already decided the result.
    fn eval_logical(&mut self,
                    op: BinaryOperator,
                    left: &Expr,
                    right: &Expr)
                    -> EvalResult<Value> {
        let left = self.evaluate_expression(left)?.is_truthy();

        match op {
            BinaryOperator::And if !left => Ok(Value::Bool(false)),
            BinaryOperator::Or if left => Ok(Value::Bool(true)),
            _ => Ok(Value::Bool(self.evaluate_expression(right)?.is_truthy())),
        }
    }
}

/// Addition, doubling as concatenation when either operand is a string.
fn add(left: Value, right: Value, span: Span) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (left, right) if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) => {
            Ok(Value::from(format!("{left}{right}")))
        },
        _ => Err(RuntimeError::NonNumericOperands { span }),
    }
}

/// The remaining arithmetic operators, numbers only.
///
/// Division and modulus follow IEEE 754; division by zero is not guarded.
fn arithmetic(op: BinaryOperator, left: &Value, right: &Value, span: Span) -> EvalResult<Value> {
    let (Value::Number(l), Value::Number(r)) = (left, right) else {
        if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
            return Err(RuntimeError::StringOperator { span });
        }
        return Err(RuntimeError::NonNumericOperands { span });
    };

    let result = match op {
        BinaryOperator::Sub => l - r,
        BinaryOperator::Mul => l * r,
        BinaryOperator::Div => l / r,
        BinaryOperator::Mod => l % r,
        _ => unreachable!(),
    };
    Ok(Value::Number(result))
}

/// Ordering comparisons.
///
/// Numbers compare numerically, strings lexicographically; any other pairing
/// coerces both sides to booleans first.
fn compare(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let holds = match (left, right) {
        (Value::Number(l), Value::Number(r)) => numeric_holds(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => ordering_holds(op, l.cmp(r)),
        _ => ordering_holds(op, left.is_truthy().cmp(&right.is_truthy())),
    };
    Value::Bool(holds)
}

fn numeric_holds(op: BinaryOperator, left: f64, right: f64) -> bool {
    match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::GreaterEqual => left >= right,
        _ => unreachable!(),
    }
}

fn ordering_holds(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        _ => unreachable!(),
    }
}
