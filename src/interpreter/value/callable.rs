use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            environment::Environment,
        },
        value::core::Value,
    },
    position::Span,
};

/// Something a program can call.
///
/// Implemented by user-defined closures and by host builtins. Callables are
/// held behind `Rc<dyn Callable>` inside [`Value::Function`], so two
/// references to the same function compare equal by identity.
pub trait Callable {
    /// The name the callable displays with.
    fn name(&self) -> &str;

    /// How many arguments the callable takes.
    fn arity(&self) -> usize;

    /// Invokes the callable with already-evaluated arguments.
    ///
    /// The caller has checked the argument count against [`Callable::arity`]
    /// before invoking.
    ///
    /// # Errors
    /// Returns a `RuntimeError` raised while running the callable's body.
    fn call(&self,
            interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            span: Span)
            -> EvalResult<Value>;
}

/// A user-defined function, closing over the frame it was defined in.
///
/// The body is shared with the AST node that produced the closure, so
/// re-evaluating a function literal inside a loop is cheap.
pub struct Closure {
    name:    String,
    params:  Vec<String>,
    body:    Rc<[Statement]>,
    defined: Rc<RefCell<Environment>>,
}

impl Closure {
    /// Creates a closure over `defined`, the frame current at its definition.
    #[must_use]
    pub const fn new(name: String,
                     params: Vec<String>,
                     body: Rc<[Statement]>,
                     defined: Rc<RefCell<Environment>>)
                     -> Self {
        Self { name,
               params,
               body,
               defined }
    }
}

impl Callable for Closure {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.params.len()
    }

    /// Runs the body in a fresh frame chained to the captured frame, not the
    /// caller's.
    ///
    /// A `retour` signal unwraps to its payload here; a body falling off the
    /// end (or a stray loop signal) yields `rien`.
    fn call(&self,
            interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            _span: Span)
            -> EvalResult<Value> {
        let frame = Environment::child_of(&self.defined);
        {
            let mut bindings = frame.borrow_mut();
            for (param, argument) in self.params.iter().zip(arguments) {
                bindings.define(param.clone(), argument);
            }
        }

        match interpreter.run_block(&self.body, frame)? {
            Flow::Return(value) => Ok(value),
            _ => Ok(Value::Null),
        }
    }
}

type BuiltinFn = fn(&[Value], Span) -> EvalResult<Value>;

/// A host function exposed to programs.
#[derive(Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

impl Callable for Builtin {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self,
            _interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            span: Span)
            -> EvalResult<Value> {
        (self.func)(&arguments, span)
    }
}

macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "taille" => { arity: 1, func: taille },
}

/// The builtins seeded into every interpreter's global frame.
#[must_use]
pub fn builtins() -> &'static [Builtin] {
    BUILTIN_TABLE
}

/// Measures a value: character count of a string, element count of an array,
/// `0` for everything else.
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::unnecessary_wraps)]
fn taille(args: &[Value], _span: Span) -> EvalResult<Value> {
    let length = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::Array(elements) => elements.borrow().len(),
        _ => 0,
    };
    Ok(Value::Number(length as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(value: Value) -> Value {
        taille(&[value], Span::empty(crate::position::Position::start())).unwrap()
    }

    #[test]
    fn taille_counts_characters_not_bytes() {
        assert_eq!(measure(Value::from("été")), Value::Number(3.0));
    }

    #[test]
    fn taille_counts_array_elements() {
        let array = Value::from(vec![Value::Number(1.0), Value::Null]);
        assert_eq!(measure(array), Value::Number(2.0));
    }

    #[test]
    fn taille_is_zero_for_scalars() {
        assert_eq!(measure(Value::Number(12.0)), Value::Number(0.0));
        assert_eq!(measure(Value::Null), Value::Number(0.0));
    }
}
