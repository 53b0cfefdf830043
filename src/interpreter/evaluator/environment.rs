use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    position::Span,
};

/// One scope frame: a name→value map with an optional parent link.
///
/// Frames are shared through `Rc<RefCell<_>>` because a closure keeps its
/// defining frame alive after the block that created it exits. The chain
/// walking helpers are associated functions taking the `Rc` handle, since
/// they may need to hand out a frame from the middle of the chain.
#[derive(Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent:   Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty root frame.
    #[must_use]
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty frame whose lookups continue in `parent`.
    #[must_use]
    pub fn child_of(parent: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { bindings: HashMap::new(),
                                    parent:   Some(Rc::clone(parent)), }))
    }

    /// Declares `name` in this frame.
    ///
    /// # Errors
    /// Errors if this frame already declares `name`. Shadowing a parent
    /// frame's binding is fine.
    pub fn declare(&mut self, name: String, value: Value, span: Span) -> EvalResult<()> {
        if self.bindings.contains_key(&name) {
            return Err(RuntimeError::AlreadyDeclaredVariable { name, span });
        }
        self.bindings.insert(name, value);
        Ok(())
    }

    /// Binds `name` in this frame unconditionally.
    ///
    /// Used for builtins, call parameters, and the `pour` loop variable,
    /// which may all overwrite silently.
    pub fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Reads `name`, searching `frame` and then its ancestors.
    ///
    /// # Errors
    /// Errors if no frame in the chain declares `name`.
    pub fn lookup(frame: &Rc<RefCell<Self>>, name: &str, span: Span) -> EvalResult<Value> {
        Self::resolve(frame, name).and_then(|owner| owner.borrow().bindings.get(name).cloned())
                                  .ok_or_else(|| RuntimeError::UndeclaredVariable {
                                      name: name.to_string(),
                                      span,
                                  })
    }

    /// Rebinds `name` in the frame that declares it.
    ///
    /// # Errors
    /// Errors if no frame in the chain declares `name`.
    pub fn assign(frame: &Rc<RefCell<Self>>,
                  name: &str,
                  value: Value,
                  span: Span)
                  -> EvalResult<()> {
        match Self::resolve(frame, name) {
            Some(owner) => {
                owner.borrow_mut().bindings.insert(name.to_string(), value);
                Ok(())
            },
            None => Err(RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                           span }),
        }
    }

    /// Finds the frame declaring `name`, walking the parent chain.
    #[must_use]
    pub fn resolve(frame: &Rc<RefCell<Self>>, name: &str) -> Option<Rc<RefCell<Self>>> {
        let mut current = Rc::clone(frame);
        loop {
            if current.borrow().bindings.contains_key(name) {
                return Some(current);
            }
            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn at() -> Span {
        Span::empty(Position::start())
    }

    #[test]
    fn redeclaring_in_the_same_frame_fails() {
        let frame = Environment::new();
        frame.borrow_mut().declare("x".to_string(), Value::Number(1.0), at()).unwrap();

        let error = frame.borrow_mut().declare("x".to_string(), Value::Number(2.0), at());
        assert!(matches!(error, Err(RuntimeError::AlreadyDeclaredVariable { .. })));
    }

    #[test]
    fn shadowing_masks_then_restores_the_outer_binding() {
        let outer = Environment::new();
        outer.borrow_mut().declare("x".to_string(), Value::Number(1.0), at()).unwrap();

        let inner = Environment::child_of(&outer);
        inner.borrow_mut().declare("x".to_string(), Value::Number(2.0), at()).unwrap();

        assert_eq!(Environment::lookup(&inner, "x", at()).unwrap(), Value::Number(2.0));
        assert_eq!(Environment::lookup(&outer, "x", at()).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assignment_mutates_the_declaring_frame() {
        let outer = Environment::new();
        outer.borrow_mut().declare("x".to_string(), Value::Number(1.0), at()).unwrap();
        let inner = Environment::child_of(&outer);

        Environment::assign(&inner, "x", Value::Number(5.0), at()).unwrap();

        assert_eq!(Environment::lookup(&outer, "x", at()).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn missing_names_error_on_lookup_and_assign() {
        let frame = Environment::new();

        assert!(matches!(Environment::lookup(&frame, "y", at()),
                         Err(RuntimeError::UndeclaredVariable { .. })));
        assert!(matches!(Environment::assign(&frame, "y", Value::Null, at()),
                         Err(RuntimeError::UndeclaredVariable { .. })));
        assert!(Environment::resolve(&frame, "y").is_none());
    }
}
