use std::{cell::RefCell, rc::Rc};

use crate::interpreter::value::callable::Callable;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Clone)]
pub enum Value {
    /// The absence of a value, `rien`.
    Null,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value, `vrai` or `faux`.
    Bool(bool),
    /// An immutable string of characters.
    Str(Rc<str>),
    /// An array of values.
    ///
    /// Arrays are shared by reference: cloning the value clones the handle,
    /// and writes through one handle are visible through all of them.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A callable value, a user-defined closure or a builtin.
    Function(Rc<dyn Callable>),
}

impl Value {
    /// Whether the value counts as true in a condition.
    ///
    /// `rien`, `faux`, `0`, and the empty string are falsy; everything else,
    /// arrays and functions included, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
            Self::Array(_) | Self::Function(_) => true,
        }
    }
}

impl PartialEq for Value {
    /// Values of like type compare by content; arrays and functions compare
    /// by identity; differing types are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => Rc::ptr_eq(l, r),
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v.as_str()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way `ecrire` prints it.
    ///
    /// Integral numbers drop their fractional part, arrays render their
    /// elements recursively, and functions render as `<fonction @name>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "rien"),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{n:.0}")
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Bool(b) => write!(f, "{}", if *b { "vrai" } else { "faux" }),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(callable) => write!(f, "<fonction @{}>", callable.name()),
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::Array(a) => write!(f, "Array({:?})", a.borrow()),
            Self::Function(callable) => write!(f, "Function(@{})", callable.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_decimals() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
        assert_eq!(Value::Number(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn arrays_render_recursively() {
        let inner = Value::from(vec![Value::Number(2.0), Value::Number(3.0)]);
        let outer = Value::from(vec![Value::Number(1.0), inner, Value::from("x")]);

        assert_eq!(outer.to_string(), "[1, [2, 3], x]");
    }

    #[test]
    fn arrays_compare_by_identity() {
        let shared = Value::from(vec![Value::Number(1.0)]);
        let alias = shared.clone();
        let lookalike = Value::from(vec![Value::Number(1.0)]);

        assert_eq!(shared, alias);
        assert_ne!(shared, lookalike);
    }

    #[test]
    fn truthiness_follows_the_falsy_set() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("faux").is_truthy());
        assert!(Value::from(Vec::new()).is_truthy());
    }
}
