use crate::position::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source region where the name was used.
        span: Span,
    },
    /// Tried to declare a variable twice in the same scope.
    AlreadyDeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source region of the declaration.
        span: Span,
    },
    /// Called a value that is not a function.
    NotCallable {
        /// The source region of the call.
        span: Span,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// How many arguments the function takes.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
        /// The source region of the call.
        span:     Span,
    },
    /// Tried to index a value that is not an array.
    NotAnArray {
        /// The source region of the indexing expression.
        span: Span,
    },
    /// Tried to index-assign into a value that is not an array.
    NotAnArrayTarget {
        /// The source region of the assignment.
        span: Span,
    },
    /// Read an array with the empty-bracket form, which only assignment
    /// accepts.
    MissingIndex {
        /// The source region of the indexing expression.
        span: Span,
    },
    /// Used a non-numeric value as an array index.
    NonNumericIndex {
        /// The source region of the indexing expression.
        span: Span,
    },
    /// Tried to access an array element outside the valid range.
    IndexOutOfBounds {
        /// The length of the array.
        len:  usize,
        /// The source region of the indexing expression.
        span: Span,
    },
    /// Used a string with an arithmetic operator other than `+`.
    StringOperator {
        /// The source region of the operation.
        span: Span,
    },
    /// Used a non-numeric operand in an arithmetic operation.
    NonNumericOperands {
        /// The source region of the operation.
        span: Span,
    },
    /// Negated a value that is not a number.
    NonNumericNegation {
        /// The source region of the operation.
        span: Span,
    },
    /// Assigned to an expression that is neither a variable nor an array
    /// slot.
    InvalidAssignmentTarget {
        /// The source region of the assignment.
        span: Span,
    },
}

impl RuntimeError {
    /// The source region the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UndeclaredVariable { span, .. }
            | Self::AlreadyDeclaredVariable { span, .. }
            | Self::NotCallable { span }
            | Self::ArityMismatch { span, .. }
            | Self::NotAnArray { span }
            | Self::NotAnArrayTarget { span }
            | Self::MissingIndex { span }
            | Self::NonNumericIndex { span }
            | Self::IndexOutOfBounds { span, .. }
            | Self::StringOperator { span }
            | Self::NonNumericOperands { span }
            | Self::NonNumericNegation { span }
            | Self::InvalidAssignmentTarget { span } => *span,
        }
    }

    /// Details for the diagnostic headline.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::UndeclaredVariable { name, .. } => {
                format!("Variable '{name}' non déclarée")
            },
            Self::AlreadyDeclaredVariable { name, .. } => {
                format!("Variable '{name}' déjà déclarée")
            },
            Self::NotCallable { .. } => {
                "Seulement les fonctions peuvent être appelées".to_string()
            },
            Self::ArityMismatch { expected, found, .. } => {
                format!("Le nombre d'arguments attendu est de {expected}, mais {found} ont été fournis")
            },
            Self::NotAnArray { .. } => {
                "Seulement les tableaux peuvent être indexés".to_string()
            },
            Self::NotAnArrayTarget { .. } => {
                "Seulement les tableaux peuvent être assignés".to_string()
            },
            Self::MissingIndex { .. } => "Les tableaux doivent être indexés".to_string(),
            Self::NonNumericIndex { .. } => {
                "Seulement les nombres peuvent être utilisés comme index".to_string()
            },
            Self::IndexOutOfBounds { len, .. } => {
                let max = *len as i64 - 1;
                format!("Index hors limite, l'index doit être compris entre 0 et {max}")
            },
            Self::StringOperator { .. } => {
                "Seulement l'opérateur '+' peut être utilisé avec des chaînes de caractères".to_string()
            },
            Self::NonNumericOperands { .. } => {
                "Seulement les nombres peuvent être utilisés dans des opérations arithmétiques".to_string()
            },
            Self::NonNumericNegation { .. } => {
                "Seulement les nombres peuvent être négatifs".to_string()
            },
            Self::InvalidAssignmentTarget { .. } => {
                "Impossible d'assigner une valeur à cette expression".to_string()
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.span().start.line;
        write!(f, "Erreur d'exécution, ligne {line}: {}", self.details())
    }
}

impl std::error::Error for RuntimeError {}
