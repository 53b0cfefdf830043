use crate::position::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token other than the expected one.
    UnexpectedToken {
        /// Human-readable description of what was expected, e.g. `'fin'`.
        expected: String,
        /// The lexeme actually found.
        found:    String,
        /// The source region of the offending token.
        span:     Span,
    },
    /// Reached the end of input while more tokens were required.
    UnexpectedEndOfInput {
        /// Human-readable description of what was expected.
        expected: String,
        /// The zero-width span at end of input.
        span:     Span,
    },
    /// Found a token where an expression was required.
    ExpectedExpression {
        /// The lexeme actually found.
        found: String,
        /// The source region of the offending token.
        span:  Span,
    },
    /// A function declared more parameters than the language allows.
    TooManyParameters {
        /// The function's name, or `anonyme`.
        name: String,
        /// The source region from the `fonction` keyword to the overflow.
        span: Span,
    },
}

impl ParseError {
    /// The source region the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::ExpectedExpression { span, .. }
            | Self::TooManyParameters { span, .. } => *span,
        }
    }

    /// Details for the diagnostic headline.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                format!("'{found}' trouvé, {expected} attendu")
            },
            Self::UnexpectedEndOfInput { expected, .. } => {
                format!("Fin de fichier atteinte, {expected} attendu")
            },
            Self::ExpectedExpression { found, .. } => {
                format!("'{found}' non attendu, expression attendue")
            },
            Self::TooManyParameters { name, .. } => {
                format!("La fonction '{name}' ne peut pas avoir plus de 48 paramètres")
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.span().start.line;
        write!(f, "Syntaxe non valide, ligne {line}: {}", self.details())
    }
}

impl std::error::Error for ParseError {}
