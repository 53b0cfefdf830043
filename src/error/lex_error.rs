use crate::position::Span;

/// Failure kind reported by the token recognizer, before positions are
/// resolved.
///
/// This is the error type the derived lexer produces; [`LexError`] is the
/// position-bearing form the rest of the pipeline sees. The default kind is
/// what an unmatched character maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character (or escape sequence) outside the language's alphabet.
    #[default]
    IllegalCharacter,
    /// A string literal reaching end of input before its closing quote.
    UnterminatedString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Encountered a character the language does not recognize.
    IllegalCharacter {
        /// The offending character or escape sequence.
        found: String,
        /// The source region of the offending text.
        span:  Span,
    },
    /// A string literal was never closed.
    UnterminatedString {
        /// The source region from the opening quote to end of input.
        span: Span,
    },
}

impl LexError {
    /// The source region the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::IllegalCharacter { span, .. } | Self::UnterminatedString { span } => *span,
        }
    }

    /// The diagnostic headline for this error family.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::IllegalCharacter { .. } => "Caractère non valide",
            Self::UnterminatedString { .. } => "Chaîne non terminée",
        }
    }

    /// Details for the diagnostic headline.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::IllegalCharacter { found, .. } => format!("'{found}'"),
            Self::UnterminatedString { .. } => "La chaîne n'est pas terminée".to_string(),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.span().start.line;
        write!(f, "{}, ligne {line}: {}", self.category(), self.details())
    }
}

impl std::error::Error for LexError {}
