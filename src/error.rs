use crate::position::Span;

/// Lexical errors.
///
/// Defines the error types raised while tokenizing source code: illegal
/// characters (including bad escape sequences and stray operator characters)
/// and unterminated string literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token stream: unexpected tokens, premature end of input, and the function
/// parameter cap.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undeclared
/// or redeclared variables, arity mismatches, bad operand types, indexing
/// failures, and invalid assignment targets.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error the interpreter pipeline can produce, from lexing through
/// evaluation.
///
/// Carries enough position information to render a source excerpt pointing
/// at the offending region.
#[derive(Debug)]
pub enum QlangError {
    /// The lexer rejected the source text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl QlangError {
    /// The source region the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span(),
            Self::Parse(e) => e.span(),
            Self::Runtime(e) => e.span(),
        }
    }

    /// The diagnostic category shown as the headline of a rendered report.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.category(),
            Self::Parse(_) => "Syntaxe non valide",
            Self::Runtime(_) => "Erreur d'exécution",
        }
    }

    /// Details for the headline, without position information.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Lex(e) => e.details(),
            Self::Parse(e) => e.details(),
            Self::Runtime(e) => e.details(),
        }
    }

    /// Renders a full diagnostic against the source the error came from.
    ///
    /// The report names the category and details, the covered region, and
    /// excerpts the offending source line with a caret underline:
    ///
    /// ```text
    /// Syntaxe non valide: 'fin' trouvé, 'alors' attendu
    /// Sur la ligne 1, colonne 9 à la ligne 1, colonne 12
    /// si vrai fin
    ///         ^^^
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        render_excerpt(self.category(), &self.details(), self.span(), source)
    }
}

impl std::fmt::Display for QlangError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QlangError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for QlangError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for QlangError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for QlangError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

/// Renders the two-part diagnostic used by every error family.
///
/// The excerpt shows the line containing the start of the span and underlines
/// the covered columns; an empty span (end of input) still gets a single
/// caret so the report always points somewhere.
fn render_excerpt(category: &str, details: &str, span: Span, source: &str) -> String {
    let line = source.lines()
                     .nth(span.start.line.saturating_sub(1))
                     .unwrap_or_default();

    let width = if span.end.line == span.start.line {
        span.end.column.saturating_sub(span.start.column).max(1)
    } else {
        line.chars().count().saturating_sub(span.start.column - 1).max(1)
    };
    let spaces = " ".repeat(span.start.column.saturating_sub(1));
    let arrows = "^".repeat(width);

    format!("{category}: {details}\n\
             Sur la ligne {}, colonne {} à la ligne {}, colonne {}\n\
             {line}\n\
             {spaces}{arrows}",
            span.start.line, span.start.column, span.end.line, span.end.column)
}

#[cfg(test)]
mod tests {
    use crate::position::{Position, Span};

    use super::*;

    #[test]
    fn excerpt_underlines_the_offending_region() {
        let source = "dec x = @";
        let span = Span::new(Position::start().advanced_over("dec x = "),
                             Position::start().advanced_over("dec x = @"));

        let report = render_excerpt("Caractère non valide", "'@'", span, source);

        assert_eq!(report,
                   "Caractère non valide: '@'\n\
                    Sur la ligne 1, colonne 9 à la ligne 1, colonne 10\n\
                    dec x = @\n\
                    \u{20}       ^");
    }

    #[test]
    fn empty_span_still_gets_a_caret() {
        let source = "dec x =";
        let at = Position::start().advanced_over("dec x =");

        let report = render_excerpt("Syntaxe non valide", "fin de fichier", Span::empty(at), source);

        assert!(report.ends_with("^"));
    }
}
