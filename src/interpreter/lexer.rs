use logos::{Filter, Lexer, Logos};

use crate::{
    error::{LexError, lex_error::LexErrorKind},
    position::{Position, Span},
};

/// Distinguishes the two roles a `-` can play, decided by the character
/// immediately following it.
///
/// A minus glued to an alphanumeric character or a parenthesis may start a
/// negation (`-5`, `-(x)`); any other minus can only act as subtraction. The
/// additive parser level accepts both kinds, so `a - b` and `a -b` subtract
/// either way; only the prefix level is picky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinusKind {
    /// May start a prefix negation.
    Unary,
    /// Subtraction only.
    Binary,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The extra patterns catch a second `.` inside one literal, which is an
    /// illegal-character error rather than two adjacent numbers.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*", second_dot)]
    #[regex(r"\.[0-9]*\.[0-9.]*", second_dot)]
    Number(f64),
    /// String literal tokens, decoded from their escaped source form.
    ///
    /// The pattern also matches a string missing its closing quote so the
    /// callback can report it as unterminated.
    #[regex(r#""([^"\\]|\\.)*"?"#, decode_string)]
    Str(String),
    /// Boolean literal tokens: `vrai` or `faux`.
    #[token("vrai", parse_bool)]
    #[token("faux", parse_bool)]
    Bool(bool),
    /// `dec`
    #[token("dec")]
    Dec,
    /// `si`
    #[token("si")]
    Si,
    /// `alors`
    #[token("alors")]
    Alors,
    /// `sinonsi`
    #[token("sinonsi")]
    SinonSi,
    /// `sinon`
    #[token("sinon")]
    Sinon,
    /// `fin`
    #[token("fin")]
    Fin,
    /// `tantque`
    #[token("tantque")]
    Tantque,
    /// `pour`
    #[token("pour")]
    Pour,
    /// `de`
    #[token("de")]
    De,
    /// `jusque`
    #[token("jusque")]
    Jusque,
    /// `evol`
    #[token("evol")]
    Evol,
    /// `fonction`
    #[token("fonction")]
    Fonction,
    /// `retour`
    #[token("retour")]
    Retour,
    /// `arreter`
    #[token("arreter")]
    Arreter,
    /// `continuer`
    #[token("continuer")]
    Continuer,
    /// `ecrire`
    #[token("ecrire")]
    Ecrire,
    /// `lire`
    #[token("lire")]
    Lire,
    /// `rien`
    #[token("rien")]
    Rien,
    /// `et`
    #[token("et")]
    Et,
    /// `ou`
    #[token("ou")]
    Ou,
    /// `non`
    #[token("non")]
    Non,
    /// Identifier tokens; variable or function names such as `x` or `total`.
    ///
    /// The identifier `rem` starts a comment: the rest of the line is
    /// discarded and no token is emitted.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", identifier)]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, classified against the character that follows it.
    #[token("-", classify_minus)]
    Minus(MinusKind),
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,

    /// End-of-input marker, appended by [`tokenize`] rather than matched.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{}", if *value { "vrai" } else { "faux" }),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Dec => write!(f, "dec"),
            Self::Si => write!(f, "si"),
            Self::Alors => write!(f, "alors"),
            Self::SinonSi => write!(f, "sinonsi"),
            Self::Sinon => write!(f, "sinon"),
            Self::Fin => write!(f, "fin"),
            Self::Tantque => write!(f, "tantque"),
            Self::Pour => write!(f, "pour"),
            Self::De => write!(f, "de"),
            Self::Jusque => write!(f, "jusque"),
            Self::Evol => write!(f, "evol"),
            Self::Fonction => write!(f, "fonction"),
            Self::Retour => write!(f, "retour"),
            Self::Arreter => write!(f, "arreter"),
            Self::Continuer => write!(f, "continuer"),
            Self::Ecrire => write!(f, "ecrire"),
            Self::Lire => write!(f, "lire"),
            Self::Rien => write!(f, "rien"),
            Self::Et => write!(f, "et"),
            Self::Ou => write!(f, "ou"),
            Self::Non => write!(f, "non"),
            Self::Plus => write!(f, "+"),
            Self::Minus(_) => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Assign => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Eof => write!(f, "<EOF>"),
        }
    }
}

/// Converts source text into a token stream with resolved positions.
///
/// Every token carries the span of the text it was produced from; the stream
/// always ends with a zero-width [`Token::Eof`] so the parser can report
/// errors at end of input.
///
/// # Errors
/// Returns a [`LexError`] on the first illegal character, bad escape
/// sequence, doubled decimal point, or unterminated string.
///
/// # Example
/// ```
/// use qlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("dec x = 1").unwrap();
///
/// assert_eq!(tokens[0].0, Token::Dec);
/// assert_eq!(tokens.last().unwrap().0, Token::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut cursor = Position::start();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = cursor.advanced_over(&source[cursor.index..range.start]);
        let end = start.advanced_over(&source[range.start..range.end]);
        cursor = end;

        match result {
            Ok(token) => tokens.push((token, Span::new(start, end))),
            Err(kind) => return Err(lex_error_at(kind, lexer.slice(), start)),
        }
    }

    let end = cursor.advanced_over(&source[cursor.index..]);
    tokens.push((Token::Eof, Span::empty(end)));

    Ok(tokens)
}

/// Builds a position-bearing [`LexError`], narrowing the span to the exact
/// offending character when the recognizer rejected a larger slice.
///
/// A bad escape points at the escape sequence inside the string; a doubled
/// decimal point points at the second dot.
fn lex_error_at(kind: LexErrorKind, slice: &str, start: Position) -> LexError {
    let end = start.advanced_over(slice);

    match kind {
        LexErrorKind::UnterminatedString => {
            LexError::UnterminatedString { span: Span::new(start, end) }
        },
        LexErrorKind::IllegalCharacter => {
            let narrowed = if slice.starts_with('"') {
                bad_escape(slice)
            } else {
                second_dot_offset(slice).map(|offset| (offset, ".".to_string()))
            };

            match narrowed {
                Some((offset, found)) => {
                    let at = start.advanced_over(&slice[..offset]);
                    let span = Span::new(at, at.advanced_over(&found));
                    LexError::IllegalCharacter { found, span }
                },
                None => LexError::IllegalCharacter { found: slice.to_string(),
                                                     span:  Span::new(start, end), },
            }
        },
    }
}

/// Finds the first unsupported escape sequence in a raw string slice.
///
/// Returns the byte offset of its backslash and the sequence itself.
fn bad_escape(slice: &str) -> Option<(usize, String)> {
    let mut chars = slice.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) if matches!(escaped, '\\' | '"' | 'n' | 't') => {},
                Some((_, escaped)) => return Some((offset, format!("\\{escaped}"))),
                None => return None,
            }
        }
    }
    None
}

/// Finds the byte offset of the second decimal point in a numeric slice.
fn second_dot_offset(slice: &str) -> Option<usize> {
    slice.match_indices('.').nth(1).map(|(offset, _)| offset)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Rejects a numeric literal containing more than one decimal point.
fn second_dot(_: &Lexer<Token>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::IllegalCharacter)
}

/// Parses a boolean literal from the current token slice (`vrai` or `faux`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"vrai"`.
/// - `Some(false)` if the slice is `"faux"`.
/// - `None` otherwise.
fn parse_bool(lex: &Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "vrai" => Some(true),
        "faux" => Some(false),
        _ => None,
    }
}

/// Emits an identifier, or discards the rest of the line when the identifier
/// is the comment marker `rem`.
fn identifier(lex: &mut Lexer<Token>) -> Filter<String> {
    if lex.slice() == "rem" {
        let rest = lex.remainder();
        let line_end = rest.find('\n').unwrap_or(rest.len());
        lex.bump(line_end);

        return Filter::Skip;
    }
    Filter::Emit(lex.slice().to_string())
}

/// Classifies a `-` by looking at the character immediately following it.
fn classify_minus(lex: &Lexer<Token>) -> MinusKind {
    match lex.remainder().chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '(' || c == ')' => MinusKind::Unary,
        _ => MinusKind::Binary,
    }
}

/// Decodes a string literal, resolving escapes and rejecting unterminated
/// strings.
///
/// Literal line breaks inside the string are kept as `\n` in the decoded
/// value.
fn decode_string(lex: &Lexer<Token>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    let mut chars = slice[1..].chars();
    let mut decoded = String::new();

    loop {
        match chars.next() {
            None => return Err(LexErrorKind::UnterminatedString),
            Some('"') => return Ok(decoded),
            Some('\\') => match chars.next() {
                Some('\\') => decoded.push('\\'),
                Some('"') => decoded.push('"'),
                Some('n') => decoded.push('\n'),
                Some('t') => decoded.push('\t'),
                _ => return Err(LexErrorKind::IllegalCharacter),
            },
            Some(c) => decoded.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("dec total = rien"),
                   vec![Token::Dec,
                        Token::Identifier("total".to_string()),
                        Token::Assign,
                        Token::Rien,
                        Token::Eof]);
    }

    #[test]
    fn keyword_prefixes_stay_identifiers() {
        assert_eq!(kinds("decompte finir"),
                   vec![Token::Identifier("decompte".to_string()),
                        Token::Identifier("finir".to_string()),
                        Token::Eof]);
    }

    #[test]
    fn minus_classification_follows_next_character() {
        assert_eq!(kinds("-5")[0], Token::Minus(MinusKind::Unary));
        assert_eq!(kinds("-(")[0], Token::Minus(MinusKind::Unary));
        assert_eq!(kinds("- 5")[0], Token::Minus(MinusKind::Binary));
        assert_eq!(kinds("-")[0], Token::Minus(MinusKind::Binary));
    }

    #[test]
    fn two_character_operators() {
        assert_eq!(kinds("== != <= >= < > ="),
                   vec![Token::EqualEqual,
                        Token::BangEqual,
                        Token::LessEqual,
                        Token::GreaterEqual,
                        Token::Less,
                        Token::Greater,
                        Token::Assign,
                        Token::Eof]);
    }

    #[test]
    fn rem_discards_the_rest_of_the_line() {
        assert_eq!(kinds("dec x rem tout ceci disparaît\ndec y"),
                   vec![Token::Dec,
                        Token::Identifier("x".to_string()),
                        Token::Dec,
                        Token::Identifier("y".to_string()),
                        Token::Eof]);
    }

    #[test]
    fn rem_prefixed_identifiers_are_not_comments() {
        assert_eq!(kinds("remise")[0], Token::Identifier("remise".to_string()));
    }

    #[test]
    fn string_escapes_are_decoded() {
        assert_eq!(kinds(r#""a\n\t\"\\b""#)[0],
                   Token::Str("a\n\t\"\\b".to_string()));
    }

    #[test]
    fn multi_line_strings_keep_their_newlines() {
        assert_eq!(kinds("\"un\ndeux\"")[0], Token::Str("un\ndeux".to_string()));
    }

    #[test]
    fn unknown_escape_is_an_illegal_character() {
        let error = tokenize(r#""a\q""#).unwrap_err();

        assert!(matches!(error, LexError::IllegalCharacter { ref found, .. } if found == "\\q"));
        assert_eq!(error.span().start.column, 3);
    }

    #[test]
    fn unterminated_string_is_reported() {
        assert!(matches!(tokenize("\"jamais fermée").unwrap_err(),
                         LexError::UnterminatedString { .. }));
    }

    #[test]
    fn second_decimal_point_is_an_illegal_character() {
        let error = tokenize("1.2.3").unwrap_err();

        assert!(matches!(error, LexError::IllegalCharacter { ref found, .. } if found == "."));
        assert_eq!(error.span().start.column, 4);
    }

    #[test]
    fn positions_resolve_across_lines() {
        let tokens = tokenize("dec x\ndec y").unwrap();
        let (_, span) = &tokens[3];

        assert_eq!(span.start.line, 2);
        assert_eq!(span.start.column, 5);
        assert_eq!(span.end.column, 6);
    }

    #[test]
    fn lone_bang_is_an_illegal_character() {
        assert!(matches!(tokenize("vrai ! faux").unwrap_err(),
                         LexError::IllegalCharacter { ref found, .. } if found == "!"));
    }
}
