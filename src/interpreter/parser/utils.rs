use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    position::{Position, Span},
};

/// Consumes the next token, which must be equal to `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
/// - `expected`: The token that must come next.
/// - `description`: How to name the token in an error, e.g. `'fin'`.
///
/// # Returns
/// The span of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs from `expected` or the
/// input ends first.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<Span>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((token, span)) if token == expected => Ok(*span),
        Some((Token::Eof, span)) => {
            Err(ParseError::UnexpectedEndOfInput { expected: description.to_string(),
                                                   span:     *span, })
        },
        Some((token, span)) => {
            Err(ParseError::UnexpectedToken { expected: description.to_string(),
                                              found:    token.to_string(),
                                              span:     *span, })
        },
        None => Err(end_of_input(description)),
    }
}

/// Parses a plain identifier and returns its name and span.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier text and the span it was read from.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends first.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(
    tokens: &mut Peekable<I>)
    -> ParseResult<(String, Span)>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((Token::Identifier(name), span)) => Ok((name.clone(), *span)),
        Some((Token::Eof, span)) => {
            Err(ParseError::UnexpectedEndOfInput { expected: "un identifiant".to_string(),
                                                   span:     *span, })
        },
        Some((token, span)) => {
            Err(ParseError::UnexpectedToken { expected: "un identifiant".to_string(),
                                              found:    token.to_string(),
                                              span:     *span, })
        },
        None => Err(end_of_input("un identifiant")),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists, and
/// parameter lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// trailing comma before the closing token is accepted.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// The parsed items and the span of the closing token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<(Vec<T>, Span)>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut items = Vec::new();
    if let Some((token, span)) = tokens.peek()
       && token == closing
    {
        let close = *span;
        tokens.next();

        return Ok((items, close));
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
                if let Some((token, span)) = tokens.peek()
                   && token == closing
                {
                    let close = *span;
                    tokens.next();

                    return Ok((items, close));
                }
            },
            Some((token, span)) if token == closing => {
                let close = *span;
                tokens.next();

                return Ok((items, close));
            },
            Some((Token::Eof, span)) => {
                return Err(ParseError::UnexpectedEndOfInput { expected:
                                                                  format!("',' ou '{closing}'"),
                                                              span:     *span, });
            },
            Some((token, span)) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' ou '{closing}'"),
                                                         found:    token.to_string(),
                                                         span:     *span, });
            },
            None => return Err(end_of_input(&format!("',' ou '{closing}'"))),
        }
    }
}

/// Builds the end-of-input error for a stream missing its `Eof` marker.
pub(in crate::interpreter::parser) fn end_of_input(expected: &str) -> ParseError {
    ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                       span:     Span::empty(Position::start()), }
}
