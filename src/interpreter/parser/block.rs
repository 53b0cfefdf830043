use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::end_of_input},
    },
    position::Span,
};

/// Parses the statements of a block, up to a terminator keyword.
///
/// The terminator is left in the stream; the caller decides what to do with
/// it, since `si` blocks may end on `fin`, `sinon`, or `sinonsi`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement of the block.
/// - `terminators`: The keywords that may end this block.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the input ends
/// before a terminator is found.
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                                                         terminators: &[Token])
                                                         -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Eof, span)) => {
                return Err(ParseError::UnexpectedEndOfInput { expected: describe(terminators),
                                                              span:     *span, });
            },
            Some((token, _)) if terminators.contains(token) => break,
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(end_of_input(&describe(terminators))),
        }
    }
    Ok(statements)
}

/// Names the terminators of a block for an error message.
fn describe(terminators: &[Token]) -> String {
    terminators.iter()
               .map(|token| format!("'{token}'"))
               .collect::<Vec<_>>()
               .join(" ou ")
}
