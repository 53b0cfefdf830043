use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{MinusKind, Token},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_function,
            utils::{end_of_input, expect, parse_comma_separated},
        },
    },
    position::Span,
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `-`   (numeric negation, only when glued to its operand)
/// - `non` (logical not)
///
/// Unary operators are right-associative, so an input like `non -x` is parsed
/// as `non (-x)`. A free-standing minus is not a prefix; it reaches
/// [`parse_primary`] and is rejected there.
///
/// Grammar:
/// ```text
///     unary := ("-" | "non") unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression possibly followed by postfixes.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let prefix = match tokens.peek() {
        Some((Token::Non, span)) => Some((UnaryOperator::Not, *span)),
        Some((Token::Minus(MinusKind::Unary), span)) => Some((UnaryOperator::Negate, *span)),
        _ => None,
    };

    match prefix {
        Some((op, start)) => {
            tokens.next();
            let operand = parse_unary(tokens)?;
            let span = start.to(operand.span());
            Ok(Expr::Unary { op,
                             operand: Box::new(operand),
                             span })
        },
        None => parse_postfix(tokens),
    }
}

/// Parses a primary expression followed by its postfix chain.
///
/// Postfixes are call argument lists and index brackets, applied left to
/// right, so `grid[0](x)[1]` calls the element then indexes the result. The
/// empty-bracket append form ends the chain; it is only meaningful as an
/// assignment target.
///
/// Grammar:
/// ```text
///     postfix := "(" arguments ")"
///              | "[" expression "]"
///              | "[" "]"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut expression = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::LParen, _)) => {
                tokens.next();
                let (arguments, close) =
                    parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                let span = expression.span().to(close);
                expression = Expr::Call { callee: Box::new(expression),
                                          arguments,
                                          span };
            },
            Some((Token::LBracket, _)) => {
                tokens.next();
                if let Some((Token::RBracket, span)) = tokens.peek() {
                    let close = *span;
                    tokens.next();
                    let span = expression.span().to(close);

                    return Ok(Expr::Member { object: Box::new(expression),
                                             index: None,
                                             span });
                }
                let index = parse_expression(tokens)?;
                let close = expect(tokens, &Token::RBracket, "']'")?;
                let span = expression.span().to(close);
                expression = Expr::Member { object: Box::new(expression),
                                            index: Some(Box::new(index)),
                                            span };
            },
            _ => break,
        }
    }
    Ok(expression)
}

/// Parses a primary expression.
///
/// Primaries are the leaves of the expression grammar:
/// - literals: numbers, strings, `vrai`, `faux`, `rien`, and array literals,
/// - identifiers,
/// - `lire` with its prompt operand,
/// - function literals,
/// - parenthesized expressions.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` when the next token cannot start an expression.
pub(in crate::interpreter::parser) fn parse_primary<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), span)) => {
            let expression = Expr::Number { value: *value,
                                            span:  *span, };
            tokens.next();
            Ok(expression)
        },
        Some((Token::Str(value), span)) => {
            let expression = Expr::Str { value: value.clone(),
                                         span:  *span, };
            tokens.next();
            Ok(expression)
        },
        Some((Token::Bool(value), span)) => {
            let expression = Expr::Bool { value: *value,
                                          span:  *span, };
            tokens.next();
            Ok(expression)
        },
        Some((Token::Rien, span)) => {
            let expression = Expr::Null { span: *span };
            tokens.next();
            Ok(expression)
        },
        Some((Token::Identifier(name), span)) => {
            let expression = Expr::Identifier { name: name.clone(),
                                                span: *span, };
            tokens.next();
            Ok(expression)
        },
        Some((Token::Lire, span)) => {
            let start = *span;
            tokens.next();
            let message = parse_expression(tokens)?;
            let span = start.to(message.span());
            Ok(Expr::Read { message: Box::new(message),
                            span })
        },
        Some((Token::LBracket, span)) => {
            let start = *span;
            tokens.next();
            let (elements, close) =
                parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::Array { elements,
                             span: start.to(close) })
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let expression = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expression)
        },
        Some((Token::Fonction, _)) => parse_function(tokens),
        Some((token, span)) => {
            Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                 span:  *span, })
        },
        None => Err(end_of_input("une expression")),
    }
}
