use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
    position::Span,
};

/// Parses logical expressions.
///
/// Handles the left-associative operators `et` and `ou`, which share a single
/// precedence level and short-circuit during evaluation.
///
/// The rule is: `logical := equality (("et" | "ou") equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, logical_operator, parse_equality)
}

/// Parses equality expressions.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, equality_operator, parse_relational)
}

/// Parses relational expressions.
///
/// The rule is: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, relational_operator, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Either kind of minus subtracts here, so `a - b` and `a -b` mean the same
/// thing.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, additive_operator, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, multiplicative_operator, parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Folds `next_level` operands into a left-leaning `Expr::Binary` tree for as
/// long as `operator_for` recognizes the peeked token.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operator_for: fn(&Token) -> Option<BinaryOperator>,
                                 next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = next_level(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = operator_for(token)
    {
        tokens.next();
        let right = next_level(tokens)?;
        let span = left.span().to(right.span());
        left = Expr::Binary { op,
                              left: Box::new(left),
                              right: Box::new(right),
                              span };
    }
    Ok(left)
}

const fn logical_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Et => Some(BinaryOperator::And),
        Token::Ou => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn equality_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

const fn relational_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus(_) => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
