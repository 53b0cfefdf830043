use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, parse_identifier},
        },
    },
    position::Span,
};

/// The maximum number of parameters a function may declare.
const MAX_PARAMETERS: usize = 48;

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`dec`),
/// - a print statement (`ecrire`),
/// - a conditional (`si`),
/// - a loop (`tantque` or `pour`),
/// - a flow statement (`retour`, `arreter`, `continuer`),
/// - an expression used as a statement.
///
/// The dispatching keyword decides the construct; anything else is parsed as
/// an expression statement, which is how assignments and function definitions
/// arrive.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Span)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.peek() {
        Some((Token::Dec, span)) => {
            let start = *span;
            tokens.next();
            parse_variable_declaration(tokens, start)
        },
        Some((Token::Ecrire, span)) => {
            let start = *span;
            tokens.next();
            let value = parse_expression(tokens)?;
            let span = start.to(value.span());
            Ok(Statement::Print { value, span })
        },
        Some((Token::Si, span)) => {
            let start = *span;
            tokens.next();
            parse_if(tokens, start)
        },
        Some((Token::Tantque, span)) => {
            let start = *span;
            tokens.next();
            parse_while(tokens, start)
        },
        Some((Token::Pour, span)) => {
            let start = *span;
            tokens.next();
            parse_for(tokens, start)
        },
        Some((Token::Retour, span)) => {
            let start = *span;
            tokens.next();
            let value = parse_expression(tokens)?;
            let span = start.to(value.span());
            Ok(Statement::Return { value, span })
        },
        Some((Token::Arreter, span)) => {
            let span = *span;
            tokens.next();
            Ok(Statement::Break { span })
        },
        Some((Token::Continuer, span)) => {
            let span = *span;
            tokens.next();
            Ok(Statement::Continue { span })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            let span = expr.span();
            Ok(Statement::Expression { expr, span })
        },
    }
}

/// Parses a variable declaration after its `dec` keyword.
///
/// Grammar: `declaration := "dec" identifier ("=" expression)?`
///
/// A declaration without an initializer binds the variable to `rien`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     start: Span)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (name, name_span) = parse_identifier(tokens)?;

    match tokens.peek() {
        Some((Token::Assign, _)) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            let span = start.to(value.span());
            Ok(Statement::VariableDeclaration { name,
                                                value: Some(value),
                                                span })
        },
        _ => Ok(Statement::VariableDeclaration { name,
                                                 value: None,
                                                 span: start.to(name_span) }),
    }
}

/// Parses a conditional after its `si` (or `sinonsi`) keyword.
///
/// Syntax:
/// ```text
///     si <condition> alors <block>
///     sinonsi <condition> alors <block>
///     sinon <block>
///     fin
/// ```
/// A `sinonsi` chain is desugared recursively: each link becomes an `If`
/// statement placed alone in the else branch of the previous one, and the
/// single closing `fin` ends the whole chain.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `si` keyword.
/// - `start`: Span of the `si` keyword.
///
/// # Returns
/// A [`Statement::If`] node representing the full conditional.
///
/// # Errors
/// Returns a `ParseError` if `alors` or the closing `fin` is missing, or a
/// sub-expression fails to parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, start: Span) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Alors, "'alors'")?;
    let then_branch = parse_block(tokens, &[Token::Fin, Token::SinonSi, Token::Sinon])?;

    match tokens.peek() {
        Some((Token::Fin, span)) => {
            let end = *span;
            tokens.next();
            Ok(Statement::If { condition,
                               then_branch,
                               else_branch: None,
                               span: start.to(end) })
        },
        Some((Token::Sinon, _)) => {
            tokens.next();
            let else_branch = parse_block(tokens, &[Token::Fin])?;
            let end = expect(tokens, &Token::Fin, "'fin'")?;
            Ok(Statement::If { condition,
                               then_branch,
                               else_branch: Some(else_branch),
                               span: start.to(end) })
        },
        Some((Token::SinonSi, span)) => {
            let link = *span;
            tokens.next();
            let nested = parse_if(tokens, link)?;
            let span = start.to(nested.span());
            Ok(Statement::If { condition,
                               then_branch,
                               else_branch: Some(vec![nested]),
                               span })
        },
        Some((token, span)) => {
            Err(ParseError::UnexpectedToken { expected: "'fin'".to_string(),
                                              found:    token.to_string(),
                                              span:     *span, })
        },
        None => Err(end_of_input("'fin'")),
    }
}

/// Parses a `tantque` loop after its keyword.
///
/// Grammar: `while := "tantque" expression "alors" block "fin"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, start: Span) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Alors, "'alors'")?;
    let body = parse_block(tokens, &[Token::Fin])?;
    let end = expect(tokens, &Token::Fin, "'fin'")?;

    Ok(Statement::While { condition,
                          body,
                          span: start.to(end) })
}

/// Parses a `pour` loop after its keyword, desugaring it on the way.
///
/// Syntax:
/// ```text
///     pour <ident> de <init> jusque <bound> [evol <step>] alors <block> fin
/// ```
/// Two desugarings happen here rather than at evaluation time:
/// - a bound that is a bare number or identifier becomes the condition
///   `ident <= bound`; any other bound expression is the condition itself,
/// - the step (1 when `evol` is absent) becomes the implicit assignment
///   `ident = ident + step`, run after each non-terminating iteration.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `pour` keyword.
/// - `start`: Span of the `pour` keyword.
///
/// # Returns
/// A [`Statement::For`] node carrying the desugared pieces.
///
/// # Errors
/// Returns a `ParseError` if one of the structuring keywords is missing or a
/// sub-expression fails to parse.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, start: Span) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (variable, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::De, "'de'")?;
    let init = parse_expression(tokens)?;
    expect(tokens, &Token::Jusque, "'jusque'")?;
    let bound = parse_expression(tokens)?;

    let condition = match bound {
        Expr::Number { .. } | Expr::Identifier { .. } => {
            let span = bound.span();
            Expr::Binary { op:    BinaryOperator::LessEqual,
                           left:  Box::new(Expr::Identifier { name: variable.clone(),
                                                              span }),
                           right: Box::new(bound),
                           span }
        },
        condition => condition,
    };

    let step = match tokens.peek() {
        Some((Token::Evol, _)) => {
            tokens.next();
            parse_expression(tokens)?
        },
        _ => Expr::Number { value: 1.0,
                            span:  condition.span(), },
    };
    let step_span = step.span();
    let step = Expr::Assignment { target: Box::new(Expr::Identifier { name: variable.clone(),
                                                                      span: step_span, }),
                                  value:  Box::new(Expr::Binary { op:    BinaryOperator::Add,
                                                                  left:  Box::new(Expr::Identifier {
                                                                      name: variable.clone(),
                                                                      span: step_span,
                                                                  }),
                                                                  right: Box::new(step),
                                                                  span:  step_span, }),
                                  span:   step_span, };

    expect(tokens, &Token::Alors, "'alors'")?;
    let body = parse_block(tokens, &[Token::Fin])?;
    let end = expect(tokens, &Token::Fin, "'fin'")?;

    Ok(Statement::For { variable,
                        init,
                        condition,
                        step,
                        body,
                        span: start.to(end) })
}

/// Parses a function literal, named or anonymous.
///
/// Syntax:
/// ```text
///     fonction [nom] ( <param>, ... ) <block> fin
/// ```
/// The parameter list accepts a trailing comma and at most 48 names.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `fonction` keyword.
///
/// # Returns
/// An [`Expr::Function`] node.
///
/// # Errors
/// Returns a `ParseError` if the parameter list or body is malformed, or the
/// parameter limit is exceeded.
pub(in crate::interpreter::parser) fn parse_function<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let start = expect(tokens, &Token::Fonction, "'fonction'")?;

    let name = match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            let name = name.clone();
            tokens.next();
            Some(name)
        },
        _ => None,
    };

    expect(tokens, &Token::LParen, "'('")?;
    let (params, close) = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;
    if params.len() > MAX_PARAMETERS {
        let name = name.unwrap_or_else(|| "anonyme".to_string());

        return Err(ParseError::TooManyParameters { name,
                                                   span: start.to(close) });
    }

    let body = parse_block(tokens, &[Token::Fin])?;
    let end = expect(tokens, &Token::Fin, "'fin'")?;

    Ok(Expr::Function { name,
                        params,
                        body: body.into(),
                        span: start.to(end) })
}

fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Span)>
{
    parse_identifier(tokens).map(|(name, _)| name)
}
