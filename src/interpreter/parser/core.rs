use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical, statement::parse_statement},
    },
    position::Span,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is a sequence of statements ending at the `Eof` marker.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The program's statements, in source order.
///
/// # Errors
/// Returns the first `ParseError` produced by a statement.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut statements = Vec::new();
    while let Some((token, _)) = tokens.peek() {
        if matches!(token, Token::Eof) {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative, so `a = b = c` assigns `c` to `b` and the
/// result to `a`. Any expression is accepted as the target here; whether it
/// can actually be assigned to is checked during evaluation.
///
/// Grammar: `assignment := logical ("=" assignment)?`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let target = parse_logical(tokens)?;

    if let Some((Token::Assign, _)) = tokens.peek() {
        tokens.next();
        let value = parse_assignment(tokens)?;
        let span = target.span().to(value.span());

        return Ok(Expr::Assignment { target: Box::new(target),
                                     value: Box::new(value),
                                     span });
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Statement, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> Vec<Statement> {
        let tokens = tokenize(source).unwrap();
        parse_program(&mut tokens.iter().peekable()).unwrap()
    }

    fn parse_error(source: &str) -> ParseError {
        let tokens = tokenize(source).unwrap();
        parse_program(&mut tokens.iter().peekable()).unwrap_err()
    }

    fn single_expression(source: &str) -> Expr {
        match parse(source).into_iter().next().unwrap() {
            Statement::Expression { expr, .. } => expr,
            statement => panic!("expected an expression statement, got {statement:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let Expr::Binary { op: BinaryOperator::Add, right, .. } = single_expression("1 + 2 * 3")
        else {
            panic!("expected an addition at the root");
        };

        assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn parentheses_override_precedence() {
        let Expr::Binary { op: BinaryOperator::Mul, left, .. } = single_expression("(1 + 2) * 3")
        else {
            panic!("expected a multiplication at the root");
        };

        assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Add, .. }));
    }

    #[test]
    fn assignment_is_right_associative() {
        let Expr::Assignment { target, value, .. } = single_expression("a = b = 1") else {
            panic!("expected an assignment at the root");
        };

        assert!(matches!(*target, Expr::Identifier { ref name, .. } if name == "a"));
        assert!(matches!(*value, Expr::Assignment { .. }));
    }

    #[test]
    fn glued_minus_is_a_prefix() {
        assert!(matches!(single_expression("-5"),
                         Expr::Unary { op: UnaryOperator::Negate, .. }));
    }

    #[test]
    fn spaced_minus_still_subtracts() {
        assert!(matches!(single_expression("a - 5"),
                         Expr::Binary { op: BinaryOperator::Sub, .. }));
        assert!(matches!(single_expression("a -5"),
                         Expr::Binary { op: BinaryOperator::Sub, .. }));
    }

    #[test]
    fn free_standing_minus_is_not_an_expression() {
        assert!(matches!(parse_error("- 5"),
                         ParseError::ExpectedExpression { ref found, .. } if found == "-"));
    }

    #[test]
    fn sinonsi_desugars_into_nested_conditionals() {
        let statements = parse("si a alors sinonsi b alors sinon fin");
        let Some(Statement::If { else_branch: Some(else_branch), .. }) = statements.first()
        else {
            panic!("expected a conditional with an else branch");
        };

        assert!(matches!(else_branch.as_slice(),
                         [Statement::If { else_branch: Some(_), .. }]));
    }

    #[test]
    fn bare_bound_becomes_a_comparison() {
        let statements = parse("pour i de 0 jusque 5 alors fin");
        let Some(Statement::For { condition, step, .. }) = statements.first() else {
            panic!("expected a for loop");
        };

        assert!(matches!(condition,
                         Expr::Binary { op: BinaryOperator::LessEqual, .. }));
        assert!(matches!(step, Expr::Assignment { .. }));
    }

    #[test]
    fn expression_bound_is_kept_as_condition() {
        let statements = parse("pour i de 5 jusque i >= 0 evol -1 alors fin");
        let Some(Statement::For { condition, .. }) = statements.first() else {
            panic!("expected a for loop");
        };

        assert!(matches!(condition,
                         Expr::Binary { op: BinaryOperator::GreaterEqual, .. }));
    }

    #[test]
    fn empty_brackets_parse_as_append_target() {
        assert!(matches!(single_expression("tab[]"),
                         Expr::Member { index: None, .. }));
    }

    #[test]
    fn array_literals_accept_a_trailing_comma() {
        let Expr::Array { elements, .. } = single_expression("[1, 2,]") else {
            panic!("expected an array literal");
        };

        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn missing_fin_reports_end_of_input() {
        let error = parse_error("si vrai alors ecrire 1");

        assert_eq!(error.details(),
                   "Fin de fichier atteinte, 'fin' ou 'sinonsi' ou 'sinon' attendu");
    }

    #[test]
    fn missing_alors_names_the_found_token() {
        let error = parse_error("tantque vrai fin");

        assert_eq!(error.details(), "'fin' trouvé, 'alors' attendu");
    }

    #[test]
    fn too_many_parameters_are_rejected() {
        let params = (0..49).map(|n| format!("p{n}")).collect::<Vec<_>>().join(", ");
        let error = parse_error(&format!("fonction large({params}) fin"));

        assert_eq!(error.details(),
                   "La fonction 'large' ne peut pas avoir plus de 48 paramètres");
    }
}
