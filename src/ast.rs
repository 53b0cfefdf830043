use std::rc::Rc;

use crate::position::Span;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers literals, variables, operators, calls, indexing, array and
/// function literals, and the `lire` input expression. Each variant carries
/// the span of the source text it was parsed from, used for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.14`.
    Number {
        /// The literal value.
        value: f64,
        /// Source region of the node.
        span:  Span,
    },
    /// A string literal, with escape sequences already decoded.
    Str {
        /// The decoded text.
        value: String,
        /// Source region of the node.
        span:  Span,
    },
    /// A boolean literal: `vrai` or `faux`.
    Bool {
        /// The literal value.
        value: bool,
        /// Source region of the node.
        span:  Span,
    },
    /// The null literal `rien`.
    Null {
        /// Source region of the node.
        span: Span,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Source region of the node.
        span: Span,
    },
    /// The `lire` input expression; the operand is the prompt message.
    Read {
        /// Prompt expression shown before reading a line.
        message: Box<Self>,
        /// Source region of the node.
        span:    Span,
    },
    /// Array literal expression, such as `[1, 2, 3]`.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Source region of the node.
        span:     Span,
    },
    /// A function literal, named (`fonction f(x) ... fin`) or anonymous.
    ///
    /// The body is reference-counted so closures share it without cloning
    /// the statements on every evaluation of the literal.
    Function {
        /// Declared name, or `None` for an anonymous function.
        name:   Option<String>,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// Statements making up the function body.
        body:   Rc<[Statement]>,
        /// Source region of the node.
        span:   Span,
    },
    /// A unary operation (`non x`, `-x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Source region of the node.
        span:    Span,
    },
    /// A binary operation (arithmetic, comparison, `et`/`ou`).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Source region of the node.
        span:  Span,
    },
    /// An assignment, `target = value`.
    ///
    /// Any expression is accepted as target at parse time; only identifiers
    /// and member expressions are actually assignable, checked at runtime.
    Assignment {
        /// The expression being assigned to.
        target: Box<Self>,
        /// The value to assign.
        value:  Box<Self>,
        /// Source region of the node.
        span:   Span,
    },
    /// A call expression, `callee(args)`.
    Call {
        /// The expression evaluating to the callable.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Source region of the node.
        span:      Span,
    },
    /// An indexing expression, `object[index]` or the append form `object[]`.
    ///
    /// A missing index marks the append form, which is only meaningful as an
    /// assignment target.
    Member {
        /// The expression evaluating to the array.
        object: Box<Self>,
        /// Index expression, or `None` for the append form.
        index:  Option<Box<Self>>,
        /// Source region of the node.
        span:   Span,
    },
}

impl Expr {
    /// Gets the source span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::Str { span, .. }
            | Self::Bool { span, .. }
            | Self::Null { span }
            | Self::Identifier { span, .. }
            | Self::Read { span, .. }
            | Self::Array { span, .. }
            | Self::Function { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Assignment { span, .. }
            | Self::Call { span, .. }
            | Self::Member { span, .. } => *span,
        }
    }
}

/// An abstract syntax tree node representing a statement.
///
/// Statements are the units a program is made of; a block is an ordered
/// `Vec<Statement>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration, `dec name` or `dec name = value`.
    VariableDeclaration {
        /// The name being declared.
        name:  String,
        /// Initializer, or `None` to declare as null.
        value: Option<Expr>,
        /// Source region of the statement.
        span:  Span,
    },
    /// An `ecrire` statement printing one rendered line.
    Print {
        /// The expression to render.
        value: Expr,
        /// Source region of the statement.
        span:  Span,
    },
    /// A conditional, `si ... alors ... [sinon ...] fin`.
    ///
    /// `sinonsi` chains are desugared by the parser into nested `If` nodes
    /// placed in the else branch.
    If {
        /// The condition, coerced to boolean by truthiness.
        condition:   Expr,
        /// Statements executed when the condition holds.
        then_branch: Vec<Statement>,
        /// Statements executed otherwise, if present.
        else_branch: Option<Vec<Statement>>,
        /// Source region of the statement.
        span:        Span,
    },
    /// A `tantque` loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Source region of the statement.
        span:      Span,
    },
    /// A `pour` loop, already desugared by the parser.
    For {
        /// The loop variable name.
        variable:  String,
        /// Initializer for the loop variable.
        init:      Expr,
        /// Continuation condition (a bare bound becomes `variable <= bound`).
        condition: Expr,
        /// Implicit step assignment, `variable = variable + step`.
        step:      Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Source region of the statement.
        span:      Span,
    },
    /// A `retour` statement.
    Return {
        /// The value carried back to the call boundary.
        value: Expr,
        /// Source region of the statement.
        span:  Span,
    },
    /// An `arreter` statement, stopping the nearest enclosing loop.
    Break {
        /// Source region of the statement.
        span: Span,
    },
    /// A `continuer` statement, skipping to the next iteration.
    Continue {
        /// Source region of the statement.
        span: Span,
    },
    /// A standalone expression evaluated for its value and side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Source region of the statement.
        span: Span,
    },
}

impl Statement {
    /// Gets the source span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::VariableDeclaration { span, .. }
            | Self::Print { span, .. }
            | Self::If { span, .. }
            | Self::While { span, .. }
            | Self::For { span, .. }
            | Self::Return { span, .. }
            | Self::Break { span }
            | Self::Continue { span }
            | Self::Expression { span, .. } => *span,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`et`), short-circuiting
    And,
    /// Logical or (`ou`), short-circuiting
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (`non x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "et",
            Self::Or => "ou",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "non",
        };
        write!(f, "{operator}")
    }
}
