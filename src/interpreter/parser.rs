/// Parser entry points.
///
/// Contains program and expression parsing, including assignment, which sits
/// at the lowest precedence level.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for logical, comparison, and arithmetic
/// operators.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix operators, postfix call and index chains, and all literal
/// forms.
pub mod unary;

/// Statement parsing.
///
/// Implements declarations, conditionals, loops, and the desugaring of the
/// `pour` loop.
pub mod statement;

/// Block parsing.
///
/// Parses statement sequences up to (but not including) a terminator keyword
/// such as `fin`.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token-stream helpers shared across the parsing modules.
pub mod utils;
