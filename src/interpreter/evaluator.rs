/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine: statement dispatch, expression
/// dispatch, block execution with frame save/restore, and the control-flow
/// signals.
pub mod core;

/// Scope frames.
///
/// Implements the environment chain: declaration, assignment, lookup, and the
/// non-throwing resolve probe used by the `pour` loop binder.
pub mod environment;

/// Conditional and loop evaluation.
///
/// Executes `si`, `tantque`, and `pour`, managing loop frames and absorbing
/// the break/continue signals at the right boundary.
pub mod control_flow;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, and the short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Assignment targets and array element access.
///
/// Implements reads and writes through index brackets, the append form, and
/// plain variable assignment.
pub mod member;

/// Function evaluation.
///
/// Handles closure creation, named-function binding, and calls to
/// user-defined and built-in functions.
pub mod function;
