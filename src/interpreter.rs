/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, closures, and the break/continue/return signals.
/// - Reports runtime errors with the span of the offending construct.
pub mod evaluator;
/// Program input and output endpoints.
///
/// Defines the sink collecting `ecrire` lines and the source feeding `lire`,
/// with implementations for tests, piped input, and the terminal.
pub mod io;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source spans.
/// - Handles numeric and string literals, identifiers, keywords, and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Desugars `sinonsi` chains and `pour` loops at parse time.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as numbers, booleans, strings, arrays, and functions, together with the
/// callable abstraction shared by user closures and builtins.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality, and display rendering.
/// - Defines the `Callable` trait, user closures, and the builtin table.
pub mod value;
