/// The evaluator module parses and folds a line in one pass.
///
/// The evaluator pulls tokens from the lexer one at a time, keeps a single
/// lookahead, and computes the running result while it recognises the
/// grammar. No syntax tree is built.
///
/// # Responsibilities
/// - Enforces `term (operator term)*` with one token of lookahead.
/// - Applies each operator to the running result as soon as its right-hand
///   term is read.
/// - Reports syntax errors and arithmetic errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes one line of input.
///
/// The lexer reads the raw text and produces one token per call: integer
/// literals, the four operators, and an end-of-input marker.
///
/// # Responsibilities
/// - Skips whitespace and scans maximal digit runs.
/// - Tracks the offset of each token for error reporting.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// Binary operator definitions.
pub mod operator;
/// Token definitions shared by the lexer and the evaluator.
pub mod token;
/// The value module defines the running result type.
///
/// A result is either an exact integer or, after a division, a real.
pub mod value;
