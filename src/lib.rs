//! # foldcalc
//!
//! foldcalc is a flat arithmetic expression calculator written in Rust.
//! It evaluates non-negative integer literals joined by `+ - * /` in a single
//! pass, strictly left to right and without operator precedence: `2 + 3 * 4`
//! is `20`. Division is real division, so `6 / 4 + 1` is `2.5`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{evaluator::core::Evaluator, lexer::Lexer, value::Value},
};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can abort the evaluation of a line.
/// Every error carries the zero-based offset in the line where it was
/// detected.
///
/// # Responsibilities
/// - Defines one error enum per failure family (lexer, grammar, arithmetic).
/// - Wraps them in a single `CalcError` for callers that handle any failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Contains the lexer, the evaluator, and the types they exchange.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads lines from any buffered reader, evaluates each one with a fresh
/// evaluator, and writes results and errors to separate writers.
pub mod repl;

pub use interpreter::lexer::tokenize;

/// Evaluates one line and returns its result.
///
/// A fresh lexer and evaluator are built for every call, so nothing carries
/// over from one line to the next.
///
/// # Errors
/// Returns an error if the line contains an unknown character, does not
/// follow the grammar, or divides by zero.
///
/// # Examples
/// ```
/// use foldcalc::{evaluate, interpreter::value::Value};
///
/// assert_eq!(evaluate("   3   +   4  ").unwrap(), Value::Integer(7));
/// assert_eq!(evaluate("10-2-3").unwrap(), Value::Integer(5));
/// assert_eq!(evaluate("6/4+1").unwrap(), Value::Real(2.5));
///
/// // Division by zero aborts the line.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(source: &str) -> CalcResult<Value> {
    Evaluator::new(Lexer::new(source))?.evaluate()
}
