/// Lexical errors.
///
/// Defines the errors raised while turning raw input into tokens: characters
/// that belong to no lexeme, and integer literals that do not fit the integer
/// representation.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the errors raised when a well-formed token stream does not follow
/// the `term (operator term)*` grammar, such as two operators in a row or a
/// trailing operator.
pub mod syntax_error;
/// Arithmetic errors.
///
/// Contains the errors raised while folding the running result: division by
/// zero and integer overflow.
pub mod arithmetic_error;

use std::fmt;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use syntax_error::{Expected, SyntaxError};

/// Result type used by scalar operator application.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Result type used by the evaluator and the library entry points.
pub type CalcResult<T> = Result<T, CalcError>;

/// Any failure that aborts the evaluation of a line.
///
/// Each variant wraps one error family. The caller decides how to report it;
/// the evaluator itself never recovers from an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The input contains something the lexer cannot tokenize.
    Lex(LexError),
    /// The token sequence violates the grammar.
    Syntax(SyntaxError),
    /// Folding the running result failed.
    Arithmetic(ArithmeticError),
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for CalcError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Arithmetic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}
