use crate::interpreter::token::TokenKind;

/// What the evaluator was prepared to accept when a syntax error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A token of exactly this kind.
    Kind(TokenKind),
    /// Any of the four operators, or the end of the line.
    OperatorOrEnd,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::OperatorOrEnd => write!(f, "operator or EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching tokens against the
/// grammar.
pub enum SyntaxError {
    /// The lookahead token is not the one the grammar requires here.
    UnexpectedToken {
        /// The token kind (or kinds) the grammar allowed.
        expected: Expected,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// Zero-based offset of the found token in the line.
        position: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, position } => write!(f,
                                                                          "Error at position {position}: Expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
