use crate::interpreter::operator::BinaryOperator;

/// A lexical token handed from the lexer to the evaluator.
///
/// Only `Integer` carries a payload. Every consumer matches on the full set
/// of variants, so adding a kind forces each use site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// End of the line. Produced once the input is exhausted, and again on
    /// every later request.
    EndOfInput,
}

/// The kind of a [`Token`], without its payload.
///
/// Syntax errors name kinds rather than tokens, since the expected side of a
/// mismatch has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Multiply,
    Divide,
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(3).kind(), TokenKind::Integer);
    /// assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the binary operator this token stands for, if it is one.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Multiply => Some(BinaryOperator::Mul),
            Self::Divide => Some(BinaryOperator::Div),
            Self::Integer(_) | Self::EndOfInput => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
            Self::EndOfInput => "EOF",
        };
        f.write_str(name)
    }
}

/// Renders the token the way the token trace prints it.
///
/// ```
/// use foldcalc::interpreter::token::Token;
///
/// assert_eq!(Token::Integer(12).to_string(), "Token(INTEGER, 12)");
/// assert_eq!(Token::Plus.to_string(), "Token(PLUS, '+')");
/// assert_eq!(Token::EndOfInput.to_string(), "Token(EOF, None)");
/// ```
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match (self, self.operator()) {
            (Self::Integer(value), _) => write!(f, "Token({kind}, {value})"),
            (_, Some(op)) => write!(f, "Token({kind}, '{op}')"),
            _ => write!(f, "Token({kind}, None)"),
        }
    }
}
