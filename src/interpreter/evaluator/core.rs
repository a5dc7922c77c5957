use crate::{
    error::{CalcResult, Expected, SyntaxError},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Parses and evaluates one line in a single pass.
///
/// The evaluator holds exactly one lookahead token pulled from its lexer.
/// It folds the running result as it recognises each `operator term` pair,
/// so no syntax tree is ever built.
///
/// Grammar:
/// ```text
/// expression := term (operator term)*
/// term       := Integer
/// operator   := Plus | Minus | Multiply | Divide
/// ```
///
/// [`Evaluator::evaluate`] consumes the evaluator, so every line needs a
/// fresh lexer and evaluator.
pub struct Evaluator<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator and primes the lookahead with the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be read.
    pub fn new(mut lexer: Lexer<'src>) -> CalcResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Returns the current lookahead token.
    #[must_use]
    pub const fn lookahead(&self) -> Token {
        self.current
    }

    /// Evaluates the whole line and returns its result.
    ///
    /// Operators fold strictly left to right with no precedence, so
    /// `2 + 3 * 4` is `(2 + 3) * 4`.
    ///
    /// # Errors
    /// - `CalcError::Lex` if the lexer rejects the input.
    /// - `CalcError::Syntax` if the token sequence does not match the grammar.
    /// - `CalcError::Arithmetic` on division by zero or overflow.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{evaluator::core::Evaluator, lexer::Lexer, value::Value};
    ///
    /// let evaluator = Evaluator::new(Lexer::new("2 + 3 * 4")).unwrap();
    /// assert_eq!(evaluator.evaluate().unwrap(), Value::Integer(20));
    /// ```
    pub fn evaluate(mut self) -> CalcResult<Value> {
        let mut result = self.term()?;

        while let Some(op) = self.current.operator() {
            let position = self.lexer.token_position();
            self.eat(op.token_kind())?;
            let right = self.term()?;
            result = Self::eval_scalar_op(op, &result, &right, position)?;
        }

        self.expect_end()?;
        Ok(result)
    }

    /// Consumes an integer term and returns its value.
    fn term(&mut self) -> CalcResult<Value> {
        let Token::Integer(value) = self.current else {
            return Err(self.unexpected(Expected::Kind(TokenKind::Integer)).into());
        };
        self.eat(TokenKind::Integer)?;
        Ok(Value::Integer(value))
    }

    /// Advances past the lookahead if it has the expected kind.
    fn eat(&mut self, expected: TokenKind) -> CalcResult<()> {
        if self.current.kind() != expected {
            return Err(self.unexpected(Expected::Kind(expected)).into());
        }
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks that nothing but the end of the line is left.
    fn expect_end(&self) -> CalcResult<()> {
        match self.current {
            Token::EndOfInput => Ok(()),
            _ => Err(self.unexpected(Expected::OperatorOrEnd).into()),
        }
    }

    fn unexpected(&self, expected: Expected) -> SyntaxError {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current.kind(),
                                       position: self.lexer.token_position() }
    }
}
