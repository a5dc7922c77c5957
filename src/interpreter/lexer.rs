use logos::Logos;

use crate::{error::LexError, interpreter::token::Token};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes recognised by the scanner.
///
/// This is the table the scanner matches against; [`Lexer`] turns each
/// lexeme into a [`Token`] and adds the end-of-input marker. Digit runs are
/// matched greedily, so `123` is one lexeme rather than three.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Integer literal tokens, such as `42`. A run that overflows `i64`
    /// fails to parse and surfaces as a scanner error.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Spaces, tabs, line breaks, feeds and any other Unicode whitespace.
    #[regex(r"\p{White_Space}+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits one line of input into tokens, one per call.
///
/// The lexer owns the source text and a cursor that only moves forward. Each
/// call to [`Lexer::next_token`] skips leading whitespace and consumes exactly
/// one maximal lexeme. Once the input is exhausted it keeps answering
/// [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use foldcalc::interpreter::{lexer::Lexer, token::Token};
///
/// let mut lexer = Lexer::new("12 + 7");
/// assert_eq!(lexer.next_token().unwrap(), Token::Integer(12));
/// assert_eq!(lexer.next_token().unwrap(), Token::Plus);
/// assert_eq!(lexer.token_position(), 3);
/// assert_eq!(lexer.next_token().unwrap(), Token::Integer(7));
/// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
/// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
/// ```
pub struct Lexer<'src> {
    scanner:     logos::Lexer<'src, Lexeme>,
    /// Character offset of the most recent token.
    token_start: usize,
    /// Byte and character offsets just past the most recent token.
    scanned:     (usize, usize),
    exhausted:   bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { scanner:     Lexeme::lexer(source),
               token_start: 0,
               scanned:     (0, 0),
               exhausted:   false, }
    }

    /// Returns the text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.scanner.source()
    }

    /// Zero-based character offset of the token most recently returned.
    ///
    /// For [`Token::EndOfInput`] this is the length of the input in
    /// characters.
    #[must_use]
    pub const fn token_position(&self) -> usize {
        self.token_start
    }

    /// Produces the next token.
    ///
    /// # Errors
    /// - `LexError::UnexpectedCharacter` when the cursor sits on a character
    ///   that is neither whitespace, a digit nor one of `+ - * /`.
    /// - `LexError::LiteralTooLarge` when a digit run does not fit in `i64`.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.exhausted {
            return Ok(Token::EndOfInput);
        }

        let Some(lexeme) = self.scanner.next() else {
            self.exhausted = true;
            self.token_start = self.advance_to(self.source().len());
            return Ok(Token::EndOfInput);
        };

        let span = self.scanner.span();
        self.token_start = self.advance_to(span.start);
        let width = count_chars(&self.source().as_bytes()[span.clone()]);
        self.scanned = (span.end, self.token_start + width);

        match lexeme {
            Ok(Lexeme::Integer(value)) => Ok(Token::Integer(value)),
            Ok(Lexeme::Plus) => Ok(Token::Plus),
            Ok(Lexeme::Minus) => Ok(Token::Minus),
            Ok(Lexeme::Star) => Ok(Token::Multiply),
            Ok(Lexeme::Slash) => Ok(Token::Divide),
            Ok(Lexeme::Ignored) => unreachable!("whitespace is skipped by the scanner"),
            Err(()) => Err(self.classify_error(span.start)),
        }
    }

    /// Returns the character offset of byte `end`, counting only the text
    /// skipped since the previous token.
    fn advance_to(&self, end: usize) -> usize {
        let (byte, chars) = self.scanned;
        chars + count_chars(&self.source().as_bytes()[byte..end])
    }

    /// Works out why the scanner rejected the text starting at `start`.
    ///
    /// A rejected slice that begins with a digit is an overflowing literal;
    /// anything else is a stray character.
    fn classify_error(&self, start: usize) -> LexError {
        let slice = self.scanner.slice();
        match self.source().get(start..).and_then(|rest| rest.chars().next()) {
            Some(c) if c.is_ascii_digit() => LexError::LiteralTooLarge { literal:  slice.to_string(),
                                                                         position: self.token_start, },
            Some(character) => LexError::UnexpectedCharacter { character,
                                                               position: self.token_start },
            None => LexError::UnexpectedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                    position:  self.token_start, },
        }
    }
}

/// Counts the characters that start within `bytes`.
///
/// UTF-8 continuation bytes (`0b10xx_xxxx`) are skipped, so a range that
/// splits a character still counts it once.
#[allow(clippy::cast_possible_wrap)]
fn count_chars(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b as i8) >= -0x40).count()
}

/// Tokenizes a whole line, including the terminal [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use foldcalc::interpreter::{lexer::tokenize, token::Token};
///
/// let tokens = tokenize("12+7").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(12), Token::Plus, Token::Integer(7), Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}
