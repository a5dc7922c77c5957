#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based offset of the character in the line.
        position:  usize,
    },
    /// An integer literal is too large to be represented.
    LiteralTooLarge {
        /// The digits of the literal, as written.
        literal:  String,
        /// Zero-based offset of the first digit in the line.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character {character:?}."),

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
