#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while folding the running result.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Zero-based offset of the `/` operator in the line.
        position: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Zero-based offset of the operator in the line.
        position: usize,
    },
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
