/// The evaluator proper: lookahead handling and the fold loop.
pub mod core;

/// Scalar operator application.
///
/// Applies one binary operator to the running result and a new term,
/// choosing integer or floating-point arithmetic from the operand types.
pub mod scalar;
