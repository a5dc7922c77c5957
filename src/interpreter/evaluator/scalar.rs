use crate::{
    error::{ArithmeticError, ArithmeticResult},
    interpreter::{evaluator::core::Evaluator, operator::BinaryOperator, value::Value},
};

impl Evaluator<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// `+`, `-` and `*` on two integers stay integral and are checked for
    /// overflow. `/` always divides as reals, so the result switches to
    /// `Real` even when the quotient is whole. Once either side is real, the
    /// other is promoted and ordinary `f64` arithmetic applies.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: The running result.
    /// - `right`: The new term.
    /// - `position`: Offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` when `op` is `/` and `right` is zero.
    /// - `Overflow` when integer arithmetic leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{
    ///     evaluator::core::Evaluator, operator::BinaryOperator, value::Value,
    /// };
    ///
    /// let result =
    ///     Evaluator::eval_scalar_op(BinaryOperator::Div, &Value::Integer(6), &Value::Integer(4), 1)
    ///         .unwrap();
    /// assert_eq!(result, Value::Real(1.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: usize)
                          -> ArithmeticResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        if op == Div && right.is_zero() {
            return Err(ArithmeticError::DivisionByZero { position });
        }

        match (left, right) {
            (Integer(a), Integer(b)) if op != Div => {
                let checked = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => unreachable!(),
                };
                checked.map(Integer).ok_or(ArithmeticError::Overflow { position })
            },
            _ => {
                let left = left.as_real();
                let right = right.as_real();

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                        }))
            },
        }
    }
}
