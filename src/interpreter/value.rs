/// The running result of a fold.
///
/// Every line starts as an `Integer`. The first division turns it into a
/// `Real`, and it stays real for the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable real, as
    /// any other floating-point operation would.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_real(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => *n as f64,
        }
    }

    /// Returns `true` if the value is numerically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Real(r) => *r == 0.0,
        }
    }
}

/// Integers print plainly; reals always keep a fractional part, so `6/3`
/// prints as `2.0` and is never mistaken for an integer result.
///
/// ```
/// use foldcalc::interpreter::value::Value;
///
/// assert_eq!(Value::Integer(-4).to_string(), "-4");
/// assert_eq!(Value::Real(2.0).to_string(), "2.0");
/// assert_eq!(Value::Real(2.5).to_string(), "2.5");
/// assert_eq!(Value::Real(f64::INFINITY).to_string(), "inf");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
