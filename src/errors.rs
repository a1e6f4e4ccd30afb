use num_bigint::BigUint;

// TYPES AND INTERFACES
// ================================================================================================

/// Errors returned by polynomial construction and arithmetic; all of these are
/// terminal input-validation failures detected before any computation runs.
pub enum PolynomError {
    /// Construction was given an empty coefficient list.
    EmptyCoefficients,
    /// The field order failed validation (must be at least 2).
    InvalidFieldOrder(BigUint),
    /// An operand's highest-degree coefficient is zero while its length is greater than 1.
    InvalidPolynomial,
    /// The divisor is identically the zero polynomial.
    DivisionByZero,
    /// Reversal was requested at a degree below the polynomial's own degree,
    /// which would require negative-degree terms.
    InvalidReversalDegree { requested: u32, degree: u32 },
    /// The constant term of the series to invert has no multiplicative inverse
    /// modulo the field order; cannot happen when the field order is prime.
    NonInvertibleConstantTerm,
    /// The random source failed while drawing a coefficient.
    RandomGenerationFailure(rand::Error),
}

// COMMON TRAIT IMPLEMENTATIONS
// ================================================================================================

impl std::fmt::Display for PolynomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolynomError::EmptyCoefficients => {
                write!(f, "a polynomial must have at least one coefficient")
            },
            PolynomError::InvalidFieldOrder(order) => {
                write!(f, "{} is not a valid field order", order)
            },
            PolynomError::InvalidPolynomial => {
                write!(f, "invalid polynomial: highest-degree coefficient is zero")
            },
            PolynomError::DivisionByZero => {
                write!(f, "cannot divide by the zero polynomial")
            },
            PolynomError::InvalidReversalDegree { requested, degree } => {
                write!(f, "cannot reverse a degree {} polynomial at degree {}", degree, requested)
            },
            PolynomError::NonInvertibleConstantTerm => {
                write!(f, "constant term is not invertible modulo the field order")
            },
            PolynomError::RandomGenerationFailure(err) => {
                write!(f, "random source failure: {}", err)
            },
        }
    }
}

impl std::fmt::Debug for PolynomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self);
    }
}

impl std::error::Error for PolynomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolynomError::RandomGenerationFailure(err) => Some(err),
            _ => None,
        }
    }
}
