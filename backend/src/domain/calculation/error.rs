//! Entity-level calculation failures.

use thiserror::Error;

/// Why a set of inputs cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    /// The stored or supplied value is not a sequence at all.
    #[error("Inputs must be a list of numbers.")]
    NotAList,
    /// The sequence holds something other than a number at `index`.
    #[error("Inputs must be a list of numbers.")]
    NonNumeric { index: usize },
    /// The sequence holds fewer than two operands.
    #[error("Inputs must be a list with at least two numbers.")]
    TooFewInputs { len: usize },
}

/// Failures raised while constructing or evaluating a calculation.
///
/// These checks run regardless of how the entity was built, so data that
/// bypassed boundary validation is still rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Inputs violate the entity preconditions.
    #[error("{reason}")]
    InvalidInput { reason: InvalidInputReason },
    /// A zero divisor was reached while folding `index`.
    #[error("Cannot divide by zero.")]
    DivisionByZero { index: usize },
    /// The type tag matches none of the known variants.
    #[error("Unsupported calculation type: {tag}")]
    UnsupportedType { tag: String },
    /// The fold overflowed to infinity, which JSON cannot carry.
    #[error("Result is not a finite number.")]
    NonFiniteResult,
}

impl CalculationError {
    /// Shorthand for an [`CalculationError::InvalidInput`] with `reason`.
    #[must_use]
    pub const fn invalid_input(reason: InvalidInputReason) -> Self {
        Self::InvalidInput { reason }
    }

    /// Stable snake_case identifier used in error details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DivisionByZero { .. } => "division_by_zero",
            Self::UnsupportedType { .. } => "unsupported_type",
            Self::NonFiniteResult => "non_finite_result",
        }
    }
}
