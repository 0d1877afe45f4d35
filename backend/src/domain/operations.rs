//! Two-operand arithmetic used by the convenience endpoints.
//!
//! Independent of the calculation entity: no persistence, no lists, and a
//! single divisor check.

use thiserror::Error;

/// Failure raised by [`divide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The divisor was zero.
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

/// `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`, rejecting a zero `b`.
///
/// # Errors
///
/// Returns [`OperationError::DivisionByZero`] when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, OperationError> {
    if b == 0.0 {
        return Err(OperationError::DivisionByZero);
    }
    Ok(a / b)
}
