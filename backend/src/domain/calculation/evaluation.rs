//! Evaluation rules for the four calculation variants.
//!
//! Subtraction and division are strict left folds, so input order matters
//! and is never rearranged.

use super::error::{CalculationError, InvalidInputReason};

/// Pure evaluation rule shared by every variant.
pub type Evaluator = fn(&[f64]) -> Result<f64, CalculationError>;

fn split_operands(inputs: &[f64]) -> Result<(f64, &[f64]), CalculationError> {
    match inputs {
        [first, rest @ ..] if !rest.is_empty() => Ok((*first, rest)),
        _ => Err(CalculationError::invalid_input(
            InvalidInputReason::TooFewInputs { len: inputs.len() },
        )),
    }
}

/// Sum of all inputs.
pub fn add(inputs: &[f64]) -> Result<f64, CalculationError> {
    let (first, rest) = split_operands(inputs)?;
    Ok(rest.iter().fold(first, |acc, value| acc + value))
}

/// First input minus each later input, in order.
pub fn subtract(inputs: &[f64]) -> Result<f64, CalculationError> {
    let (first, rest) = split_operands(inputs)?;
    Ok(rest.iter().fold(first, |acc, value| acc - value))
}

/// Product of all inputs.
pub fn multiply(inputs: &[f64]) -> Result<f64, CalculationError> {
    split_operands(inputs)?;
    Ok(inputs.iter().fold(1.0, |acc, value| acc * value))
}

/// First input divided by each later input, in order.
///
/// Stops at the first zero divisor and reports its position.
pub fn divide(inputs: &[f64]) -> Result<f64, CalculationError> {
    let (first, rest) = split_operands(inputs)?;
    rest.iter()
        .enumerate()
        .try_fold(first, |acc, (offset, divisor)| {
            if *divisor == 0.0 {
                Err(CalculationError::DivisionByZero { index: offset + 1 })
            } else {
                Ok(acc / divisor)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[10.0, 5.0, 3.5], 18.5)]
    #[case(&[-1.0, 1.0], 0.0)]
    fn add_sums_every_input(#[case] inputs: &[f64], #[case] expected: f64) {
        assert_eq!(add(inputs), Ok(expected));
    }

    #[rstest]
    #[case(&[20.0, 5.0, 3.0], 12.0)]
    #[case(&[3.0, 5.0, 20.0], -22.0)]
    fn subtract_folds_left(#[case] inputs: &[f64], #[case] expected: f64) {
        assert_eq!(subtract(inputs), Ok(expected));
    }

    #[rstest]
    fn multiply_takes_the_product() {
        assert_eq!(multiply(&[2.0, 3.0, 4.0]), Ok(24.0));
    }

    #[rstest]
    fn divide_folds_left() {
        assert_eq!(divide(&[100.0, 2.0, 5.0]), Ok(10.0));
    }

    #[rstest]
    fn divide_accepts_zero_numerator() {
        assert_eq!(divide(&[0.0, 4.0]), Ok(0.0));
    }

    #[rstest]
    #[case(&[50.0, 0.0, 5.0], 1)]
    #[case(&[100.0, 5.0, 0.0, 2.0], 2)]
    #[case(&[50.0, 5.0, 0.0], 2)]
    #[case(&[50.0, 5.0, -0.0], 2)]
    fn divide_reports_first_zero_divisor(#[case] inputs: &[f64], #[case] index: usize) {
        assert_eq!(
            divide(inputs),
            Err(CalculationError::DivisionByZero { index })
        );
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[10.0])]
    fn every_rule_rejects_short_inputs(#[case] inputs: &[f64]) {
        let expected = Err(CalculationError::invalid_input(
            InvalidInputReason::TooFewInputs { len: inputs.len() },
        ));
        for rule in [add as Evaluator, subtract, multiply, divide] {
            assert_eq!(rule(inputs), expected);
        }
    }
}
