//! Conversion between JSON-encoded input lists and operand slices.

use serde_json::Value;

use super::error::{CalculationError, InvalidInputReason};

/// Decode a stored or supplied JSON value into ordered operands.
///
/// Only arrays of JSON numbers are accepted; strings, booleans and nested
/// values are rejected rather than coerced.
pub fn decode_inputs(value: &Value) -> Result<Vec<f64>, CalculationError> {
    let items = value
        .as_array()
        .ok_or(CalculationError::invalid_input(InvalidInputReason::NotAList))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or(CalculationError::invalid_input(
                InvalidInputReason::NonNumeric { index },
            ))
        })
        .collect()
}

/// Encode operands as a JSON array, preserving order.
pub fn encode_inputs(inputs: &[f64]) -> Value {
    Value::Array(inputs.iter().copied().map(Value::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn integers_are_widened_to_floats() {
        assert_eq!(decode_inputs(&json!([1, 2.5, -3])), Ok(vec![1.0, 2.5, -3.0]));
    }

    #[rstest]
    #[case(json!("1,2"))]
    #[case(json!(3))]
    #[case(json!({"a": 1}))]
    #[case(Value::Null)]
    fn non_arrays_are_rejected(#[case] value: Value) {
        assert_eq!(
            decode_inputs(&value),
            Err(CalculationError::invalid_input(InvalidInputReason::NotAList))
        );
    }

    #[rstest]
    #[case(json!([1, "2"]), 1)]
    #[case(json!([true, 2]), 0)]
    #[case(json!([1, 2, null]), 2)]
    fn non_numeric_items_report_their_position(#[case] value: Value, #[case] index: usize) {
        assert_eq!(
            decode_inputs(&value),
            Err(CalculationError::invalid_input(
                InvalidInputReason::NonNumeric { index }
            ))
        );
    }

    #[rstest]
    fn short_lists_decode_without_complaint() {
        // Length is an evaluation precondition, not a decoding one.
        assert_eq!(decode_inputs(&json!([4])), Ok(vec![4.0]));
    }

    #[rstest]
    fn encoding_preserves_order() {
        assert_eq!(encode_inputs(&[3.0, 1.0, 2.0]), json!([3.0, 1.0, 2.0]));
    }
}
