//! Boundary schemas for the calculation resource.
//!
//! Request bodies arrive as loosely typed JSON so each field can be rejected
//! with its own message. Per-field checks run first (type, inputs, user_id),
//! then the cross-field rules: at least two inputs, and for division no zero
//! divisor. The entity repeats the arithmetic checks on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    Calculation, CalculationError, CalculationKind, Error, InvalidInputReason, UserId,
    decode_inputs,
};
use crate::inbound::http::validation::{
    FieldName, ValidationCode, field_error, field_index_error, field_value_error, parse_uuid_value,
    require,
};

const TYPE: FieldName = FieldName::new("type");
const INPUTS: FieldName = FieldName::new("inputs");
const USER_ID: FieldName = FieldName::new("user_id");

/// Request body for `POST /api/v1/calculations`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculationCreateRequest {
    /// Variant tag, matched case-insensitively.
    #[serde(rename = "type", default)]
    #[schema(value_type = String, example = "addition")]
    pub kind: Option<Value>,
    /// Ordered operands; at least two.
    #[serde(default)]
    #[schema(value_type = Vec<f64>, example = json!([10.5, 3, 2]))]
    pub inputs: Option<Value>,
    /// Owning user.
    #[serde(default)]
    #[schema(value_type = String, format = "uuid")]
    pub user_id: Option<Value>,
}

/// Request body for `PUT /api/v1/calculations/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculationUpdateRequest {
    /// Replacement operands; omit to keep the stored ones.
    #[serde(default)]
    #[schema(value_type = Option<Vec<f64>>, example = json!([42, 7]))]
    pub inputs: Option<Value>,
}

/// A creation request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationCreate {
    /// Parsed variant tag.
    pub kind: CalculationKind,
    /// At least two operands, with no zero divisor for division.
    pub inputs: Vec<f64>,
    /// Owner of the new calculation.
    pub user_id: UserId,
}

/// An update request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationUpdate {
    /// Replacement operands, when supplied.
    pub inputs: Option<Vec<f64>>,
}

/// Calculation as returned to clients.
///
/// Every field is mandatory; a calculation without a computed result cannot
/// be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    /// Calculation identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Lowercase variant tag.
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "addition")]
    pub kind: CalculationKind,
    /// Operands in order.
    pub inputs: Vec<f64>,
    /// Value of the fold over `inputs`.
    pub result: f64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last input change.
    pub updated_at: DateTime<Utc>,
}

fn parse_kind(value: &Value) -> Result<CalculationKind, Error> {
    value
        .as_str()
        .and_then(|tag| CalculationKind::parse_tag(tag).ok())
        .ok_or_else(|| {
            let allowed = CalculationKind::sorted_tags().join(", ");
            field_value_error(
                TYPE,
                ValidationCode::InvalidType,
                format!("Type must be one of: {allowed}"),
                value,
            )
        })
}

fn parse_inputs(value: &Value) -> Result<Vec<f64>, Error> {
    decode_inputs(value).map_err(|err| match err {
        CalculationError::InvalidInput {
            reason: InvalidInputReason::NonNumeric { index },
        } => field_index_error(
            INPUTS,
            ValidationCode::InvalidNumber,
            "Input should be a valid number",
            index,
        ),
        _ => field_error(
            INPUTS,
            ValidationCode::InvalidList,
            "Input should be a valid list",
        ),
    })
}

fn check_input_count(inputs: &[f64]) -> Result<(), Error> {
    if inputs.len() < 2 {
        return Err(field_error(
            INPUTS,
            ValidationCode::TooFewInputs,
            "At least two numbers are required for calculation",
        ));
    }
    Ok(())
}

fn check_divisors(kind: CalculationKind, inputs: &[f64]) -> Result<(), Error> {
    if kind != CalculationKind::Division {
        return Ok(());
    }
    match inputs.iter().skip(1).position(|divisor| *divisor == 0.0) {
        Some(offset) => Err(field_index_error(
            INPUTS,
            ValidationCode::DivisionByZero,
            "Cannot divide by zero",
            offset + 1,
        )),
        None => Ok(()),
    }
}

impl TryFrom<CalculationCreateRequest> for CalculationCreate {
    type Error = Error;

    fn try_from(request: CalculationCreateRequest) -> Result<Self, Self::Error> {
        let kind = parse_kind(&require(request.kind, TYPE)?)?;
        let inputs = parse_inputs(&require(request.inputs, INPUTS)?)?;
        let user_id = UserId::from_uuid(parse_uuid_value(
            &require(request.user_id, USER_ID)?,
            USER_ID,
        )?);

        check_input_count(&inputs)?;
        check_divisors(kind, &inputs)?;

        Ok(Self {
            kind,
            inputs,
            user_id,
        })
    }
}

impl TryFrom<CalculationUpdateRequest> for CalculationUpdate {
    type Error = Error;

    fn try_from(request: CalculationUpdateRequest) -> Result<Self, Self::Error> {
        let inputs = match request.inputs {
            None | Some(Value::Null) => None,
            Some(value) => {
                let inputs = parse_inputs(&value)?;
                check_input_count(&inputs)?;
                Some(inputs)
            }
        };
        Ok(Self { inputs })
    }
}

impl TryFrom<&Calculation> for CalculationResponse {
    type Error = Error;

    fn try_from(calculation: &Calculation) -> Result<Self, Self::Error> {
        let result = calculation.result().ok_or_else(|| {
            Error::internal(format!(
                "calculation {} has no computed result",
                calculation.id()
            ))
        })?;
        Ok(Self {
            id: *calculation.id().as_uuid(),
            user_id: *calculation.user_id().as_uuid(),
            kind: calculation.kind(),
            inputs: calculation.inputs().to_vec(),
            result,
            created_at: calculation.created_at(),
            updated_at: calculation.updated_at(),
        })
    }
}

#[cfg(test)]
#[path = "calculation_schemas_tests.rs"]
mod tests;
