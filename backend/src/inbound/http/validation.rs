//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` [`Error`] whose details name
//! the offending field and a stable code, so clients can branch without
//! matching on messages.

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidType,
    InvalidList,
    InvalidNumber,
    TooFewInputs,
    DivisionByZero,
    InvalidValue,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidType => "invalid_type",
            Self::InvalidList => "invalid_list",
            Self::InvalidNumber => "invalid_number",
            Self::TooFewInputs => "too_few_inputs",
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Build an `invalid_request` error tagged with `field` and `code`.
pub(crate) fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Like [`field_error`], also echoing the rejected value.
pub(crate) fn field_value_error(
    field: FieldName,
    code: ValidationCode,
    message: impl Into<String>,
    value: &Value,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value,
    }))
}

/// Like [`field_error`], pointing at one element of a list field.
pub(crate) fn field_index_error(
    field: FieldName,
    code: ValidationCode,
    message: impl Into<String>,
    index: usize,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "index": index,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Treat an absent field and an explicit `null` the same way.
pub(crate) fn require(value: Option<Value>, field: FieldName) -> Result<Value, Error> {
    match value {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(value) => Ok(value),
    }
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| {
        let name = field.as_str();
        field_value_error(
            field,
            ValidationCode::InvalidUuid,
            format!("{name} must be a valid UUID"),
            &Value::String(value.to_owned()),
        )
    })
}

/// Parse a JSON value that must be a UUID string.
pub(crate) fn parse_uuid_value(value: &Value, field: FieldName) -> Result<Uuid, Error> {
    match value.as_str() {
        Some(text) => parse_uuid(text, field),
        None => {
            let name = field.as_str();
            Err(field_value_error(
                field,
                ValidationCode::InvalidUuid,
                format!("{name} must be a valid UUID"),
                value,
            ))
        }
    }
}
