//! Two-operand arithmetic endpoints.
//!
//! ```text
//! POST /add      {"a": 1, "b": 2}  -> {"result": 3.0}
//! POST /subtract {"a": 1, "b": 2}  -> {"result": -1.0}
//! POST /multiply {"a": 1, "b": 2}  -> {"result": 2.0}
//! POST /divide   {"a": 1, "b": 0}  -> 400 {"error": "Cannot divide by zero!"}
//! ```
//!
//! These share nothing with the calculation resource; nothing is stored.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::operations::{self, OperationError};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;

/// Operands for a two-operand operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct OperandsRequest {
    /// Left operand.
    #[serde(default)]
    #[schema(value_type = f64, example = 10.5)]
    pub a: Option<Value>,
    /// Right operand; must be non-zero for `/divide`.
    #[serde(default)]
    #[schema(value_type = f64, example = 3)]
    pub b: Option<Value>,
}

/// Result of a two-operand operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    /// Outcome of the operation.
    pub result: f64,
}

fn operand(value: Option<&Value>, field: &str) -> ApiResult<f64> {
    value.and_then(Value::as_f64).ok_or_else(|| {
        Error::invalid_request("Both a and b must be numbers.")
            .with_details(json!({ "field": field, "code": "invalid_number" }))
    })
}

fn operands(payload: &OperandsRequest) -> ApiResult<(f64, f64)> {
    Ok((
        operand(payload.a.as_ref(), "a")?,
        operand(payload.b.as_ref(), "b")?,
    ))
}

fn respond(result: f64) -> ApiResult<web::Json<OperationResponse>> {
    if result.is_finite() {
        Ok(web::Json(OperationResponse { result }))
    } else {
        Err(Error::invalid_request("Result is not a finite number.")
            .with_details(json!({ "code": "non_finite_result" })))
    }
}

impl From<OperationError> for Error {
    fn from(value: OperationError) -> Self {
        match value {
            OperationError::DivisionByZero => Error::invalid_request(value.to_string())
                .with_details(json!({ "field": "b", "code": "division_by_zero" })),
        }
    }
}

/// Add two numbers.
#[utoipa::path(
    post,
    path = "/add",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Sum", body = OperationResponse),
        (status = 400, description = "Invalid operands", body = ErrorSchema)
    ),
    tags = ["arithmetic"],
    operation_id = "add"
)]
#[post("/add")]
pub async fn add(payload: web::Json<OperandsRequest>) -> ApiResult<web::Json<OperationResponse>> {
    let (a, b) = operands(&payload)?;
    respond(operations::add(a, b))
}

/// Subtract `b` from `a`.
#[utoipa::path(
    post,
    path = "/subtract",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Difference", body = OperationResponse),
        (status = 400, description = "Invalid operands", body = ErrorSchema)
    ),
    tags = ["arithmetic"],
    operation_id = "subtract"
)]
#[post("/subtract")]
pub async fn subtract(
    payload: web::Json<OperandsRequest>,
) -> ApiResult<web::Json<OperationResponse>> {
    let (a, b) = operands(&payload)?;
    respond(operations::subtract(a, b))
}

/// Multiply two numbers.
#[utoipa::path(
    post,
    path = "/multiply",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Product", body = OperationResponse),
        (status = 400, description = "Invalid operands", body = ErrorSchema)
    ),
    tags = ["arithmetic"],
    operation_id = "multiply"
)]
#[post("/multiply")]
pub async fn multiply(
    payload: web::Json<OperandsRequest>,
) -> ApiResult<web::Json<OperationResponse>> {
    let (a, b) = operands(&payload)?;
    respond(operations::multiply(a, b))
}

/// Divide `a` by `b`.
#[utoipa::path(
    post,
    path = "/divide",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Quotient", body = OperationResponse),
        (status = 400, description = "Invalid operands or zero divisor", body = ErrorSchema)
    ),
    tags = ["arithmetic"],
    operation_id = "divide"
)]
#[post("/divide")]
pub async fn divide(payload: web::Json<OperandsRequest>) -> ApiResult<web::Json<OperationResponse>> {
    let (a, b) = operands(&payload)?;
    respond(operations::divide(a, b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::error::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn call(path: &str, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config())
                .service(add)
                .service(subtract)
                .service(multiply)
                .service(divide),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri(path)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[case("/add", 2.0, 3.0, 5.0)]
    #[case("/subtract", 5.0, 3.0, 2.0)]
    #[case("/multiply", 2.0, 3.0, 6.0)]
    #[case("/divide", 6.0, 3.0, 2.0)]
    #[case("/divide", -6.0, 3.0, -2.0)]
    #[actix_web::test]
    async fn operations_return_result(
        #[case] path: &str,
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected: f64,
    ) {
        let (status, body) = call(path, json!({ "a": a, "b": b })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": expected }));
    }

    #[rstest]
    #[actix_web::test]
    async fn integers_are_accepted() {
        let (status, body) = call("/add", json!({ "a": 2, "b": 3 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!(5.0));
    }

    #[rstest]
    #[actix_web::test]
    async fn divide_by_zero_is_rejected() {
        let (status, body) = call("/divide", json!({ "a": 6, "b": 0 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Cannot divide by zero!");
    }

    #[rstest]
    #[case(json!({ "a": "two", "b": 3 }), "a")]
    #[case(json!({ "a": 2, "b": null }), "b")]
    #[case(json!({ "a": 2 }), "b")]
    #[case(json!({ "a": true, "b": 1 }), "a")]
    #[actix_web::test]
    async fn non_numeric_operands_are_rejected(#[case] body: Value, #[case] field: &str) {
        let (status, payload) = call("/multiply", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Both a and b must be numbers.");
        assert_eq!(payload["details"]["field"], field);
    }
}
