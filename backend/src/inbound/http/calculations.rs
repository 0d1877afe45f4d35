//! Calculation resource HTTP handlers.
//!
//! ```text
//! POST   /api/v1/calculations {"type":"addition","inputs":[1,2],"user_id":"..."}
//! GET    /api/v1/calculations/{id}
//! PUT    /api/v1/calculations/{id} {"inputs":[3,4]}
//! DELETE /api/v1/calculations/{id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use tracing::debug;

use crate::domain::ports::{CreateCalculationRequest, UpdateCalculationRequest};
use crate::domain::{Calculation, CalculationId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::calculation_schemas::{
    CalculationCreate, CalculationCreateRequest, CalculationResponse, CalculationUpdate,
    CalculationUpdateRequest,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

const CALCULATION_ID: FieldName = FieldName::new("id");

fn parse_calculation_id(raw: &str) -> ApiResult<CalculationId> {
    parse_uuid(raw, CALCULATION_ID).map(CalculationId::from_uuid)
}

pub(crate) fn respond_with(calculation: &Calculation) -> ApiResult<web::Json<CalculationResponse>> {
    CalculationResponse::try_from(calculation).map(web::Json)
}

/// Validate, evaluate and store a calculation.
#[utoipa::path(
    post,
    path = "/api/v1/calculations",
    request_body = CalculationCreateRequest,
    responses(
        (status = 201, description = "Calculation created", body = CalculationResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owning user not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "createCalculation"
)]
#[post("/calculations")]
pub async fn create_calculation(
    state: web::Data<HttpState>,
    payload: web::Json<CalculationCreateRequest>,
) -> ApiResult<HttpResponse> {
    let CalculationCreate {
        kind,
        inputs,
        user_id,
    } = CalculationCreate::try_from(payload.into_inner())?;

    let calculation = state
        .calculations
        .create(CreateCalculationRequest {
            user_id,
            kind,
            inputs,
        })
        .await?;
    debug!(calculation_id = %calculation.id(), kind = %calculation.kind(), "calculation created");

    let body = CalculationResponse::try_from(&calculation)?;
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/api/v1/calculations/{}", calculation.id()),
        ))
        .json(body))
}

/// Fetch one calculation.
#[utoipa::path(
    get,
    path = "/api/v1/calculations/{id}",
    params(("id" = String, Path, description = "Calculation identifier")),
    responses(
        (status = 200, description = "Calculation", body = CalculationResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "getCalculation"
)]
#[get("/calculations/{id}")]
pub async fn get_calculation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CalculationResponse>> {
    let id = parse_calculation_id(&path.into_inner())?;
    let calculation = state.calculations_query.get(&id).await?;
    respond_with(&calculation)
}

/// Replace a calculation's inputs and re-evaluate it.
#[utoipa::path(
    put,
    path = "/api/v1/calculations/{id}",
    params(("id" = String, Path, description = "Calculation identifier")),
    request_body = CalculationUpdateRequest,
    responses(
        (status = 200, description = "Calculation updated", body = CalculationResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "updateCalculation"
)]
#[put("/calculations/{id}")]
pub async fn update_calculation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CalculationUpdateRequest>,
) -> ApiResult<web::Json<CalculationResponse>> {
    let id = parse_calculation_id(&path.into_inner())?;
    let CalculationUpdate { inputs } = CalculationUpdate::try_from(payload.into_inner())?;

    let calculation = state
        .calculations
        .update(UpdateCalculationRequest { id, inputs })
        .await?;
    respond_with(&calculation)
}

/// Delete a calculation.
#[utoipa::path(
    delete,
    path = "/api/v1/calculations/{id}",
    params(("id" = String, Path, description = "Calculation identifier")),
    responses(
        (status = 204, description = "Calculation deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "deleteCalculation"
)]
#[delete("/calculations/{id}")]
pub async fn delete_calculation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_calculation_id(&path.into_inner())?;
    state.calculations.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "calculations_tests.rs"]
mod tests;
