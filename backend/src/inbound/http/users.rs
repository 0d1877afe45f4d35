//! User account HTTP handlers.
//!
//! ```text
//! POST   /api/v1/users {"username":"ada","email":"ada@example.com"}
//! GET    /api/v1/users/{id}
//! PATCH  /api/v1/users/{id} {"email":"lovelace@example.com"}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/calculations
//! ```

use actix_web::{HttpResponse, delete, get, http::header, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{RegisterUserRequest, UpdateUserRequest};
use crate::domain::{Email, Error, User, UserId, UserValidationError, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::calculation_schemas::CalculationResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, ValidationCode, field_error, missing_field_error, parse_uuid,
};

const USER_ID: FieldName = FieldName::new("id");
const USERNAME: FieldName = FieldName::new("username");
const EMAIL: FieldName = FieldName::new("email");

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterUserBody {
    /// Unique, at most 50 characters.
    #[schema(example = "ada")]
    pub username: Option<String>,
    /// Unique, at most 100 characters.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Request body for `PATCH /api/v1/users/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserBody {
    /// New username; omit to keep the current one.
    pub username: Option<String>,
    /// New email; omit to keep the current one.
    pub email: Option<String>,
}

/// User as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// User identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Time of the last profile change.
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

fn map_user_validation_error(field: FieldName, err: UserValidationError) -> Error {
    field_error(field, ValidationCode::InvalidValue, err.to_string())
}

fn parse_username(raw: String) -> ApiResult<Username> {
    Username::new(raw).map_err(|err| map_user_validation_error(USERNAME, err))
}

fn parse_email(raw: String) -> ApiResult<Email> {
    Email::new(raw).map_err(|err| map_user_validation_error(EMAIL, err))
}

fn parse_user_id(raw: &str) -> ApiResult<UserId> {
    parse_uuid(raw, USER_ID).map(UserId::from_uuid)
}

fn parse_register_request(body: RegisterUserBody) -> ApiResult<RegisterUserRequest> {
    let username = body.username.ok_or_else(|| missing_field_error(USERNAME))?;
    let email = body.email.ok_or_else(|| missing_field_error(EMAIL))?;
    Ok(RegisterUserRequest {
        username: parse_username(username)?,
        email: parse_email(email)?,
    })
}

fn parse_update_request(id: UserId, body: UpdateUserBody) -> ApiResult<UpdateUserRequest> {
    Ok(UpdateUserRequest {
        id,
        username: body.username.map(parse_username).transpose()?,
        email: body.email.map(parse_email).transpose()?,
    })
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserBody,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username or email taken", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserBody>,
) -> ApiResult<HttpResponse> {
    let request = parse_register_request(payload.into_inner())?;
    let user = state.users.register(request).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/users/{}", user.id())))
        .json(UserResponse::from(&user)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.users_query.get(&id).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Update username and/or email.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Username or email taken", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path.into_inner())?;
    let request = parse_update_request(id, payload.into_inner())?;
    let user = state.users.update(request).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Delete a user and every calculation it owns.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    state.users.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List a user's calculations, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/calculations",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Calculations owned by the user", body = [CalculationResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserCalculations"
)]
#[get("/users/{id}/calculations")]
pub async fn list_user_calculations(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<CalculationResponse>>> {
    let id = parse_user_id(&path.into_inner())?;
    state.users_query.get(&id).await?;
    let calculations = state.calculations_query.list_for_user(&id).await?;
    calculations
        .iter()
        .map(CalculationResponse::try_from)
        .collect::<ApiResult<Vec<_>>>()
        .map(web::Json)
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
