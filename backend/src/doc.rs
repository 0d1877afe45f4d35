//! OpenAPI document for the calculator API.
//!
//! Served by Swagger UI at `/docs` in debug builds. Domain types are
//! described through the mirrors in [`crate::inbound::http::schemas`].

use utoipa::OpenApi;

use crate::inbound::http::arithmetic::{OperandsRequest, OperationResponse};
use crate::inbound::http::calculation_schemas::{
    CalculationCreateRequest, CalculationResponse, CalculationUpdateRequest,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{RegisterUserBody, UpdateUserBody, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Users, stored calculations and two-operand arithmetic."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::calculations::create_calculation,
        crate::inbound::http::calculations::get_calculation,
        crate::inbound::http::calculations::update_calculation,
        crate::inbound::http::calculations::delete_calculation,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_user_calculations,
        crate::inbound::http::arithmetic::add,
        crate::inbound::http::arithmetic::subtract,
        crate::inbound::http::arithmetic::multiply,
        crate::inbound::http::arithmetic::divide,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CalculationCreateRequest,
        CalculationUpdateRequest,
        CalculationResponse,
        RegisterUserBody,
        UpdateUserBody,
        UserResponse,
        OperandsRequest,
        OperationResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "calculations", description = "Stored calculations"),
        (name = "users", description = "User accounts"),
        (name = "arithmetic", description = "Stateless two-operand operations"),
        (name = "health", description = "Readiness and liveness checks")
    )
)]
pub struct ApiDoc;
