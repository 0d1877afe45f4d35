//! Domain entities, ports and services.
//!
//! Purpose: hold the calculation and user models plus the services that
//! drive them, independent of HTTP and storage.
//!
//! Public surface:
//! - Calculation, CalculationKind, CalculationError: the entity, its variant
//!   tag and entity-level failures.
//! - User, Username, Email: account owning calculations.
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: per-request correlation identifier.

pub mod calculation;
mod calculation_service;
pub mod error;
pub mod operations;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::calculation::{
    Calculation, CalculationError, CalculationId, CalculationKind, InvalidInputReason,
    decode_inputs, encode_inputs,
};
pub use self::calculation_service::{CalculationCommandService, CalculationQueryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EMAIL_MAX, Email, USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use calculator::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
