//! Diesel and pool error translation shared by the repositories.
//!
//! Repositories intercept the constraint violations they care about and hand
//! everything else to [`map_basic_diesel_error`].

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the repository's connection constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection checkout failed");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => connection(message),
    }
}

/// Log a database error with its kind and constraint.
pub fn log_database_error(kind: &DatabaseErrorKind, info: &dyn DatabaseErrorInformation) {
    debug!(
        ?kind,
        message = info.message(),
        constraint = info.constraint_name(),
        "diesel operation failed"
    );
}

/// Map the Diesel failures that carry no repository-specific meaning.
pub fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match error {
        DieselError::DatabaseError(kind, info) => {
            log_database_error(&kind, info.as_ref());
            match kind {
                DatabaseErrorKind::ClosedConnection => connection("database connection error"),
                _ => query("database error"),
            }
        }
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::SerializationError(_) | DieselError::DeserializationError(_) => {
            debug!(%error, "diesel conversion failed");
            query("database value conversion error")
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            query("database error")
        }
    }
}
