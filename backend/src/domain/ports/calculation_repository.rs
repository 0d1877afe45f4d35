//! Port for calculation persistence.
//!
//! All four variants live in one store keyed by [`CalculationId`]; adapters
//! persist the type tag next to the inputs so reloading yields the same
//! variant.

use async_trait::async_trait;

use crate::domain::{Calculation, CalculationId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by calculation repository adapters.
    pub enum CalculationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "calculation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "calculation repository query failed: {message}",
        /// The referenced owner does not exist.
        UserNotFound { user_id: String } => "user {user_id} not found",
        /// A stored record could not be turned back into an entity.
        InvalidRecord { id: String, message: String } =>
            "stored calculation {id} is invalid: {message}",
    }
}

/// Storage for calculations of every variant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Insert a new calculation.
    async fn insert(&self, calculation: &Calculation) -> Result<(), CalculationPersistenceError>;

    /// Fetch a calculation by identifier.
    async fn find_by_id(
        &self,
        id: &CalculationId,
    ) -> Result<Option<Calculation>, CalculationPersistenceError>;

    /// List a user's calculations, newest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Calculation>, CalculationPersistenceError>;

    /// Persist new inputs, result and `updated_at`.
    ///
    /// Returns `false` when no row matched.
    async fn update(&self, calculation: &Calculation) -> Result<bool, CalculationPersistenceError>;

    /// Delete a calculation. Returns `false` when no row matched.
    async fn delete(&self, id: &CalculationId) -> Result<bool, CalculationPersistenceError>;
}
