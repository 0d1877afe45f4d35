//! Calculation domain services.
//!
//! The command service is the only path that stores calculations; it always
//! evaluates the entity first, so a record is never written without a
//! result that matches its inputs.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    CalculationPersistenceError, CalculationRepository, CalculationsCommand, CalculationsQuery,
    CreateCalculationRequest, UpdateCalculationRequest,
};
use crate::domain::{Calculation, CalculationId, Error, UserId};

fn map_repository_error(error: CalculationPersistenceError) -> Error {
    match error {
        CalculationPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("calculation repository unavailable: {message}"))
        }
        CalculationPersistenceError::Query { message } => {
            Error::internal(format!("calculation repository error: {message}"))
        }
        CalculationPersistenceError::UserNotFound { user_id } => Error::not_found("user not found")
            .with_details(json!({ "field": "user_id", "value": user_id })),
        CalculationPersistenceError::InvalidRecord { id, message } => {
            Error::invalid_request(message)
                .with_details(json!({ "code": "invalid_input", "calculation_id": id }))
        }
    }
}

fn calculation_not_found(id: &CalculationId) -> Error {
    Error::not_found(format!("calculation {id} not found"))
}

/// Calculation service implementing the command driving port.
#[derive(Clone)]
pub struct CalculationCommandService<R> {
    calculation_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CalculationCommandService<R> {
    /// Create a command service over `calculation_repo`.
    pub fn new(calculation_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            calculation_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> CalculationsCommand for CalculationCommandService<R>
where
    R: CalculationRepository,
{
    async fn create(&self, request: CreateCalculationRequest) -> Result<Calculation, Error> {
        let mut calculation = Calculation::new(
            request.kind,
            request.user_id,
            request.inputs,
            self.clock.utc(),
        );
        calculation.compute_result()?;

        self.calculation_repo
            .insert(&calculation)
            .await
            .map_err(map_repository_error)?;
        Ok(calculation)
    }

    async fn update(&self, request: UpdateCalculationRequest) -> Result<Calculation, Error> {
        let mut calculation = self
            .calculation_repo
            .find_by_id(&request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| calculation_not_found(&request.id))?;

        match request.inputs {
            Some(inputs) => {
                calculation.replace_inputs(inputs, self.clock.utc())?;
            }
            None => {
                calculation.compute_result()?;
            }
        }

        let updated = self
            .calculation_repo
            .update(&calculation)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(calculation_not_found(&request.id));
        }
        Ok(calculation)
    }

    async fn delete(&self, id: &CalculationId) -> Result<(), Error> {
        let deleted = self
            .calculation_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(calculation_not_found(id))
        }
    }
}

/// Calculation service implementing the query driving port.
#[derive(Clone)]
pub struct CalculationQueryService<R> {
    calculation_repo: Arc<R>,
}

impl<R> CalculationQueryService<R> {
    /// Create a query service over `calculation_repo`.
    pub fn new(calculation_repo: Arc<R>) -> Self {
        Self { calculation_repo }
    }
}

#[async_trait]
impl<R> CalculationsQuery for CalculationQueryService<R>
where
    R: CalculationRepository,
{
    async fn get(&self, id: &CalculationId) -> Result<Calculation, Error> {
        self.calculation_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| calculation_not_found(id))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Calculation>, Error> {
        self.calculation_repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "calculation_service_tests.rs"]
mod tests;
