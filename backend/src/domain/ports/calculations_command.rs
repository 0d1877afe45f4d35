//! Driving port for calculation mutations.
//!
//! Inbound adapters hand over requests that already passed boundary
//! validation; implementations still run the entity checks before anything
//! is stored.

use async_trait::async_trait;

use crate::domain::{Calculation, CalculationId, CalculationKind, Error, UserId};

/// Create a calculation of `kind` owned by `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCalculationRequest {
    /// Owner; must exist.
    pub user_id: UserId,
    /// Variant to build.
    pub kind: CalculationKind,
    /// Operands in order.
    pub inputs: Vec<f64>,
}

/// Partially update a calculation. The type tag cannot change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCalculationRequest {
    /// Calculation to change.
    pub id: CalculationId,
    /// Replacement operands; `None` re-evaluates the stored ones.
    pub inputs: Option<Vec<f64>>,
}

/// Use-cases that change stored calculations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationsCommand: Send + Sync {
    /// Build, evaluate and persist a calculation.
    async fn create(&self, request: CreateCalculationRequest) -> Result<Calculation, Error>;

    /// Replace inputs (when supplied) and re-evaluate.
    async fn update(&self, request: UpdateCalculationRequest) -> Result<Calculation, Error>;

    /// Remove a calculation.
    async fn delete(&self, id: &CalculationId) -> Result<(), Error>;
}

/// Fixture command that evaluates without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCalculationsCommand;

#[async_trait]
impl CalculationsCommand for FixtureCalculationsCommand {
    async fn create(&self, request: CreateCalculationRequest) -> Result<Calculation, Error> {
        let mut calculation = Calculation::new(
            request.kind,
            request.user_id,
            request.inputs,
            chrono::Utc::now(),
        );
        calculation.compute_result()?;
        Ok(calculation)
    }

    async fn update(&self, request: UpdateCalculationRequest) -> Result<Calculation, Error> {
        Err(Error::not_found(format!(
            "calculation {} not found",
            request.id
        )))
    }

    async fn delete(&self, id: &CalculationId) -> Result<(), Error> {
        Err(Error::not_found(format!("calculation {id} not found")))
    }
}
