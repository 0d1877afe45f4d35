//! Driving port for calculation reads.

use async_trait::async_trait;

use crate::domain::{Calculation, CalculationId, Error, UserId};

/// Read-side use-cases for calculations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationsQuery: Send + Sync {
    /// Fetch one calculation.
    async fn get(&self, id: &CalculationId) -> Result<Calculation, Error>;

    /// Every calculation owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Calculation>, Error>;
}

/// Fixture query backed by no storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCalculationsQuery;

#[async_trait]
impl CalculationsQuery for FixtureCalculationsQuery {
    async fn get(&self, id: &CalculationId) -> Result<Calculation, Error> {
        Err(Error::not_found(format!("calculation {id} not found")))
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Calculation>, Error> {
        Ok(Vec::new())
    }
}
