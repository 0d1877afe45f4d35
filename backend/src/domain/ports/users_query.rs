//! Driving port for user lookups.
//!
//! Inbound adapters fetch accounts through this port without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use-cases for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user.
    async fn get(&self, id: &UserId) -> Result<User, Error>;
}

/// Fixture query backed by no storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn get(&self, id: &UserId) -> Result<User, Error> {
        Err(Error::not_found(format!("user {id} not found")))
    }
}
