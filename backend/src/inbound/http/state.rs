//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CalculationsCommand, CalculationsQuery, FixtureCalculationsCommand, FixtureCalculationsQuery,
    FixtureUsersCommand, FixtureUsersQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration, profile updates and deletion.
    pub users: Arc<dyn UsersCommand>,
    /// User lookups.
    pub users_query: Arc<dyn UsersQuery>,
    /// Calculation create, update and delete.
    pub calculations: Arc<dyn CalculationsCommand>,
    /// Calculation lookups and per-user listings.
    pub calculations_query: Arc<dyn CalculationsQuery>,
}

impl Default for HttpState {
    /// Fixture ports; nothing is persisted.
    fn default() -> Self {
        Self {
            users: Arc::new(FixtureUsersCommand),
            users_query: Arc::new(FixtureUsersQuery),
            calculations: Arc::new(FixtureCalculationsCommand),
            calculations_query: Arc::new(FixtureCalculationsQuery),
        }
    }
}
