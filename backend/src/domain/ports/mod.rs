//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage;
//! driving ports (`*Command`, `*Query`) are what inbound adapters call. Each
//! port ships a fixture implementation so the server runs without a
//! database.

mod macros;
pub(crate) use macros::define_port_error;

mod calculation_repository;
mod calculations_command;
mod calculations_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use calculation_repository::MockCalculationRepository;
pub use calculation_repository::{CalculationPersistenceError, CalculationRepository};
#[cfg(test)]
pub use calculations_command::MockCalculationsCommand;
pub use calculations_command::{
    CalculationsCommand, CreateCalculationRequest, FixtureCalculationsCommand,
    UpdateCalculationRequest,
};
#[cfg(test)]
pub use calculations_query::MockCalculationsQuery;
pub use calculations_query::{CalculationsQuery, FixtureCalculationsQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{FixtureUsersCommand, RegisterUserRequest, UpdateUserRequest, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
