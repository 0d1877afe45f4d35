//! Driving port for user account mutations.

use async_trait::async_trait;

use crate::domain::{Email, Error, User, UserId, Username};

/// Register a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// Requested username.
    pub username: Username,
    /// Requested email address.
    pub email: Email,
}

/// Change profile fields; absent fields stay as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Account to change.
    pub id: UserId,
    /// Replacement username.
    pub username: Option<Username>,
    /// Replacement email address.
    pub email: Option<Email>,
}

/// Use-cases that change user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create an account; fails with `conflict` when the username or email
    /// is taken.
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error>;

    /// Apply a profile change and return the stored account.
    async fn update(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Delete the account and every calculation it owns.
    async fn delete(&self, id: &UserId) -> Result<(), Error>;
}

/// Fixture command that builds users without storing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersCommand;

#[async_trait]
impl UsersCommand for FixtureUsersCommand {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error> {
        Ok(User::register(
            request.username,
            request.email,
            chrono::Utc::now(),
        ))
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<User, Error> {
        Err(Error::not_found(format!("user {} not found", request.id)))
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        Err(Error::not_found(format!("user {id} not found")))
    }
}
