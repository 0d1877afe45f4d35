//! User account services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    RegisterUserRequest, UpdateUserRequest, UserPersistenceError, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{Error, User, UserId};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::Conflict { message } => {
            Error::conflict(format!("user already exists: {message}"))
        }
    }
}

fn user_not_found(id: &UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// Account service implementing both user driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    /// Create a service over `user_repo`.
    pub fn new(user_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn load(&self, id: &UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error> {
        let user = User::register(request.username, request.email, self.clock.utc());
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_repository_error)?;
        Ok(user)
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let mut user = self.load(&request.id).await?;
        user.update_profile(request.username, request.email, self.clock.utc());

        let updated = self
            .user_repo
            .update(&user)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(user_not_found(&request.id));
        }
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        let deleted = self
            .user_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get(&self, id: &UserId) -> Result<User, Error> {
        self.load(id).await
    }
}
