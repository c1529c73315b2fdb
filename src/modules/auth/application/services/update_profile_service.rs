use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserView,
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateUserProfileUseCase},
        outgoing::{PasswordHasher, UpdateUserData, UserQuery, UserRepository, UserRepositoryError},
    },
};

/// Merges a partial profile change into the stored record.
///
/// Blank fields fall back to stored values, the email included. The password is only
/// rehashed when a new one was supplied.
pub struct UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateUserProfileUseCase for UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<UserView, UpdateProfileError> {
        let current = self
            .query
            .find_by_id(command.user_id().value())
            .await
            .map_err(|e| UpdateProfileError::QueryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        let new_hash = match command.password() {
            Some(password) => Some(
                self.hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateProfileError::HashError(e.to_string()))?,
            ),
            None => None,
        };

        let merged = command.changes().merge_into(&current, new_hash);

        let updated = self
            .repository
            .update_user(UpdateUserData::from(&merged))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => UpdateProfileError::EmailTaken,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(UserView::from(updated))
    }
}
