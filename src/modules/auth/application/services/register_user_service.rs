use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{Role, UserView},
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
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
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashError(e.to_string()))?;

        let data = CreateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            phone: command.phone().to_string(),
            address: command.address().to_string(),
            answer: command.answer().to_string(),
            role: Role::User,
        };

        // The unique index still guards against two concurrent sign-ups.
        let user = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyRegistered,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(UserView::from(user))
    }
}
