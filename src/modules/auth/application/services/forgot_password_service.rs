use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{ForgotPasswordCommand, ForgotPasswordError, ForgotPasswordUseCase},
    outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

pub struct ForgotPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ForgotPasswordService<Q, R>
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
impl<Q, R> ForgotPasswordUseCase for ForgotPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ForgotPasswordCommand) -> Result<(), ForgotPasswordError> {
        let user = self
            .query
            .find_by_email_and_answer(command.email(), command.answer())
            .await
            .map_err(|e| ForgotPasswordError::QueryError(e.to_string()))?
            .ok_or(ForgotPasswordError::WrongEmailOrAnswer)?;

        let hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ForgotPasswordError::HashError(e.to_string()))?;

        self.repository
            .update_password(user.id, hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ForgotPasswordError::WrongEmailOrAnswer,
                other => ForgotPasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::{
        domain::entities::{Role, User},
        ports::outgoing::{CreateUserData, UpdateUserData, UserQueryError},
    };
    use crate::tests::support::auth_helper::{sample_user, FakePasswordHasher};
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        pub Query {}
        #[async_trait]
        impl UserQuery for Query {
            async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
            async fn find_by_email_and_answer(
                &self,
                email: &str,
                answer: &str,
            ) -> Result<Option<User>, UserQueryError>;
        }
    }

    mock! {
        pub Repository {}
        #[async_trait]
        impl UserRepository for Repository {
            async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
            async fn update_user(&self, data: UpdateUserData) -> Result<User, UserRepositoryError>;
            async fn update_password(
                &self,
                user_id: Uuid,
                new_password_hash: String,
            ) -> Result<(), UserRepositoryError>;
            async fn set_role_by_email(&self, email: &str, role: Role) -> Result<(), UserRepositoryError>;
        }
    }

    fn command() -> ForgotPasswordCommand {
        ForgotPasswordCommand::new(
            Some("jane@example.com".into()),
            Some("blue".into()),
            Some("brandnew".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn matching_email_and_answer_stores_new_hash() {
        let user = sample_user();
        let user_id = user.id;

        let mut query = MockQuery::new();
        query
            .expect_find_by_email_and_answer()
            .with(eq("jane@example.com"), eq("blue"))
            .times(1)
            .returning(move |_, _| Ok(Some(user.clone())));

        let mut repository = MockRepository::new();
        repository
            .expect_update_password()
            .with(eq(user_id), eq("hashed:brandnew".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ForgotPasswordService::new(query, repository, Arc::new(FakePasswordHasher));

        assert!(service.execute(command()).await.is_ok());
    }

    #[tokio::test]
    async fn wrong_answer_changes_nothing() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_email_and_answer()
            .returning(|_, _| Ok(None));

        let mut repository = MockRepository::new();
        repository.expect_update_password().times(0);

        let service = ForgotPasswordService::new(query, repository, Arc::new(FakePasswordHasher));

        let result = service.execute(command()).await;
        assert!(matches!(result, Err(ForgotPasswordError::WrongEmailOrAnswer)));
    }
}
