use async_trait::async_trait;

use crate::auth::application::domain::entities::{ProfileUpdate, UserId, UserView};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    changes: ProfileUpdate,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Password is required and must be 6 characters long")]
    PasswordTooShort,
}

impl UpdateProfileCommand {
    /// A blank password means "keep the current one". A non-blank password that is too
    /// short rejects the whole update, whatever else the request carries.
    pub fn new(
        user_id: UserId,
        changes: ProfileUpdate,
        password: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let password = password.filter(|p| !p.is_empty());

        if let Some(ref p) = password {
            if p.chars().count() < MIN_PASSWORD_LEN {
                return Err(UpdateProfileCommandError::PasswordTooShort);
            }
        }

        Ok(Self {
            user_id,
            changes,
            password,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn changes(&self) -> &ProfileUpdate {
        &self.changes
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email is already in use")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<UserView, UpdateProfileError>;
}
