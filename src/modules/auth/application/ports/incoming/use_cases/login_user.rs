use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserView;

// ========================= Login Command =========================
#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Invalid email or password")]
    MissingCredentials,
}

impl LoginCommand {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, LoginCommandError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(LoginCommandError::MissingCredentials)?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(LoginCommandError::MissingCredentials)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Output / Error =====================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginOutput {
    pub user: UserView,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Email is not registered")]
    EmailNotRegistered,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
