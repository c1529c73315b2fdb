use async_trait::async_trait;

use super::register_user::present;

#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    email: String,
    answer: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForgotPasswordCommandError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Answer is required")]
    MissingAnswer,

    #[error("New password is required")]
    MissingNewPassword,
}

impl ForgotPasswordCommand {
    pub fn new(
        email: Option<String>,
        answer: Option<String>,
        new_password: Option<String>,
    ) -> Result<Self, ForgotPasswordCommandError> {
        let email = present(email).ok_or(ForgotPasswordCommandError::MissingEmail)?;
        let answer = present(answer).ok_or(ForgotPasswordCommandError::MissingAnswer)?;
        let new_password = new_password
            .filter(|p| !p.is_empty())
            .ok_or(ForgotPasswordCommandError::MissingNewPassword)?;

        Ok(Self {
            email: email.to_lowercase(),
            answer,
            new_password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Wrong email or answer")]
    WrongEmailOrAnswer,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ForgotPasswordCommand) -> Result<(), ForgotPasswordError>;
}
