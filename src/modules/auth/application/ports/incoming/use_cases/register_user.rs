use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::UserView;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
    phone: String,
    address: String,
    answer: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Email is not valid")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Address is required")]
    MissingAddress,

    #[error("Answer is required")]
    MissingAnswer,
}

impl RegisterUserCommand {
    /// Fields are checked in form order and the first failure is reported.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        answer: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = present(name).ok_or(RegisterUserCommandError::MissingName)?;
        let email = present(email).ok_or(RegisterUserCommandError::MissingEmail)?;
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }
        // Passwords are not trimmed; only emptiness is checked here.
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(RegisterUserCommandError::MissingPassword)?;
        let phone = present(phone).ok_or(RegisterUserCommandError::MissingPhone)?;
        let address = present(address).ok_or(RegisterUserCommandError::MissingAddress)?;
        let answer = present(answer).ok_or(RegisterUserCommandError::MissingAnswer)?;

        Ok(Self {
            name,
            email: email.to_lowercase(),
            password,
            phone,
            address,
            answer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn full() -> [Option<String>; 6] {
        [
            s("Jane"),
            s("Jane@Example.com"),
            s("secret1"),
            s("0800"),
            s("Street 1"),
            s("blue"),
        ]
    }

    fn build(f: [Option<String>; 6]) -> Result<RegisterUserCommand, RegisterUserCommandError> {
        let [name, email, password, phone, address, answer] = f;
        RegisterUserCommand::new(name, email, password, phone, address, answer)
    }

    #[test]
    fn valid_input_normalizes_email() {
        let cmd = build(full()).unwrap();
        assert_eq!(cmd.email(), "jane@example.com");
        assert_eq!(cmd.name(), "Jane");
    }

    #[test]
    fn first_missing_field_wins() {
        let mut fields = full();
        fields[3] = None;
        fields[5] = s("  ");
        assert_eq!(build(fields).unwrap_err(), RegisterUserCommandError::MissingPhone);

        let mut fields = full();
        fields[0] = s("");
        fields[1] = None;
        assert_eq!(build(fields).unwrap_err(), RegisterUserCommandError::MissingName);
    }

    #[test]
    fn each_field_has_its_own_message() {
        let expected = [
            "Name is required",
            "Email is required",
            "Password is required",
            "Phone number is required",
            "Address is required",
            "Answer is required",
        ];

        for (idx, message) in expected.iter().enumerate() {
            let mut fields = full();
            fields[idx] = None;
            assert_eq!(build(fields).unwrap_err().to_string(), *message);
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut fields = full();
        fields[1] = s("not-an-email");
        assert_eq!(build(fields).unwrap_err(), RegisterUserCommandError::InvalidEmail);
    }
}
