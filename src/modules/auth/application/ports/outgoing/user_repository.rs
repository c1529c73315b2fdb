use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};

// Input DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub answer: String,
    pub role: Role,
}

// Full replacement of the mutable profile columns
#[derive(Debug, Clone)]
pub struct UpdateUserData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
}

impl From<&User> for UpdateUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(&self, data: UpdateUserData) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn set_role_by_email(&self, email: &str, role: Role) -> Result<(), UserRepositoryError>;
}
