use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::{Category, CategoryName};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Category still has products")]
    CategoryInUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(&self, name: CategoryName) -> Result<Category, CategoryRepositoryError>;

    async fn update_category(
        &self,
        id: Uuid,
        name: CategoryName,
    ) -> Result<Category, CategoryRepositoryError>;

    async fn delete_category(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}
