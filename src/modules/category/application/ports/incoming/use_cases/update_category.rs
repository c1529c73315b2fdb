use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::{Category, CategoryName};

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    id: Uuid,
    name: CategoryName,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateCategoryCommandError {
    #[error("A valid name is required")]
    InvalidName,
}

impl UpdateCategoryCommand {
    pub fn new(id: Uuid, name: Option<String>) -> Result<Self, UpdateCategoryCommandError> {
        let name = CategoryName::parse(name).ok_or(UpdateCategoryCommandError::InvalidName)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &CategoryName {
        &self.name
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category already exists")]
    NameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCategoryCommand) -> Result<Category, UpdateCategoryError>;
}
