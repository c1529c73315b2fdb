use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category still has products")]
    CategoryInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCategoryError>;
}
