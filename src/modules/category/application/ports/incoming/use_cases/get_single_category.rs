use async_trait::async_trait;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Failed to fetch category: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Category, GetSingleCategoryError>;
}
