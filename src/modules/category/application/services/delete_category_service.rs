use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::{
    incoming::use_cases::{DeleteCategoryError, DeleteCategoryUseCase},
    outgoing::{CategoryRepository, CategoryRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCategoryUseCase for DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCategoryError> {
        self.repository
            .delete_category(id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::CategoryNotFound,
                CategoryRepositoryError::CategoryInUse => DeleteCategoryError::CategoryInUse,
                other => DeleteCategoryError::RepositoryError(other.to_string()),
            })
    }
}
