use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateCategoryCommand) -> Result<Category, UpdateCategoryError> {
        self.repository
            .update_category(command.id(), command.name().clone())
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => UpdateCategoryError::CategoryNotFound,
                CategoryRepositoryError::CategoryAlreadyExists => UpdateCategoryError::NameTaken,
                other => UpdateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
