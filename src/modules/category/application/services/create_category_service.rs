use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::{CategoryQuery, CategoryRepository, CategoryRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateCategoryUseCase for CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCategoryCommand) -> Result<Category, CreateCategoryError> {
        let existing = self
            .query
            .find_by_name(command.name().name())
            .await
            .map_err(|e| CreateCategoryError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(CreateCategoryError::CategoryAlreadyExists);
        }

        // A different name can still collide on the derived slug.
        self.repository
            .create_category(command.into_name())
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryAlreadyExists => {
                    CreateCategoryError::CategoryAlreadyExists
                }
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
