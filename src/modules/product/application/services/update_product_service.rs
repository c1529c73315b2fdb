use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryQuery;
use crate::product::application::{
    domain::entities::{CategoryRef, Product},
    ports::{
        incoming::use_cases::{UpdateProductCommand, UpdateProductError, UpdateProductUseCase},
        outgoing::{ProductRepository, ProductRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProductService<C, R>
where
    C: CategoryQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    categories: C,
    repository: R,
}

impl<C, R> UpdateProductService<C, R>
where
    C: CategoryQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    pub fn new(categories: C, repository: R) -> Self {
        Self {
            categories,
            repository,
        }
    }
}

#[async_trait]
impl<C, R> UpdateProductUseCase for UpdateProductService<C, R>
where
    C: CategoryQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError> {
        let category = self
            .categories
            .find_by_id(command.draft().category_id)
            .await
            .map_err(|e| UpdateProductError::QueryError(e.to_string()))?
            .ok_or(UpdateProductError::CategoryNotFound)?;

        let (id, draft) = command.into_parts();

        self.repository
            .update_product(id, draft, CategoryRef::from(&category))
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}
