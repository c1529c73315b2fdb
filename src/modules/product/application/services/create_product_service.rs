use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryQuery;
use crate::product::application::{
    domain::entities::{CategoryRef, Product},
    ports::{
        incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
        outgoing::ProductRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateProductService<C, R>
where
    C: CategoryQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    categories: C,
    repository: R,
}

impl<C, R> CreateProductService<C, R>
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
impl<C, R> CreateProductUseCase for CreateProductService<C, R>
where
    C: CategoryQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError> {
        let category = self
            .categories
            .find_by_id(command.draft().category_id)
            .await
            .map_err(|e| CreateProductError::QueryError(e.to_string()))?
            .ok_or(CreateProductError::CategoryNotFound)?;

        self.repository
            .create_product(command.into_draft(), CategoryRef::from(&category))
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))
    }
}
