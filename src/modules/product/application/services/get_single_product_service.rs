use async_trait::async_trait;

use crate::product::application::{
    domain::entities::Product,
    ports::{
        incoming::use_cases::{GetSingleProductError, GetSingleProductUseCase},
        outgoing::ProductQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProductUseCase for GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Product, GetSingleProductError> {
        self.query
            .find_by_slug(slug)
            .await
            .map_err(|e| GetSingleProductError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProductError::ProductNotFound)
    }
}
