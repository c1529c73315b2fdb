use async_trait::async_trait;

use crate::product::application::domain::entities::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Failed to fetch product: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProductUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Product, GetSingleProductError>;
}
