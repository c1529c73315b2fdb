use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::entities::{CategoryRef, Product, ProductDraft};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        draft: ProductDraft,
        category: CategoryRef,
    ) -> Result<Product, ProductRepositoryError>;

    /// A draft without a photo leaves the stored photo untouched.
    async fn update_product(
        &self,
        id: Uuid,
        draft: ProductDraft,
        category: CategoryRef,
    ) -> Result<Product, ProductRepositoryError>;

    async fn delete_product(&self, id: Uuid) -> Result<(), ProductRepositoryError>;
}
