use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::entities::{Product, ProductFilter, ProductPhoto};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the catalog. Every listing is newest first unless stated otherwise.
#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductQueryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError>;
    /// `None` when the product does not exist or has no photo.
    async fn find_photo(&self, id: Uuid) -> Result<Option<ProductPhoto>, ProductQueryError>;
    async fn count(&self) -> Result<u64, ProductQueryError>;
    async fn list_latest(&self, limit: u64) -> Result<Vec<Product>, ProductQueryError>;
    /// `page` is zero-based.
    async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Product>, ProductQueryError>;
    async fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductQueryError>;
    /// Case-insensitive substring match on name or description.
    async fn search(&self, keyword: &str) -> Result<Vec<Product>, ProductQueryError>;
    async fn list_related(
        &self,
        product_id: Uuid,
        category_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Product>, ProductQueryError>;
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, ProductQueryError>;
}
