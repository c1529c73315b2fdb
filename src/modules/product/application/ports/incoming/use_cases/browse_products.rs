use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::product::application::domain::entities::{Product, ProductFilter};

/// Products shown on the landing page.
pub const LATEST_LIMIT: u64 = 12;
pub const PAGE_SIZE: u64 = 6;
pub const RELATED_LIMIT: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct LatestProducts {
    pub total: u64,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProducts {
    pub category: Category,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseProductsError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Failed to fetch products: {0}")]
    QueryFailed(String),
}

/// Read-only catalog views used by the storefront.
#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn latest(&self) -> Result<LatestProducts, BrowseProductsError>;
    async fn count(&self) -> Result<u64, BrowseProductsError>;
    /// `page` starts at 1; 0 is treated as 1.
    async fn page(&self, page: u64) -> Result<Vec<Product>, BrowseProductsError>;
    async fn filter(&self, filter: ProductFilter) -> Result<Vec<Product>, BrowseProductsError>;
    async fn search(&self, keyword: &str) -> Result<Vec<Product>, BrowseProductsError>;
    async fn related(
        &self,
        product_id: Uuid,
        category_id: Uuid,
    ) -> Result<Vec<Product>, BrowseProductsError>;
    async fn by_category(&self, slug: &str) -> Result<CategoryProducts, BrowseProductsError>;
}
