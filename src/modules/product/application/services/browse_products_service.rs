use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryQuery;
use crate::product::application::{
    domain::entities::{Product, ProductFilter},
    ports::{
        incoming::use_cases::{
            BrowseProductsError, BrowseProductsUseCase, CategoryProducts, LatestProducts,
            LATEST_LIMIT, PAGE_SIZE, RELATED_LIMIT,
        },
        outgoing::{ProductQuery, ProductQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct BrowseProductsService<Q, C>
where
    Q: ProductQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    query: Q,
    categories: C,
}

impl<Q, C> BrowseProductsService<Q, C>
where
    Q: ProductQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q, categories: C) -> Self {
        Self { query, categories }
    }
}

fn query_failed(e: ProductQueryError) -> BrowseProductsError {
    BrowseProductsError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q, C> BrowseProductsUseCase for BrowseProductsService<Q, C>
where
    Q: ProductQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn latest(&self) -> Result<LatestProducts, BrowseProductsError> {
        let products = self.query.list_latest(LATEST_LIMIT).await.map_err(query_failed)?;
        // The landing page reports how many it shows, not the catalog size.
        Ok(LatestProducts {
            total: products.len() as u64,
            products,
        })
    }

    async fn count(&self) -> Result<u64, BrowseProductsError> {
        self.query.count().await.map_err(query_failed)
    }

    async fn page(&self, page: u64) -> Result<Vec<Product>, BrowseProductsError> {
        let page = page.max(1);
        self.query
            .list_page(page - 1, PAGE_SIZE)
            .await
            .map_err(query_failed)
    }

    async fn filter(&self, filter: ProductFilter) -> Result<Vec<Product>, BrowseProductsError> {
        self.query.filter(&filter).await.map_err(query_failed)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, BrowseProductsError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(vec![]);
        }
        self.query.search(keyword).await.map_err(query_failed)
    }

    async fn related(
        &self,
        product_id: Uuid,
        category_id: Uuid,
    ) -> Result<Vec<Product>, BrowseProductsError> {
        self.query
            .list_related(product_id, category_id, RELATED_LIMIT)
            .await
            .map_err(query_failed)
    }

    async fn by_category(&self, slug: &str) -> Result<CategoryProducts, BrowseProductsError> {
        let category = self
            .categories
            .find_by_slug(slug)
            .await
            .map_err(|e| BrowseProductsError::QueryFailed(e.to_string()))?
            .ok_or(BrowseProductsError::CategoryNotFound)?;

        let products = self
            .query
            .list_by_category(category.id)
            .await
            .map_err(query_failed)?;

        Ok(CategoryProducts { category, products })
    }
}
