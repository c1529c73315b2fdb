use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};
use crate::product::application::domain::entities::{
    CategoryRef, Product, ProductDraft, ProductFilter, ProductPhoto,
};
use crate::product::application::ports::outgoing::{
    ProductQuery, ProductQueryError, ProductRepository, ProductRepositoryError,
};

mock! {
    pub CategoryQuery {}
    #[async_trait]
    impl CategoryQuery for CategoryQuery {
        async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CategoryQueryError>;
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryQueryError>;
    }
}

mock! {
    pub ProductQuery {}
    #[async_trait]
    impl ProductQuery for ProductQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductQueryError>;
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError>;
        async fn find_photo(&self, id: Uuid) -> Result<Option<ProductPhoto>, ProductQueryError>;
        async fn count(&self) -> Result<u64, ProductQueryError>;
        async fn list_latest(&self, limit: u64) -> Result<Vec<Product>, ProductQueryError>;
        async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Product>, ProductQueryError>;
        async fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductQueryError>;
        async fn search(&self, keyword: &str) -> Result<Vec<Product>, ProductQueryError>;
        async fn list_related(
            &self,
            product_id: Uuid,
            category_id: Uuid,
            limit: u64,
        ) -> Result<Vec<Product>, ProductQueryError>;
        async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, ProductQueryError>;
    }
}

mock! {
    pub ProductRepository {}
    #[async_trait]
    impl ProductRepository for ProductRepository {
        async fn create_product(
            &self,
            draft: ProductDraft,
            category: CategoryRef,
        ) -> Result<Product, ProductRepositoryError>;
        async fn update_product(
            &self,
            id: Uuid,
            draft: ProductDraft,
            category: CategoryRef,
        ) -> Result<Product, ProductRepositoryError>;
        async fn delete_product(&self, id: Uuid) -> Result<(), ProductRepositoryError>;
    }
}
