use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{GetSingleCategoryError, GetSingleCategoryUseCase},
        outgoing::CategoryQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetSingleCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCategoryUseCase for GetSingleCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Category, GetSingleCategoryError> {
        self.query
            .find_by_slug(slug)
            .await
            .map_err(|e| GetSingleCategoryError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleCategoryError::CategoryNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::category::application::ports::outgoing::CategoryQueryError;
    use crate::tests::support::catalog_fixtures::sample_category;

    mock! {
        pub Query {}

        #[async_trait]
        impl CategoryQuery for Query {
            async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CategoryQueryError>;
            async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryQueryError>;
        }
    }

    #[tokio::test]
    async fn known_slug_returns_category() {
        let category = sample_category("Books");
        let mut query = MockQuery::new();
        query
            .expect_find_by_slug()
            .with(eq("books"))
            .times(1)
            .returning(move |_| Ok(Some(category.clone())));

        let found = GetSingleCategoryService::new(query).execute("books").await.unwrap();
        assert_eq!(found.name, "Books");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let mut query = MockQuery::new();
        query.expect_find_by_slug().returning(|_| Ok(None));

        let result = GetSingleCategoryService::new(query).execute("nope").await;
        assert!(matches!(result, Err(GetSingleCategoryError::CategoryNotFound)));
    }
}
