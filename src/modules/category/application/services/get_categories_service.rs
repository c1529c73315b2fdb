use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{GetCategoriesError, GetCategoriesUseCase},
        outgoing::CategoryQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }
}
