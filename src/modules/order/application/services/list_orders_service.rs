use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::{
    domain::entities::Order,
    ports::{
        incoming::use_cases::{ListOrdersError, ListOrdersUseCase},
        outgoing::OrderQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOrdersUseCase for ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn for_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>, ListOrdersError> {
        self.query
            .list_by_buyer(buyer_id)
            .await
            .map_err(|e| ListOrdersError::QueryFailed(e.to_string()))
    }

    async fn all(&self) -> Result<Vec<Order>, ListOrdersError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListOrdersError::QueryFailed(e.to_string()))
    }
}
