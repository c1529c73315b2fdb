use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::Order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOrdersError {
    #[error("Failed to fetch orders: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn for_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>, ListOrdersError>;
    async fn all(&self) -> Result<Vec<Order>, ListOrdersError>;
}
