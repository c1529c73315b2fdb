use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::Order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Fully populated orders, newest first.
#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderQueryError>;
    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>, OrderQueryError>;
    async fn list_all(&self) -> Result<Vec<Order>, OrderQueryError>;
}
