use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::{NewOrder, OrderStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes the order and all of its lines atomically.
    async fn create_order(&self, order: NewOrder) -> Result<(), OrderRepositoryError>;
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), OrderRepositoryError>;
}
