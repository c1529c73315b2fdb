use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateOrderStatusCommandError {
    #[error("Invalid status")]
    InvalidStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateOrderStatusCommand {
    order_id: Uuid,
    status: OrderStatus,
}

impl UpdateOrderStatusCommand {
    pub fn new(order_id: Uuid, status: Option<String>) -> Result<Self, UpdateOrderStatusCommandError> {
        let status = status
            .as_deref()
            .and_then(OrderStatus::parse)
            .ok_or(UpdateOrderStatusCommandError::InvalidStatus)?;

        Ok(Self { order_id, status })
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateOrderStatusError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, command: UpdateOrderStatusCommand) -> Result<Order, UpdateOrderStatusError>;
}
