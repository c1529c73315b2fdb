use async_trait::async_trait;
use tracing::info;

use crate::order::application::{
    domain::entities::Order,
    ports::{
        incoming::use_cases::{
            UpdateOrderStatusCommand, UpdateOrderStatusError, UpdateOrderStatusUseCase,
        },
        outgoing::{OrderQuery, OrderRepository, OrderRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn load(&self, command: &UpdateOrderStatusCommand) -> Result<Order, UpdateOrderStatusError> {
        self.query
            .find_by_id(command.order_id())
            .await
            .map_err(|e| UpdateOrderStatusError::QueryError(e.to_string()))?
            .ok_or(UpdateOrderStatusError::OrderNotFound)
    }
}

#[async_trait]
impl<Q, R> UpdateOrderStatusUseCase for UpdateOrderStatusService<Q, R>
where
    Q: OrderQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateOrderStatusCommand) -> Result<Order, UpdateOrderStatusError> {
        let order = self.load(&command).await?;
        let target = command.status();

        if order.status == target {
            return Ok(order);
        }
        if !order.status.can_transition_to(target) {
            return Err(UpdateOrderStatusError::InvalidTransition {
                from: order.status,
                to: target,
            });
        }

        self.repository
            .update_status(order.id, target)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => UpdateOrderStatusError::OrderNotFound,
                other => UpdateOrderStatusError::RepositoryError(other.to_string()),
            })?;

        info!(order = %order.id, from = %order.status, to = %target, "Order status changed");

        self.load(&command).await
    }
}
