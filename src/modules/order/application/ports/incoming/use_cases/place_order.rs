use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::{merge_cart, CartLine, Order};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutInputError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Payment nonce is required")]
    MissingNonce,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Quantity is too large")]
    QuantityTooLarge,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    buyer_id: Uuid,
    nonce: String,
    lines: Vec<CartLine>,
}

impl PlaceOrderCommand {
    pub fn new(
        buyer_id: Uuid,
        nonce: Option<String>,
        lines: Vec<CartLine>,
    ) -> Result<Self, CheckoutInputError> {
        if lines.is_empty() {
            return Err(CheckoutInputError::EmptyCart);
        }
        let nonce = nonce
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(CheckoutInputError::MissingNonce)?;
        if lines.iter().any(|l| l.quantity < 1) {
            return Err(CheckoutInputError::InvalidQuantity);
        }

        let lines = merge_cart(&lines).ok_or(CheckoutInputError::QuantityTooLarge)?;

        Ok(Self {
            buyer_id,
            nonce,
            lines,
        })
    }

    pub fn buyer_id(&self) -> Uuid {
        self.buyer_id
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    #[error("{0}")]
    PaymentDeclined(String),

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, command: PlaceOrderCommand) -> Result<Order, PlaceOrderError>;
}
