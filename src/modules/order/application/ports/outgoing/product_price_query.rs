use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductPriceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Current catalog prices, used to price a cart at checkout.
#[async_trait]
pub trait ProductPriceQuery: Send + Sync {
    /// Ids without a product are simply absent from the map.
    async fn find_prices(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Decimal>, ProductPriceQueryError>;
}
