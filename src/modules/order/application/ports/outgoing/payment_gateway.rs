use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::order::application::domain::entities::PaymentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    #[error("{0}")]
    Declined(String),

    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, nonce: &str, amount: Decimal) -> Result<PaymentRecord, PaymentError>;
}
