use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::order::application::domain::entities::PaymentRecord;
use crate::order::application::ports::outgoing::{PaymentError, PaymentGateway};

/// Approves every non-empty nonce and records it as the transaction reference.
#[derive(Debug, Clone, Default)]
pub struct PassthroughPaymentGateway;

#[async_trait]
impl PaymentGateway for PassthroughPaymentGateway {
    async fn charge(&self, nonce: &str, amount: Decimal) -> Result<PaymentRecord, PaymentError> {
        let nonce = nonce.trim();
        if nonce.is_empty() {
            return Err(PaymentError::Declined("Payment nonce was rejected".to_string()));
        }

        Ok(PaymentRecord {
            success: true,
            transaction_id: nonce.to_string(),
            amount,
        })
    }
}
