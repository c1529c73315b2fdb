use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::order::application::{
    domain::entities::{NewOrder, Order, PricedLine},
    ports::{
        incoming::use_cases::{PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase},
        outgoing::{OrderQuery, OrderRepository, PaymentError, PaymentGateway, ProductPriceQuery},
    },
};

#[derive(Debug, Clone)]
pub struct PlaceOrderService<P, G, R, Q>
where
    P: ProductPriceQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    prices: P,
    gateway: G,
    repository: R,
    query: Q,
}

impl<P, G, R, Q> PlaceOrderService<P, G, R, Q>
where
    P: ProductPriceQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    pub fn new(prices: P, gateway: G, repository: R, query: Q) -> Self {
        Self {
            prices,
            gateway,
            repository,
            query,
        }
    }

    async fn price_cart(&self, command: &PlaceOrderCommand) -> Result<Vec<PricedLine>, PlaceOrderError> {
        let ids: Vec<Uuid> = command.lines().iter().map(|l| l.product_id).collect();
        let prices = self
            .prices
            .find_prices(&ids)
            .await
            .map_err(|e| PlaceOrderError::QueryError(e.to_string()))?;

        command
            .lines()
            .iter()
            .map(|line| {
                prices
                    .get(&line.product_id)
                    .map(|price| PricedLine {
                        product_id: line.product_id,
                        quantity: line.quantity,
                        unit_price: *price,
                    })
                    .ok_or(PlaceOrderError::ProductNotFound(line.product_id))
            })
            .collect()
    }
}

#[async_trait]
impl<P, G, R, Q> PlaceOrderUseCase for PlaceOrderService<P, G, R, Q>
where
    P: ProductPriceQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, command: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
        let lines = self.price_cart(&command).await?;
        let total: Decimal = lines.iter().map(PricedLine::subtotal).sum();

        let payment = self
            .gateway
            .charge(command.nonce(), total)
            .await
            .map_err(|e| match e {
                PaymentError::Declined(msg) => PlaceOrderError::PaymentDeclined(msg),
                PaymentError::Unavailable(msg) => PlaceOrderError::PaymentFailed(msg),
            })?;

        if !payment.success {
            warn!(buyer = %command.buyer_id(), "Payment declined");
            return Err(PlaceOrderError::PaymentDeclined("Payment was declined".to_string()));
        }

        let order_id = Uuid::new_v4();
        self.repository
            .create_order(NewOrder {
                id: order_id,
                buyer_id: command.buyer_id(),
                lines,
                payment,
            })
            .await
            .map_err(|e| PlaceOrderError::RepositoryError(e.to_string()))?;

        info!(order = %order_id, buyer = %command.buyer_id(), %total, "Order placed");

        self.query
            .find_by_id(order_id)
            .await
            .map_err(|e| PlaceOrderError::QueryError(e.to_string()))?
            .ok_or_else(|| PlaceOrderError::QueryError(format!("Order {} missing after insert", order_id)))
    }
}
