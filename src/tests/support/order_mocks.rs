use std::collections::HashMap;

use async_trait::async_trait;
use mockall::mock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::order::application::domain::entities::{NewOrder, Order, OrderStatus, PaymentRecord};
use crate::order::application::ports::outgoing::{
    OrderQuery, OrderQueryError, OrderRepository, OrderRepositoryError, PaymentError,
    PaymentGateway, ProductPriceQuery, ProductPriceQueryError,
};

mock! {
    pub OrderQuery {}
    #[async_trait]
    impl OrderQuery for OrderQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderQueryError>;
        async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>, OrderQueryError>;
        async fn list_all(&self) -> Result<Vec<Order>, OrderQueryError>;
    }
}

mock! {
    pub OrderRepository {}
    #[async_trait]
    impl OrderRepository for OrderRepository {
        async fn create_order(&self, order: NewOrder) -> Result<(), OrderRepositoryError>;
        async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), OrderRepositoryError>;
    }
}

mock! {
    pub PaymentGateway {}
    #[async_trait]
    impl PaymentGateway for PaymentGateway {
        async fn charge(&self, nonce: &str, amount: Decimal) -> Result<PaymentRecord, PaymentError>;
    }
}

mock! {
    pub ProductPriceQuery {}
    #[async_trait]
    impl ProductPriceQuery for ProductPriceQuery {
        async fn find_prices(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Decimal>, ProductPriceQueryError>;
    }
}
