use std::sync::Arc;

use crate::order::application::ports::incoming::use_cases::{
    ListOrdersUseCase, PlaceOrderUseCase, UpdateOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub place: Arc<dyn PlaceOrderUseCase + Send + Sync>,
    pub list: Arc<dyn ListOrdersUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
}
