mod order_query;
mod order_repository;
mod payment_gateway;
mod product_price_query;

pub use order_query::{OrderQuery, OrderQueryError};
pub use order_repository::{OrderRepository, OrderRepositoryError};
pub use payment_gateway::{PaymentError, PaymentGateway};
pub use product_price_query::{ProductPriceQuery, ProductPriceQueryError};
