mod order_query_postgres;
mod order_repository_postgres;
mod passthrough_payment_gateway;
mod product_price_query_postgres;
pub mod sea_orm_entity;

pub use order_query_postgres::OrderQueryPostgres;
pub use order_repository_postgres::OrderRepositoryPostgres;
pub use passthrough_payment_gateway::PassthroughPaymentGateway;
pub use product_price_query_postgres::ProductPriceQueryPostgres;
