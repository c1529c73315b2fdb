mod product_query;
mod product_repository;

pub use product_query::{ProductQuery, ProductQueryError};
pub use product_repository::{ProductRepository, ProductRepositoryError};
