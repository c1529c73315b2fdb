mod browse_products;
mod create_product;
mod delete_product;
mod get_product_photo;
mod get_products;
mod get_single_product;
mod product_form;
mod update_product;

pub use browse_products::*;
pub use create_product::*;
pub use delete_product::*;
pub use get_product_photo::*;
pub use get_products::*;
pub use get_single_product::*;
pub use product_form::*;
pub use update_product::*;
