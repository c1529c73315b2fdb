mod browse_products_service;
mod create_product_service;
mod delete_product_service;
mod get_product_photo_service;
mod get_single_product_service;
mod update_product_service;

pub use browse_products_service::BrowseProductsService;
pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use get_product_photo_service::GetProductPhotoService;
pub use get_single_product_service::GetSingleProductService;
pub use update_product_service::UpdateProductService;
