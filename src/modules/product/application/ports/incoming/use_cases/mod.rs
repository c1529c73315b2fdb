mod browse_products;
mod create_product;
mod delete_product;
mod get_product_photo;
mod get_single_product;
mod update_product;

pub use browse_products::{
    BrowseProductsError, BrowseProductsUseCase, CategoryProducts, LatestProducts, LATEST_LIMIT,
    PAGE_SIZE, RELATED_LIMIT,
};
pub use create_product::{CreateProductCommand, CreateProductError, CreateProductUseCase};
pub use delete_product::{DeleteProductError, DeleteProductUseCase};
pub use get_product_photo::{GetProductPhotoError, GetProductPhotoUseCase};
pub use get_single_product::{GetSingleProductError, GetSingleProductUseCase};
pub use update_product::{UpdateProductCommand, UpdateProductError, UpdateProductUseCase};
