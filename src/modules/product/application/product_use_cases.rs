use std::sync::Arc;

use crate::product::application::ports::incoming::use_cases::{
    BrowseProductsUseCase, CreateProductUseCase, DeleteProductUseCase, GetProductPhotoUseCase,
    GetSingleProductUseCase, UpdateProductUseCase,
};

#[derive(Clone)]
pub struct ProductUseCases {
    pub create: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProductUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProductUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProductUseCase + Send + Sync>,
    pub get_photo: Arc<dyn GetProductPhotoUseCase + Send + Sync>,
    pub browse: Arc<dyn BrowseProductsUseCase + Send + Sync>,
}
