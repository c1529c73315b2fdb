use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::entities::ProductPhoto;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductPhotoError {
    #[error("Photo not found")]
    PhotoNotFound,

    #[error("Failed to fetch photo: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProductPhotoUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<ProductPhoto, GetProductPhotoError>;
}
