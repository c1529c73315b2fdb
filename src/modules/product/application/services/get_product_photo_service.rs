use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::{
    domain::entities::ProductPhoto,
    ports::{
        incoming::use_cases::{GetProductPhotoError, GetProductPhotoUseCase},
        outgoing::ProductQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetProductPhotoService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProductPhotoService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductPhotoUseCase for GetProductPhotoService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<ProductPhoto, GetProductPhotoError> {
        self.query
            .find_photo(product_id)
            .await
            .map_err(|e| GetProductPhotoError::QueryFailed(e.to_string()))?
            .ok_or(GetProductPhotoError::PhotoNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::catalog_mocks::MockProductQuery;

    #[tokio::test]
    async fn stored_photo_is_returned() {
        let mut query = MockProductQuery::new();
        query.expect_find_photo().returning(|_| {
            Ok(Some(ProductPhoto {
                bytes: vec![1, 2, 3],
                content_type: "image/jpeg".into(),
            }))
        });

        let photo = GetProductPhotoService::new(query)
            .execute(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(photo.bytes, vec![1, 2, 3]);
        assert_eq!(photo.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn product_without_photo_is_not_found() {
        let mut query = MockProductQuery::new();
        query.expect_find_photo().returning(|_| Ok(None));

        let result = GetProductPhotoService::new(query).execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetProductPhotoError::PhotoNotFound)));
    }
}
