use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::domain::entities::{CategoryRef, Product, ProductDraft};
use crate::product::application::ports::outgoing::{ProductRepository, ProductRepositoryError};

use super::sea_orm_entity::products::{ActiveModel as ProductActiveModel, Entity as ProductEntity};

#[derive(Debug, Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> ProductRepositoryError {
    ProductRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        draft: ProductDraft,
        category: CategoryRef,
    ) -> Result<Product, ProductRepositoryError> {
        let (photo, photo_content_type) = match draft.photo {
            Some(p) => (Some(p.bytes), Some(p.content_type)),
            None => (None, None),
        };

        let active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            slug: Set(draft.slug),
            description: Set(draft.description),
            price: Set(draft.price),
            category_id: Set(draft.category_id),
            quantity: Set(draft.quantity),
            photo: Set(photo),
            photo_content_type: Set(photo_content_type),
            shipping: Set(draft.shipping),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(db_err)?;

        Ok(inserted.to_domain(category))
    }

    async fn update_product(
        &self,
        id: Uuid,
        draft: ProductDraft,
        category: CategoryRef,
    ) -> Result<Product, ProductRepositoryError> {
        let existing = ProductEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        let mut active: ProductActiveModel = existing.into();
        active.name = Set(draft.name);
        active.slug = Set(draft.slug);
        active.description = Set(draft.description);
        active.price = Set(draft.price);
        active.category_id = Set(draft.category_id);
        active.quantity = Set(draft.quantity);
        active.shipping = Set(draft.shipping);
        if let Some(photo) = draft.photo {
            active.photo = Set(Some(photo.bytes));
            active.photo_content_type = Set(Some(photo.content_type));
        }

        let updated = active.update(&*self.db).await.map_err(db_err)?;

        Ok(updated.to_domain(category))
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::ProductNotFound);
        }

        Ok(())
    }
}
