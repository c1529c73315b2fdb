use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

use super::sea_orm_entity::categories::{Column as CategoryColumn, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> CategoryQueryError {
    CategoryQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let models = CategoryEntity::find()
            .order_by_asc(CategoryColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CategoryQueryError> {
        let model = CategoryEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError> {
        let model = CategoryEntity::find()
            .filter(CategoryColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryQueryError> {
        let model = CategoryEntity::find()
            .filter(CategoryColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}
