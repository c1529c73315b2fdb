use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::product::application::domain::entities::{CategoryRef, Product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub quantity: i32,
    pub photo: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
    pub shipping: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self, category: CategoryRef) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
            category,
            shipping: self.shipping,
            has_photo: self.photo.is_some(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

/// Listing row: product columns without the photo bytes, joined with its category.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub quantity: i32,
    pub shipping: bool,
    pub has_photo: bool,
    pub category_name: String,
    pub category_slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl ProductRow {
    pub fn to_domain(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
            category: CategoryRef {
                id: self.category_id,
                name: self.category_name.clone(),
                slug: self.category_slug.clone(),
            },
            shipping: self.shipping,
            has_photo: self.has_photo,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct PhotoRow {
    pub photo: Option<Vec<u8>>,
    pub photo_content_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::categories::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
}

impl Related<crate::modules::category::adapter::outgoing::sea_orm_entity::categories::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }
        #[cfg(not(feature = "no_db_triggers"))]
        let _ = insert;

        Ok(self)
    }
}
