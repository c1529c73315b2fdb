use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::order::application::ports::outgoing::{ProductPriceQuery, ProductPriceQueryError};
use crate::product::adapter::outgoing::sea_orm_entity::products::{
    Column as ProductColumn, Entity as ProductEntity,
};

#[derive(Debug, FromQueryResult)]
struct PriceRow {
    id: Uuid,
    price: Decimal,
}

#[derive(Debug, Clone)]
pub struct ProductPriceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductPriceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductPriceQuery for ProductPriceQueryPostgres {
    async fn find_prices(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Decimal>, ProductPriceQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = ProductEntity::find()
            .select_only()
            .columns([ProductColumn::Id, ProductColumn::Price])
            .filter(ProductColumn::Id.is_in(ids.to_vec()))
            .into_model::<PriceRow>()
            .all(&*self.db)
            .await
            .map_err(|e| ProductPriceQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|r| (r.id, r.price)).collect())
    }
}
