use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::adapter::outgoing::sea_orm_entity::categories::{
    Column as CategoryColumn, Entity as CategoryEntity,
};
use crate::product::application::domain::entities::{Product, ProductFilter, ProductPhoto};
use crate::product::application::ports::outgoing::{ProductQuery, ProductQueryError};

use super::sea_orm_entity::products::{
    Column as ProductColumn, Entity as ProductEntity, PhotoRow, ProductRow,
};

const DEFAULT_PHOTO_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, select: Select<ProductEntity>) -> Result<Vec<Product>, ProductQueryError> {
        let rows = listing(select)
            .into_model::<ProductRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.iter().map(|r| r.to_domain()).collect())
    }

    async fn fetch_one(
        &self,
        select: Select<ProductEntity>,
    ) -> Result<Option<Product>, ProductQueryError> {
        let row = listing(select)
            .into_model::<ProductRow>()
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(|r| r.to_domain()))
    }
}

fn db_err(e: sea_orm::DbErr) -> ProductQueryError {
    ProductQueryError::DatabaseError(e.to_string())
}

/// Projects every product column except the photo bytes and joins the category.
fn listing(select: Select<ProductEntity>) -> Select<ProductEntity> {
    select
        .select_only()
        .columns([
            ProductColumn::Id,
            ProductColumn::Name,
            ProductColumn::Slug,
            ProductColumn::Description,
            ProductColumn::Price,
            ProductColumn::CategoryId,
            ProductColumn::Quantity,
            ProductColumn::Shipping,
            ProductColumn::CreatedAt,
            ProductColumn::UpdatedAt,
        ])
        .column_as(
            Expr::col((ProductEntity, ProductColumn::Photo)).is_not_null(),
            "has_photo",
        )
        .column_as(CategoryColumn::Name, "category_name")
        .column_as(CategoryColumn::Slug, "category_slug")
        .inner_join(CategoryEntity)
}

/// Escapes LIKE wildcards so the keyword matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductQueryError> {
        self.fetch_one(ProductEntity::find().filter(ProductColumn::Id.eq(id)))
            .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError> {
        self.fetch_one(
            ProductEntity::find()
                .filter(ProductColumn::Slug.eq(slug))
                .order_by_desc(ProductColumn::CreatedAt),
        )
        .await
    }

    async fn find_photo(&self, id: Uuid) -> Result<Option<ProductPhoto>, ProductQueryError> {
        let row = ProductEntity::find_by_id(id)
            .select_only()
            .columns([ProductColumn::Photo, ProductColumn::PhotoContentType])
            .into_model::<PhotoRow>()
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.and_then(|r| {
            r.photo.map(|bytes| ProductPhoto {
                bytes,
                content_type: r
                    .photo_content_type
                    .unwrap_or_else(|| DEFAULT_PHOTO_TYPE.to_string()),
            })
        }))
    }

    async fn count(&self) -> Result<u64, ProductQueryError> {
        ProductEntity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn list_latest(&self, limit: u64) -> Result<Vec<Product>, ProductQueryError> {
        self.fetch(
            ProductEntity::find()
                .order_by_desc(ProductColumn::CreatedAt)
                .limit(limit),
        )
        .await
    }

    async fn list_page(&self, page: u64, per_page: u64) -> Result<Vec<Product>, ProductQueryError> {
        // Postgres OFFSET is a signed bigint; anything past it is an empty page.
        let Some(offset) = page
            .checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
        else {
            return Ok(Vec::new());
        };

        self.fetch(
            ProductEntity::find()
                .order_by_desc(ProductColumn::CreatedAt)
                .offset(offset)
                .limit(per_page),
        )
        .await
    }

    async fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductQueryError> {
        let mut condition = Condition::all();
        if !filter.category_ids.is_empty() {
            condition = condition.add(ProductColumn::CategoryId.is_in(filter.category_ids.clone()));
        }
        if let Some((low, high)) = filter.price_range {
            condition = condition.add(ProductColumn::Price.between(low, high));
        }

        self.fetch(
            ProductEntity::find()
                .filter(condition)
                .order_by_desc(ProductColumn::CreatedAt),
        )
        .await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, ProductQueryError> {
        let pattern = like_pattern(keyword);

        self.fetch(
            ProductEntity::find()
                .filter(
                    Condition::any()
                        .add(Expr::col((ProductEntity, ProductColumn::Name)).ilike(&pattern))
                        .add(Expr::col((ProductEntity, ProductColumn::Description)).ilike(&pattern)),
                )
                .order_by_desc(ProductColumn::CreatedAt),
        )
        .await
    }

    async fn list_related(
        &self,
        product_id: Uuid,
        category_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Product>, ProductQueryError> {
        self.fetch(
            ProductEntity::find()
                .filter(ProductColumn::CategoryId.eq(category_id))
                .filter(ProductColumn::Id.ne(product_id))
                .order_by_desc(ProductColumn::CreatedAt)
                .limit(limit),
        )
        .await
    }

    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, ProductQueryError> {
        self.fetch(
            ProductEntity::find()
                .filter(ProductColumn::CategoryId.eq(category_id))
                .order_by_desc(ProductColumn::CreatedAt),
        )
        .await
    }
}
