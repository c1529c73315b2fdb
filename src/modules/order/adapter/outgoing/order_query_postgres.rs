use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::{DateTimeWithTimeZone, Json};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::order::application::domain::entities::{
    Buyer, Order, OrderItem, OrderProduct, OrderStatus, PaymentRecord,
};
use crate::order::application::ports::outgoing::{OrderQuery, OrderQueryError};
use crate::product::adapter::outgoing::sea_orm_entity::products::{
    Column as ProductColumn, Entity as ProductEntity,
};

use super::sea_orm_entity::order_items::{Column as OrderItemColumn, Entity as OrderItemEntity};
use super::sea_orm_entity::orders::{Column as OrderColumn, Entity as OrderEntity};

#[derive(Debug, FromQueryResult)]
struct OrderRow {
    id: Uuid,
    buyer_id: Uuid,
    buyer_name: String,
    payment: Json,
    status: String,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct OrderItemRow {
    order_id: Uuid,
    product_id: Uuid,
    quantity: i32,
    unit_price: Decimal,
    product_name: String,
    product_slug: String,
    product_price: Decimal,
}

impl OrderItemRow {
    fn into_item(self) -> OrderItem {
        OrderItem {
            product: OrderProduct {
                id: self.product_id,
                name: self.product_name,
                slug: self.product_slug,
                price: self.product_price,
            },
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_err(e: impl std::fmt::Display) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads order headers, then every line of those orders in one query.
    async fn fetch(&self, select: Select<OrderEntity>) -> Result<Vec<Order>, OrderQueryError> {
        let rows = select
            .select_only()
            .columns([
                OrderColumn::Id,
                OrderColumn::BuyerId,
                OrderColumn::Payment,
                OrderColumn::Status,
                OrderColumn::CreatedAt,
                OrderColumn::UpdatedAt,
            ])
            .column_as(UserColumn::Name, "buyer_name")
            .inner_join(UserEntity)
            .order_by_desc(OrderColumn::CreatedAt)
            .into_model::<OrderRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let item_rows = OrderItemEntity::find()
            .select_only()
            .columns([
                OrderItemColumn::OrderId,
                OrderItemColumn::ProductId,
                OrderItemColumn::Quantity,
                OrderItemColumn::UnitPrice,
            ])
            .column_as(ProductColumn::Name, "product_name")
            .column_as(ProductColumn::Slug, "product_slug")
            .column_as(ProductColumn::Price, "product_price")
            .inner_join(ProductEntity)
            .filter(OrderItemColumn::OrderId.is_in(ids))
            .order_by_asc(ProductColumn::Name)
            .into_model::<OrderItemRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let mut items: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            items.entry(row.order_id).or_default().push(row.into_item());
        }

        rows.into_iter()
            .map(|row| {
                let lines = items.remove(&row.id).unwrap_or_default();
                to_order(row, lines)
            })
            .collect()
    }
}

fn to_order(row: OrderRow, items: Vec<OrderItem>) -> Result<Order, OrderQueryError> {
    let status = OrderStatus::parse(&row.status)
        .ok_or_else(|| db_err(format!("Unknown order status '{}'", row.status)))?;
    let payment: PaymentRecord = serde_json::from_value(row.payment).map_err(db_err)?;

    Ok(Order {
        id: row.id,
        buyer: Buyer {
            id: row.buyer_id,
            name: row.buyer_name,
        },
        total: Order::total_of(&items),
        items,
        payment,
        status,
        created_at: row.created_at.with_timezone(&chrono::Utc),
        updated_at: row.updated_at.with_timezone(&chrono::Utc),
    })
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrderQueryError> {
        let mut orders = self
            .fetch(OrderEntity::find().filter(OrderColumn::Id.eq(id)))
            .await?;
        Ok(orders.pop())
    }

    async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<Order>, OrderQueryError> {
        self.fetch(OrderEntity::find().filter(OrderColumn::BuyerId.eq(buyer_id)))
            .await
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderQueryError> {
        self.fetch(OrderEntity::find()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn order_row(id: Uuid, status: &str) -> BTreeMap<&'static str, Value> {
        let now = Utc::now().fixed_offset();
        let payment = serde_json::json!({
            "success": true,
            "transaction_id": "fake-valid-nonce",
            "amount": "84.80"
        });
        BTreeMap::from([
            ("id", Value::from(id)),
            ("buyer_id", Value::from(Uuid::new_v4())),
            ("buyer_name", Value::from("Jane Doe")),
            ("payment", Value::Json(Some(Box::new(payment)))),
            ("status", Value::from(status)),
            ("created_at", Value::from(now)),
            ("updated_at", Value::from(now)),
        ])
    }

    fn item_row(order_id: Uuid, name: &str, quantity: i32, unit_price: Decimal) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("order_id", Value::from(order_id)),
            ("product_id", Value::from(Uuid::new_v4())),
            ("quantity", Value::from(quantity)),
            ("unit_price", Value::from(unit_price)),
            ("product_name", Value::from(name)),
            ("product_slug", Value::from(name.to_lowercase())),
            ("product_price", Value::from(unit_price)),
        ])
    }

    #[tokio::test]
    async fn order_is_assembled_with_items_and_total() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![order_row(id, "processing")]])
            .append_query_results(vec![vec![
                item_row(id, "Book", 2, Decimal::new(3990, 2)),
                item_row(id, "Pen", 2, Decimal::new(250, 2)),
            ]])
            .into_connection();

        let query = OrderQueryPostgres::new(Arc::new(db));
        let order = query.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.buyer.name, "Jane Doe");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, Decimal::new(8480, 2));
        assert_eq!(order.payment.transaction_id, "fake-valid-nonce");
    }

    #[tokio::test]
    async fn no_orders_means_no_item_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();

        let query = OrderQueryPostgres::new(Arc::new(db));

        assert!(query.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_stored_status_is_an_error() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![order_row(id, "teleported")]])
            .append_query_results(vec![Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();

        let query = OrderQueryPostgres::new(Arc::new(db));

        match query.list_by_buyer(Uuid::new_v4()).await {
            Err(OrderQueryError::DatabaseError(msg)) => assert!(msg.contains("teleported")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
