use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::order::application::domain::entities::{NewOrder, OrderStatus};
use crate::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

use super::sea_orm_entity::order_items::{
    ActiveModel as OrderItemActiveModel, Entity as OrderItemEntity,
};
use super::sea_orm_entity::orders::{
    ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
};

#[derive(Debug, Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> OrderRepositoryError {
    OrderRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(&self, order: NewOrder) -> Result<(), OrderRepositoryError> {
        let payment = serde_json::to_value(&order.payment)
            .map_err(|e| OrderRepositoryError::DatabaseError(e.to_string()))?;

        let header = OrderActiveModel {
            id: Set(order.id),
            buyer_id: Set(order.buyer_id),
            payment: Set(payment),
            status: Set(OrderStatus::NotProcessed.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let items: Vec<OrderItemActiveModel> = order
            .lines
            .iter()
            .map(|line| OrderItemActiveModel {
                order_id: Set(order.id),
                product_id: Set(line.product_id),
                quantity: Set(line.quantity),
                unit_price: Set(line.unit_price),
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_err)?;

        OrderEntity::insert(header)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        OrderItemEntity::insert_many(items)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), OrderRepositoryError> {
        let result = OrderEntity::update_many()
            .col_expr(OrderColumn::Status, Expr::value(status.as_str()))
            .col_expr(OrderColumn::UpdatedAt, Expr::current_timestamp().into())
            .filter(OrderColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(OrderRepositoryError::OrderNotFound);
        }

        Ok(())
    }
}
