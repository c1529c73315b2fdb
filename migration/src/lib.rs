pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_table_categories;
mod m20260301_000003_create_table_products;
mod m20260301_000004_create_table_orders;
mod m20260301_000005_create_table_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_table_categories::Migration),
            Box::new(m20260301_000003_create_table_products::Migration),
            Box::new(m20260301_000004_create_table_orders::Migration),
            Box::new(m20260301_000005_create_table_order_items::Migration),
        ]
    }
}
