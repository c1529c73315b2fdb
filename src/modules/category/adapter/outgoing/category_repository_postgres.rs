use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::domain::entities::{Category, CategoryName};
use crate::category::application::ports::outgoing::{CategoryRepository, CategoryRepositoryError};
use crate::shared::db_error::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::categories::{ActiveModel as CategoryActiveModel, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_write_err(e: DbErr) -> CategoryRepositoryError {
    if is_unique_violation(&e) {
        return CategoryRepositoryError::CategoryAlreadyExists;
    }
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(&self, name: CategoryName) -> Result<Category, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.name().to_string()),
            slug: Set(name.slug().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(inserted.to_domain())
    }

    async fn update_category(
        &self,
        id: Uuid,
        name: CategoryName,
    ) -> Result<Category, CategoryRepositoryError> {
        let existing = CategoryEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        let mut active: CategoryActiveModel = existing.into();
        active.name = Set(name.name().to_string());
        active.slug = Set(name.slug().to_string());

        let updated = active.update(&*self.db).await.map_err(map_write_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CategoryRepositoryError::CategoryInUse
                } else {
                    CategoryRepositoryError::DatabaseError(e.to_string())
                }
            })?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::adapter::outgoing::sea_orm_entity::categories::Model as CategoryModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn category_model(id: Uuid, name: &str, slug: &str) -> CategoryModel {
        let now = Utc::now().fixed_offset();
        CategoryModel {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn name(raw: &str) -> CategoryName {
        CategoryName::parse(Some(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![category_model(id, "Books", "books")]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_category(name("Books")).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.slug, "books");
    }

    #[tokio::test]
    async fn create_maps_unique_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"categories_name_key\"".into(),
            ))])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_category(name("Books")).await;

        assert!(matches!(result, Err(CategoryRepositoryError::CategoryAlreadyExists)));
    }

    #[tokio::test]
    async fn update_rewrites_name_and_slug() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![category_model(id, "Books", "books")],
                vec![category_model(id, "Used Books", "used-books")],
            ])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let updated = repo.update_category(id, name("Used Books")).await.unwrap();

        assert_eq!(updated.name, "Used Books");
        assert_eq!(updated.slug, "used-books");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CategoryModel>::new()])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_category(Uuid::new_v4(), name("X")).await;

        assert!(matches!(result, Err(CategoryRepositoryError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn delete_without_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_category(Uuid::new_v4()).await,
            Err(CategoryRepositoryError::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_blocked_by_products_is_in_use() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal(
                "violates foreign key constraint \"fk_products_category\"".into(),
            ))])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_category(Uuid::new_v4()).await,
            Err(CategoryRepositoryError::CategoryInUse)
        ));
    }

    #[tokio::test]
    async fn delete_succeeds_when_a_row_is_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_category(Uuid::new_v4()).await.is_ok());
    }
}
