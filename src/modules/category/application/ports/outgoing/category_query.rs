use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Oldest first.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CategoryQueryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError>;
    /// Exact, case-sensitive match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryQueryError>;
}
