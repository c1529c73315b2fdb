use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::entities::{
    Product, ProductDraft, ProductForm, ProductFormError,
};

/// Full replacement of the product fields. The photo is only replaced when one is uploaded.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    id: Uuid,
    draft: ProductDraft,
}

impl UpdateProductCommand {
    pub fn new(id: Uuid, form: ProductForm) -> Result<Self, ProductFormError> {
        Ok(Self {
            id,
            draft: form.validate()?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn into_parts(self) -> (Uuid, ProductDraft) {
        (self.id, self.draft)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError>;
}
