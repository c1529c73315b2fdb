use async_trait::async_trait;

use crate::product::application::domain::entities::{
    Product, ProductDraft, ProductForm, ProductFormError,
};

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    draft: ProductDraft,
}

impl CreateProductCommand {
    pub fn new(form: ProductForm) -> Result<Self, ProductFormError> {
        Ok(Self {
            draft: form.validate()?,
        })
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn into_draft(self) -> ProductDraft {
        self.draft
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError>;
}
