use async_trait::async_trait;

use crate::category::application::domain::entities::{Category, CategoryName};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: CategoryName,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name is required")]
    MissingName,
}

impl CreateCategoryCommand {
    pub fn new(name: Option<String>) -> Result<Self, CreateCategoryCommandError> {
        let name = CategoryName::parse(name).ok_or(CreateCategoryCommandError::MissingName)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    pub fn into_name(self) -> CategoryName {
        self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand) -> Result<Category, CreateCategoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_missing() {
        assert_eq!(
            CreateCategoryCommand::new(Some(" ".into())).unwrap_err(),
            CreateCategoryCommandError::MissingName
        );
    }

    #[test]
    fn slug_is_derived_from_name() {
        let cmd = CreateCategoryCommand::new(Some("Home Appliances".into())).unwrap();
        assert_eq!(cmd.name().slug(), "home-appliances");
    }
}
