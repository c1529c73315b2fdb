use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::slug::slugify;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Category {
    #[schema(example = "5b0c7f1e-2f4a-4d8e-9a55-0d6d1c3c9a10")]
    pub id: Uuid,
    #[schema(example = "Home Appliances")]
    pub name: String,
    #[schema(example = "home-appliances")]
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated category name together with the slug derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName {
    name: String,
    slug: String,
}

impl CategoryName {
    /// Trims the input; `None` when nothing is left.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        let name = raw.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;
        let slug = slugify(&name);
        Some(Self { name, slug })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
