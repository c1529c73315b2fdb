use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::shared::slug::slugify;

/// Largest photo accepted on create or update, in bytes.
pub const PHOTO_MAX_BYTES: usize = 1_000_000;

/// Category fields embedded in product responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    pub id: Uuid,
    #[schema(example = "Books")]
    pub name: String,
    #[schema(example = "books")]
    pub slug: String,
}

impl From<&Category> for CategoryRef {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
        }
    }
}

/// A product as clients see it. Photo bytes are served separately.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "Rust in Action")]
    pub name: String,
    #[schema(example = "rust-in-action")]
    pub slug: String,
    pub description: String,
    #[schema(value_type = String, example = "39.90")]
    pub price: Decimal,
    #[schema(example = 12)]
    pub quantity: i32,
    pub category: CategoryRef,
    pub shipping: bool,
    pub has_photo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPhoto {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Raw product form fields exactly as they arrived.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub shipping: Option<String>,
    pub photo: Option<ProductPhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductFormError {
    #[error("Name is required")]
    MissingName,

    #[error("Description is required")]
    MissingDescription,

    #[error("Price is required")]
    MissingPrice,

    #[error("Category is required")]
    MissingCategory,

    #[error("Quantity is required")]
    MissingQuantity,

    #[error("Photo should be less than 1MB")]
    PhotoTooLarge,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Quantity must be a non-negative integer")]
    InvalidQuantity,

    #[error("Category not found")]
    UnknownCategory,
}

/// Product fields after validation, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub quantity: i32,
    pub shipping: bool,
    pub photo: Option<ProductPhoto>,
}

fn required(value: Option<String>, err: ProductFormError) -> Result<String, ProductFormError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(err)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

impl ProductForm {
    /// Required fields are checked in form order, then the photo size, then formats.
    pub fn validate(self) -> Result<ProductDraft, ProductFormError> {
        let name = required(self.name, ProductFormError::MissingName)?;
        let description = required(self.description, ProductFormError::MissingDescription)?;
        let price = required(self.price, ProductFormError::MissingPrice)?;
        let category = required(self.category, ProductFormError::MissingCategory)?;
        let quantity = required(self.quantity, ProductFormError::MissingQuantity)?;

        if let Some(ref photo) = self.photo {
            if photo.bytes.len() > PHOTO_MAX_BYTES {
                return Err(ProductFormError::PhotoTooLarge);
            }
        }

        let price: Decimal = price.parse().map_err(|_| ProductFormError::InvalidPrice)?;
        if price.is_sign_negative() {
            return Err(ProductFormError::InvalidPrice);
        }
        let quantity: i32 = quantity
            .parse()
            .ok()
            .filter(|q: &i32| *q >= 0)
            .ok_or(ProductFormError::InvalidQuantity)?;
        let category_id =
            Uuid::parse_str(&category).map_err(|_| ProductFormError::UnknownCategory)?;

        Ok(ProductDraft {
            slug: slugify(&name),
            name,
            description,
            price: price.round_dp(2),
            category_id,
            quantity,
            shipping: parse_flag(self.shipping.as_deref()),
            photo: self.photo,
        })
    }
}

/// Catalog filter: any of the checked categories, price within the inclusive range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_ids: Vec<Uuid>,
    pub price_range: Option<(Decimal, Decimal)>,
}
