use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;
use crate::product::application::domain::entities::{CategoryRef, Product};
use crate::shared::slug::slugify;

pub fn sample_category(name: &str) -> Category {
    let now = Utc::now();
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slugify(name),
        created_at: now,
        updated_at: now,
    }
}

/// Priced at 39.90 with twelve in stock and no photo.
pub fn sample_product(name: &str, category: &Category) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slugify(name),
        description: format!("{} description", name),
        price: Decimal::new(3990, 2),
        quantity: 12,
        category: CategoryRef::from(category),
        shipping: true,
        has_photo: false,
        created_at: now,
        updated_at: now,
    }
}
