use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[schema(example = "Home Appliances")]
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    pub category: Category,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a category
#[utoipa::path(
    post,
    path = "/api/v1/category/create-category",
    tag = "category",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "New category created", body = CategoryResponse),
        (status = 400, description = "Name is required", body = MessageResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 409, description = "Category already exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/category/create-category")]
pub async fn create_category_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(payload.into_inner().name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.category.create.execute(command).await {
        Ok(category) => {
            info!(admin = %admin.user_id, slug = %category.slug, "Category created");
            ApiResponse::created("New category created", CategoryResponse { category })
        }
        Err(e) => map_create_category_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_category_error(err: CreateCategoryError) -> HttpResponse {
    match err {
        CreateCategoryError::CategoryAlreadyExists => ApiResponse::conflict("Category already exists"),
        other => {
            error!("Create category failed: {}", other);
            ApiResponse::internal_error("Error in category", &other)
        }
    }
}
