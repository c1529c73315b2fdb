use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::create_category::{CategoryRequest, CategoryResponse};
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::category::application::ports::incoming::use_cases::{
    UpdateCategoryCommand, UpdateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Rename a category; the slug follows the new name
#[utoipa::path(
    put,
    path = "/api/v1/category/update-category/{id}",
    tag = "category",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = CategoryResponse),
        (status = 400, description = "A valid name is required", body = MessageResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 409, description = "Name used by another category", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/category/update-category/{id}")]
pub async fn update_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<CategoryRequest>,
) -> impl Responder {
    let command = match UpdateCategoryCommand::new(path.into_inner(), payload.into_inner().name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.category.update.execute(command).await {
        Ok(category) => ApiResponse::ok("Category updated successfully", CategoryResponse { category }),
        Err(e) => map_update_error(e),
    }
}

fn map_update_error(err: UpdateCategoryError) -> HttpResponse {
    match err {
        UpdateCategoryError::CategoryNotFound => ApiResponse::not_found("Category not found"),
        UpdateCategoryError::NameTaken => ApiResponse::conflict("Category already exists"),
        UpdateCategoryError::RepositoryError(ref cause) => {
            error!("Update category failed: {}", cause);
            ApiResponse::internal_error("Error while updating category", &err)
        }
    }
}
