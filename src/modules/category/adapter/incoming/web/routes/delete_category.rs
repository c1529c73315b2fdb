use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::category::application::ports::incoming::use_cases::DeleteCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a category that no product references
#[utoipa::path(
    delete,
    path = "/api/v1/category/delete-category/{id}",
    tag = "category",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted successfully", body = MessageResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 409, description = "Category still has products", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/v1/category/delete-category/{id}")]
pub async fn delete_category_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.category.delete.execute(id).await {
        Ok(()) => {
            info!(admin = %admin.user_id, category_id = %id, "Category deleted");
            ApiResponse::success("Category deleted successfully")
        }
        Err(DeleteCategoryError::CategoryNotFound) => ApiResponse::not_found("Category not found"),
        Err(DeleteCategoryError::CategoryInUse) => {
            ApiResponse::conflict("Category still has products")
        }
        Err(e) => {
            error!("Deleting category {} failed: {}", id, e);
            ApiResponse::internal_error("Error while deleting category", &e)
        }
    }
}
