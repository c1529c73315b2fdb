use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::category::application::domain::entities::Category;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub category: Vec<Category>,
}

/// List every category, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/category/get-category",
    tag = "category",
    responses(
        (status = 200, description = "All categories list", body = CategoryListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/category/get-category")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(category) => ApiResponse::ok("All categories list", CategoryListResponse { category }),
        Err(e) => {
            error!("Listing categories failed: {}", e);
            ApiResponse::internal_error("Error while getting all categories", &e)
        }
    }
}
