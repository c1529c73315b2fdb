use actix_web::{get, web, Responder};
use tracing::error;

use super::create_product::ProductResponse;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::product::application::ports::incoming::use_cases::GetSingleProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one product by slug
#[utoipa::path(
    get,
    path = "/api/v1/product/get-product/{slug}",
    tag = "product",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Single product fetched", body = ProductResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/get-product/{slug}")]
pub async fn get_single_product_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.product.get_single.execute(&path.into_inner()).await {
        Ok(product) => ApiResponse::ok("Single product fetched", ProductResponse { product }),
        Err(GetSingleProductError::ProductNotFound) => ApiResponse::not_found("Product not found"),
        Err(e) => {
            error!("Fetching product failed: {}", e);
            ApiResponse::internal_error("Error while getting single product", &e)
        }
    }
}
