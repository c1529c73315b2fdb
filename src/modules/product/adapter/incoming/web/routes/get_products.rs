use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::product::application::domain::entities::Product;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProductListResponse {
    /// Number of products in this response
    #[serde(rename = "counTotal")]
    pub count_total: u64,
    pub products: Vec<Product>,
}

/// Newest twelve products with their categories
#[utoipa::path(
    get,
    path = "/api/v1/product/get-product",
    tag = "product",
    responses(
        (status = 200, description = "All products", body = ProductListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/get-product")]
pub async fn get_products_handler(data: web::Data<AppState>) -> impl Responder {
    match data.product.browse.latest().await {
        Ok(latest) => ApiResponse::ok(
            "All products",
            ProductListResponse {
                count_total: latest.total,
                products: latest.products,
            },
        ),
        Err(e) => {
            error!("Listing products failed: {}", e);
            ApiResponse::internal_error("Error in getting products", &e)
        }
    }
}
