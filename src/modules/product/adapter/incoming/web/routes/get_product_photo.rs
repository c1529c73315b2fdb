use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::product::application::ports::incoming::use_cases::GetProductPhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw photo bytes of a product
#[utoipa::path(
    get,
    path = "/api/v1/product/product-photo/{pid}",
    tag = "product",
    params(("pid" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Raw photo bytes with the stored content type"),
        (status = 404, description = "Photo not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/product-photo/{pid}")]
pub async fn get_product_photo_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.product.get_photo.execute(path.into_inner()).await {
        Ok(photo) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, photo.content_type))
            .body(photo.bytes),
        Err(GetProductPhotoError::PhotoNotFound) => ApiResponse::not_found("Photo not found"),
        Err(e) => {
            error!("Fetching product photo failed: {}", e);
            ApiResponse::internal_error("Error while getting photo", &e)
        }
    }
}
