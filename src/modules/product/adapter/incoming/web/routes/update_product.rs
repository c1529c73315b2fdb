use actix_multipart::form::MultipartForm;
use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::create_product::ProductResponse;
use super::product_form::{form_error_response, ProductUploadForm, ProductUploadSchema};
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::product::application::ports::incoming::use_cases::{
    UpdateProductCommand, UpdateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace a product's fields; the stored photo is kept when none is uploaded
#[utoipa::path(
    put,
    path = "/api/v1/product/update-product/{pid}",
    tag = "product",
    params(("pid" = Uuid, Path, description = "Product id")),
    request_body(content = ProductUploadSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 404, description = "Product or category not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/product/update-product/{pid}")]
pub async fn update_product_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    MultipartForm(upload): MultipartForm<ProductUploadForm>,
) -> impl Responder {
    let form = match upload.into_product_form().await {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    let command = match UpdateProductCommand::new(path.into_inner(), form) {
        Ok(cmd) => cmd,
        Err(e) => return form_error_response(e),
    };

    let product_id = command.id();
    match data.product.update.execute(command).await {
        Ok(product) => {
            info!(admin = %admin.user_id, product = %product_id, "Product updated");
            ApiResponse::ok("Product updated successfully", ProductResponse { product })
        }
        Err(e) => map_update_product_error(e),
    }
}

fn map_update_product_error(err: UpdateProductError) -> HttpResponse {
    match err {
        UpdateProductError::ProductNotFound => ApiResponse::not_found("Product not found"),
        UpdateProductError::CategoryNotFound => ApiResponse::not_found("Category not found"),
        other => {
            error!("Update product failed: {}", other);
            ApiResponse::internal_error("Error in updating product", &other)
        }
    }
}
