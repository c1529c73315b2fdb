use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::product_form::{form_error_response, ProductUploadForm, ProductUploadSchema};
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::product::application::domain::entities::Product;
use crate::product::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub product: Product,
}

/// Create a product from a multipart form
#[utoipa::path(
    post,
    path = "/api/v1/product/create-product",
    tag = "product",
    request_body(content = ProductUploadSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/product/create-product")]
pub async fn create_product_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    MultipartForm(upload): MultipartForm<ProductUploadForm>,
) -> impl Responder {
    let form = match upload.into_product_form().await {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    let command = match CreateProductCommand::new(form) {
        Ok(cmd) => cmd,
        Err(e) => return form_error_response(e),
    };

    match data.product.create.execute(command).await {
        Ok(product) => {
            info!(admin = %admin.user_id, slug = %product.slug, "Product created");
            ApiResponse::created("Product created successfully", ProductResponse { product })
        }
        Err(e) => map_create_product_error(e),
    }
}

fn map_create_product_error(err: CreateProductError) -> HttpResponse {
    match err {
        CreateProductError::CategoryNotFound => ApiResponse::not_found("Category not found"),
        other => {
            error!("Create product failed: {}", other);
            ApiResponse::internal_error("Error in creating product", &other)
        }
    }
}
