use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{web, HttpResponse};
use tracing::error;
use utoipa::ToSchema;

use crate::product::application::domain::entities::{ProductForm, ProductFormError, ProductPhoto};
use crate::shared::api::ApiResponse;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Multipart body shared by product create and update.
#[derive(Debug, MultipartForm)]
pub struct ProductUploadForm {
    pub name: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub price: Option<Text<String>>,
    pub category: Option<Text<String>>,
    pub quantity: Option<Text<String>>,
    pub shipping: Option<Text<String>>,
    pub photo: Option<TempFile>,
}

/// OpenAPI view of [`ProductUploadForm`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProductUploadSchema {
    #[schema(example = "Rust in Action")]
    name: String,
    description: String,
    #[schema(example = "39.90")]
    price: String,
    #[schema(example = "5f2b7c1e-8d3a-4f6b-9c1d-2e3f4a5b6c7d")]
    category: String,
    #[schema(example = "12")]
    quantity: String,
    #[schema(example = "true")]
    shipping: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    photo: Option<Vec<u8>>,
}

fn text(field: Option<Text<String>>) -> Option<String> {
    field.map(Text::into_inner)
}

impl ProductUploadForm {
    /// Reads the spooled photo back into memory. An empty file part counts as no photo.
    pub async fn into_product_form(self) -> Result<ProductForm, HttpResponse> {
        let photo = match self.photo {
            Some(file) if file.size > 0 => {
                let content_type = file
                    .content_type
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

                let bytes = web::block(move || std::fs::read(file.file.path()))
                    .await
                    .map_err(|e| {
                        error!("Photo read task failed: {}", e);
                        ApiResponse::internal_error("Error while reading photo", &e)
                    })?
                    .map_err(|e| {
                        error!("Reading uploaded photo failed: {}", e);
                        ApiResponse::internal_error("Error while reading photo", &e)
                    })?;

                Some(ProductPhoto {
                    bytes,
                    content_type,
                })
            }
            _ => None,
        };

        Ok(ProductForm {
            name: text(self.name),
            description: text(self.description),
            price: text(self.price),
            category: text(self.category),
            quantity: text(self.quantity),
            shipping: text(self.shipping),
            photo,
        })
    }
}

/// Unknown category ids are reported as missing resources, every other form problem as bad input.
pub fn form_error_response(err: ProductFormError) -> HttpResponse {
    match err {
        ProductFormError::UnknownCategory => ApiResponse::not_found(&err.to_string()),
        other => ApiResponse::bad_request(&other.to_string()),
    }
}
