use actix_web::{get, post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::category::application::domain::entities::Category;
use crate::product::application::domain::entities::{Product, ProductFilter};
use crate::product::application::ports::incoming::use_cases::BrowseProductsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

/// Storefront filter panel: checked category ids and a `[min, max]` price radio.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductFilterRequest {
    #[serde(default)]
    pub checked: Vec<Uuid>,
    #[serde(default)]
    #[schema(value_type = Vec<f64>, example = json!([0, 19.99]))]
    pub radio: Vec<Decimal>,
}

impl ProductFilterRequest {
    fn into_filter(self) -> ProductFilter {
        let price_range = match self.radio.as_slice() {
            [min, max] => Some((*min, *max)),
            _ => None,
        };
        ProductFilter {
            category_ids: self.checked,
            price_range,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
pub struct ProductCountResponse {
    pub total: u64,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryProductsResponse {
    pub category: Category,
    pub products: Vec<Product>,
}

fn browse_failed(context: &str, err: BrowseProductsError) -> HttpResponse {
    error!("{} failed: {}", context, err);
    ApiResponse::internal_error(&format!("Error in {}", context.to_lowercase()), &err)
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Products matching the checked categories and price range
#[utoipa::path(
    post,
    path = "/api/v1/product/product-filters",
    tag = "product",
    request_body = ProductFilterRequest,
    responses(
        (status = 200, description = "Filtered products", body = ProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/product/product-filters")]
pub async fn product_filters_handler(
    data: web::Data<AppState>,
    payload: web::Json<ProductFilterRequest>,
) -> impl Responder {
    match data.product.browse.filter(payload.into_inner().into_filter()).await {
        Ok(products) => ApiResponse::ok("Filtered products", ProductsResponse { products }),
        Err(e) => browse_failed("Filtering products", e),
    }
}

/// Total number of products
#[utoipa::path(
    get,
    path = "/api/v1/product/product-count",
    tag = "product",
    responses(
        (status = 200, description = "Product count", body = ProductCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/product-count")]
pub async fn product_count_handler(data: web::Data<AppState>) -> impl Responder {
    match data.product.browse.count().await {
        Ok(total) => ApiResponse::ok("Product count", ProductCountResponse { total }),
        Err(e) => browse_failed("Product count", e),
    }
}

/// One page of six products, newest first
#[utoipa::path(
    get,
    path = "/api/v1/product/product-list/{page}",
    tag = "product",
    params(("page" = u64, Path, description = "Page number, starting at 1")),
    responses(
        (status = 200, description = "Products on the page", body = ProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/product-list/{page}")]
pub async fn product_list_handler(
    data: web::Data<AppState>,
    path: web::Path<u64>,
) -> impl Responder {
    match data.product.browse.page(path.into_inner()).await {
        Ok(products) => ApiResponse::ok("Products page", ProductsResponse { products }),
        Err(e) => browse_failed("Product page", e),
    }
}

/// Case-insensitive keyword search on name and description
#[utoipa::path(
    get,
    path = "/api/v1/product/search/{keyword}",
    tag = "product",
    params(("keyword" = String, Path, description = "Search keyword")),
    responses(
        (status = 200, description = "Matching products as a bare array", body = [Product]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/search/{keyword}")]
pub async fn search_products_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.product.browse.search(&path.into_inner()).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => browse_failed("Search products", e),
    }
}

/// Up to three other products from the same category
#[utoipa::path(
    get,
    path = "/api/v1/product/related-product/{pid}/{cid}",
    tag = "product",
    params(
        ("pid" = Uuid, Path, description = "Product to exclude"),
        ("cid" = Uuid, Path, description = "Category to draw from"),
    ),
    responses(
        (status = 200, description = "Related products", body = ProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/related-product/{pid}/{cid}")]
pub async fn related_products_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (product_id, category_id) = path.into_inner();

    match data.product.browse.related(product_id, category_id).await {
        Ok(products) => ApiResponse::ok("Related products", ProductsResponse { products }),
        Err(e) => browse_failed("Related products", e),
    }
}

/// Category with all of its products
#[utoipa::path(
    get,
    path = "/api/v1/product/product-category/{slug}",
    tag = "product",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Products in category", body = CategoryProductsResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/product/product-category/{slug}")]
pub async fn product_category_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.product.browse.by_category(&path.into_inner()).await {
        Ok(found) => ApiResponse::ok(
            "Products in category",
            CategoryProductsResponse {
                category: found.category,
                products: found.products,
            },
        ),
        Err(BrowseProductsError::CategoryNotFound) => ApiResponse::not_found("Category not found"),
        Err(e) => browse_failed("Category products", e),
    }
}
