use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordRequest, LoginRequestDto, RegisterUserRequest, RegisterUserResponse,
    UpdateProfileRequest, UpdateProfileResponse,
};
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::LoginOutput;

// Category
use crate::category::adapter::incoming::web::routes::{
    CategoryListResponse, CategoryRequest, CategoryResponse,
};
use crate::category::application::domain::entities::Category;

// Product
use crate::product::adapter::incoming::web::routes::{
    CategoryProductsResponse, ProductCountResponse, ProductFilterRequest, ProductListResponse,
    ProductResponse, ProductUploadSchema, ProductsResponse,
};
use crate::product::application::domain::entities::{CategoryRef, Product};

// Order
use crate::order::adapter::incoming::web::routes::{
    CartLineDto, OrderListResponse, OrderResponse, OrderStatusRequest, PaymentRequest,
};
use crate::order::application::domain::entities::{
    Buyer, Order, OrderItem, OrderProduct, OrderStatus, PaymentRecord,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Catalog, checkout and order management for the storefront",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,

        // Category endpoints
        crate::category::adapter::incoming::web::routes::create_category_handler,
        crate::category::adapter::incoming::web::routes::update_category_handler,
        crate::category::adapter::incoming::web::routes::get_categories_handler,
        crate::category::adapter::incoming::web::routes::get_single_category_handler,
        crate::category::adapter::incoming::web::routes::delete_category_handler,

        // Product endpoints
        crate::product::adapter::incoming::web::routes::create_product_handler,
        crate::product::adapter::incoming::web::routes::update_product_handler,
        crate::product::adapter::incoming::web::routes::get_products_handler,
        crate::product::adapter::incoming::web::routes::get_single_product_handler,
        crate::product::adapter::incoming::web::routes::get_product_photo_handler,
        crate::product::adapter::incoming::web::routes::delete_product_handler,
        crate::product::adapter::incoming::web::routes::product_filters_handler,
        crate::product::adapter::incoming::web::routes::product_count_handler,
        crate::product::adapter::incoming::web::routes::product_list_handler,
        crate::product::adapter::incoming::web::routes::search_products_handler,
        crate::product::adapter::incoming::web::routes::related_products_handler,
        crate::product::adapter::incoming::web::routes::product_category_handler,

        // Order endpoints
        crate::order::adapter::incoming::web::routes::place_order_handler,
        crate::order::adapter::incoming::web::routes::buyer_orders_handler,
        crate::order::adapter::incoming::web::routes::all_orders_handler,
        crate::order::adapter::incoming::web::routes::update_order_status_handler,
    ),
    components(
        schemas(
            // Response wrappers
            MessageResponse,
            ErrorResponse,

            // Auth DTOs
            RegisterUserRequest,
            RegisterUserResponse,
            LoginRequestDto,
            LoginOutput,
            ForgotPasswordRequest,
            UpdateProfileRequest,
            UpdateProfileResponse,
            UserView,

            // Category DTOs
            Category,
            CategoryRequest,
            CategoryResponse,
            CategoryListResponse,

            // Product DTOs
            Product,
            CategoryRef,
            ProductUploadSchema,
            ProductResponse,
            ProductListResponse,
            ProductsResponse,
            ProductFilterRequest,
            ProductCountResponse,
            CategoryProductsResponse,

            // Order DTOs
            Order,
            OrderItem,
            OrderProduct,
            OrderStatus,
            Buyer,
            PaymentRecord,
            CartLineDto,
            PaymentRequest,
            OrderResponse,
            OrderListResponse,
            OrderStatusRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, sign-in and profile endpoints"),
        (name = "category", description = "Category management endpoints"),
        (name = "product", description = "Catalog management and browsing endpoints"),
        (name = "order", description = "Checkout and order endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by the login endpoint"))
                        .build(),
                ),
            )
        }
    }
}
