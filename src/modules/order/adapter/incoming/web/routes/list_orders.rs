use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, AuthenticatedUser};
use crate::order::application::domain::entities::Order;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

/// Orders placed by the signed-in buyer, newest first
#[utoipa::path(
    get,
    path = "/api/v1/auth/orders",
    tag = "order",
    responses(
        (status = 200, description = "Buyer orders", body = OrderListResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/auth/orders")]
pub async fn buyer_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.list.for_buyer(user.user_id).await {
        Ok(orders) => ApiResponse::ok("Orders fetched", OrderListResponse { orders }),
        Err(e) => {
            error!("Listing orders for {} failed: {}", user.user_id, e);
            ApiResponse::internal_error("Error while getting orders", &e)
        }
    }
}

/// Every order in the shop, newest first
#[utoipa::path(
    get,
    path = "/api/v1/auth/all-orders",
    tag = "order",
    responses(
        (status = 200, description = "All orders", body = OrderListResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/auth/all-orders")]
pub async fn all_orders_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.order.list.all().await {
        Ok(orders) => ApiResponse::ok("All orders fetched", OrderListResponse { orders }),
        Err(e) => {
            error!("Listing all orders failed: {}", e);
            ApiResponse::internal_error("Error while getting orders", &e)
        }
    }
}
