use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::place_order::OrderResponse;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::order::application::ports::incoming::use_cases::{
    UpdateOrderStatusCommand, UpdateOrderStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderStatusRequest {
    #[schema(example = "shipped")]
    pub status: Option<String>,
}

/// Move an order along its fulfilment states
#[utoipa::path(
    put,
    path = "/api/v1/auth/order-status/{orderId}",
    tag = "order",
    params(("orderId" = Uuid, Path, description = "Order id")),
    request_body = OrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = OrderResponse),
        (status = 400, description = "Invalid status", body = MessageResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 404, description = "Order not found", body = MessageResponse),
        (status = 409, description = "Invalid status transition", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/auth/order-status/{orderId}")]
pub async fn update_order_status_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<OrderStatusRequest>,
) -> impl Responder {
    let command = match UpdateOrderStatusCommand::new(path.into_inner(), payload.into_inner().status) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.order.update_status.execute(command).await {
        Ok(order) => {
            info!(admin = %admin.user_id, order = %order.id, status = %order.status, "Order status set");
            ApiResponse::ok("Order status updated", OrderResponse { order })
        }
        Err(e) => map_update_status_error(e),
    }
}

fn map_update_status_error(err: UpdateOrderStatusError) -> HttpResponse {
    match err {
        UpdateOrderStatusError::OrderNotFound => ApiResponse::not_found("Order not found"),
        UpdateOrderStatusError::InvalidTransition { .. } => {
            ApiResponse::conflict("Invalid status transition")
        }
        other => {
            error!("Order status update failed: {}", other);
            ApiResponse::internal_error("Error while updating order", &other)
        }
    }
}
