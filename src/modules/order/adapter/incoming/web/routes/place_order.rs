use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::order::application::domain::entities::{CartLine, Order};
use crate::order::application::ports::incoming::use_cases::{PlaceOrderCommand, PlaceOrderError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTO
// ──────────────────────────────────────────────────────────
//

fn one() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartLineDto {
    /// Older clients send the whole product with its `_id`
    #[serde(alias = "_id")]
    pub product_id: Uuid,
    #[serde(default = "one")]
    #[schema(example = 1)]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentRequest {
    #[schema(example = "fake-valid-nonce")]
    pub nonce: Option<String>,
    #[serde(default)]
    pub cart: Vec<CartLineDto>,
}

#[derive(Serialize, ToSchema)]
pub struct OrderResponse {
    pub order: Order,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Charge the cart and record the order
#[utoipa::path(
    post,
    path = "/api/v1/product/braintree/payment",
    tag = "order",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Cart is empty, nonce missing or quantity invalid", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 402, description = "Payment declined", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/product/braintree/payment")]
pub async fn place_order_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<PaymentRequest>,
) -> impl Responder {
    let PaymentRequest { nonce, cart } = payload.into_inner();
    let lines = cart
        .into_iter()
        .map(|l| CartLine {
            product_id: l.product_id,
            quantity: l.quantity,
        })
        .collect();

    let command = match PlaceOrderCommand::new(user.user_id, nonce, lines) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.order.place.execute(command).await {
        Ok(order) => ApiResponse::ok("Order placed", OrderResponse { order }),
        Err(e) => map_place_order_error(e),
    }
}

fn map_place_order_error(err: PlaceOrderError) -> HttpResponse {
    match err {
        PlaceOrderError::ProductNotFound(_) => ApiResponse::not_found(&err.to_string()),
        PlaceOrderError::PaymentDeclined(msg) => ApiResponse::payment_required(&msg),
        other => {
            error!("Checkout failed: {}", other);
            ApiResponse::internal_error("Error in payment", &other)
        }
    }
}
