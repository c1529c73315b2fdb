// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt::Display;

/// Envelope shared by every JSON endpoint: `{ success, message, ...payload }`.
///
/// The payload is flattened into the top level, so it must serialize as a map.
/// `error` is only present on internal failures, where the cause is echoed back.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, payload: T) -> HttpResponse {
        Self::with_status(StatusCode::OK, message, payload)
    }

    pub fn created(message: &str, payload: T) -> HttpResponse {
        Self::with_status(StatusCode::CREATED, message, payload)
    }

    pub fn with_status(status: StatusCode, message: &str, payload: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: true,
            message: message.to_string(),
            error: None,
            payload: Some(payload),
        })
    }
}

impl ApiResponse<()> {
    pub fn success(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            message: message.to_string(),
            error: None,
            payload: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            error: None,
            payload: None,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn payment_required(message: &str) -> HttpResponse {
        Self::error(StatusCode::PAYMENT_REQUIRED, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: &str, cause: impl Display) -> HttpResponse {
        HttpResponse::InternalServerError().json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            error: Some(cause.to_string()),
            payload: None,
        })
    }
}
