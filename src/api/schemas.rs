// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for responses that carry nothing but a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// `false` for every 4xx
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Category deleted successfully")]
    pub message: String,
}

/// Envelope for 5xx responses
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Error in creating product")]
    pub message: String,
    /// Underlying cause, echoed for debugging
    #[schema(example = "Database error: connection refused")]
    pub error: String,
}
