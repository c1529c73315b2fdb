use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError, LoginOutput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// Password
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

/// User login
///
/// Authenticates with email and password and returns the public user plus a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = LoginOutput,
            example = json!({
                "success": true,
                "message": "Login successfully",
                "user": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "+62 812 0000 0000",
                    "address": "Jl. Sudirman 1, Jakarta",
                    "role": 0
                },
                "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
            })
        ),
        (status = 400, description = "Email or password missing", body = MessageResponse),
        (status = 401, description = "Wrong password", body = MessageResponse),
        (status = 404, description = "Email is not registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!(email = %command.email(), "Login attempt");

    match data.login_user_use_case.execute(command).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "Login successful");
            ApiResponse::ok("Login successfully", output)
        }
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::EmailNotRegistered => ApiResponse::not_found("Email is not registered"),
        LoginError::InvalidPassword => {
            warn!("Login failed: invalid password");
            ApiResponse::unauthorized("Invalid password")
        }
        LoginError::PasswordVerificationFailed(ref cause)
        | LoginError::TokenGenerationFailed(ref cause)
        | LoginError::QueryError(ref cause) => {
            error!("Login failed: {}", cause);
            ApiResponse::internal_error("Error in login", &err)
        }
    }
}
