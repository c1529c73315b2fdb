use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Sign-up form. Every field is required; missing ones are reported in form order.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret1")]
    pub password: Option<String>,
    #[schema(example = "+62 812 0000 0000")]
    pub phone: Option<String>,
    #[schema(example = "Jl. Sudirman 1, Jakarta")]
    pub address: Option<String>,
    /// Answer to the security question, used by forgot-password
    #[schema(example = "blue")]
    pub answer: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    pub user: UserView,
}

/// Register a customer account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterUserResponse),
        (status = 400, description = "A required field is missing", body = MessageResponse),
        (status = 409, description = "Email already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(
        dto.name,
        dto.email,
        dto.password,
        dto.phone,
        dto.address,
        dto.answer,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    info!(email = %command.email(), "Registration attempt");

    match data.register_user_use_case.execute(command).await {
        Ok(user) => ApiResponse::created("User registered successfully", RegisterUserResponse { user }),
        Err(e) => map_register_error(e),
    }
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyRegistered => {
            warn!("Registration refused, email already registered");
            ApiResponse::conflict("Already registered, please login")
        }
        RegisterUserError::HashError(ref cause)
        | RegisterUserError::QueryError(ref cause)
        | RegisterUserError::RepositoryError(ref cause) => {
            error!("Registration failed: {}", cause);
            ApiResponse::internal_error("Error in registration", &err)
        }
    }
}
