use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{ProfileUpdate, UserView};
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every field is optional. Blank values keep what is stored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "")]
    pub password: Option<String>,
    #[schema(example = "+62 812 0000 0000")]
    pub phone: Option<String>,
    #[schema(example = "Jl. Sudirman 1, Jakarta")]
    pub address: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub updated_user: UserView,
}

#[derive(Serialize)]
struct BareError {
    error: String,
}

/// Update the signed-in user's profile
#[utoipa::path(
    put,
    path = "/api/v1/auth/profile",
    tag = "auth",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = UpdateProfileResponse),
        (status = 400, description = "Password too short, body is `{error}`"),
        (status = 401, description = "Not signed in", body = MessageResponse),
        (status = 404, description = "User no longer exists", body = MessageResponse),
        (status = 409, description = "Email belongs to another account", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/auth/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let changes = ProfileUpdate {
        name: dto.name,
        email: dto.email,
        phone: dto.phone,
        address: dto.address,
    };

    // This error keeps its bare `{error}` shape for existing clients.
    let command = match UpdateProfileCommand::new(user.id(), changes, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => {
            return HttpResponse::BadRequest().json(BareError {
                error: e.to_string(),
            })
        }
    };

    match data.update_user_profile_use_case.execute(command).await {
        Ok(updated_user) => {
            info!(user_id = %updated_user.id, "Profile updated");
            ApiResponse::ok(
                "Profile updated successfully",
                UpdateProfileResponse { updated_user },
            )
        }
        Err(e) => map_update_error(e),
    }
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::UserNotFound => ApiResponse::not_found("User not found"),
        UpdateProfileError::EmailTaken => ApiResponse::conflict("Email is already in use"),
        other => {
            error!("Profile update failed: {}", other);
            ApiResponse::internal_error("Error while updating profile", &other)
        }
    }
}
