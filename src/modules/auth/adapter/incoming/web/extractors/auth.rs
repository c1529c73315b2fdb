use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::{
    auth::application::{domain::entities::UserId, ports::outgoing::TokenProvider},
    AppState,
};

/// Any caller presenting a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(service) => service,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error(
                    "Authentication is not configured",
                    "missing token provider",
                ))));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Invalid or expired token",
            )))),
        }
    }
}

/// A signed-in caller whose stored role is admin.
///
/// The role is read from the user store on every request, so a demotion takes
/// effect without waiting for the token to expire.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload).into_inner();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let user = authenticated?;
            let state = state.ok_or_else(|| {
                create_api_error(ApiResponse::internal_error(
                    "Authentication is not configured",
                    "missing application state",
                ))
            })?;

            match state.user_query.find_by_id(user.user_id).await {
                Ok(Some(found)) if found.role.is_admin() => Ok(AdminUser {
                    user_id: user.user_id,
                }),
                Ok(_) => {
                    tracing::warn!(user_id = %user.user_id, "Admin route refused");
                    Err(create_api_error(ApiResponse::forbidden(
                        "Unauthorized access",
                    )))
                }
                Err(e) => {
                    tracing::error!("Failed to load user {} for admin check: {}", user.user_id, e);
                    Err(create_api_error(ApiResponse::internal_error(
                        "Error in admin middleware",
                        e,
                    )))
                }
            }
        })
    }
}

/// Accepts `Bearer <token>` and, for older clients, the bare token.
fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let raw = req.headers().get("Authorization")?.to_str().ok()?.trim();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
