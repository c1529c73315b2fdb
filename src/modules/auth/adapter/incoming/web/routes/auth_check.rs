use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, AuthenticatedUser};

/// Probe body for client-side route guards.
#[derive(Serialize)]
struct AuthCheck {
    ok: bool,
}

/// Lets the storefront client check that its stored token is still good.
#[get("/api/v1/auth/user-auth")]
pub async fn user_auth_handler(_user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(AuthCheck { ok: true })
}

/// Same probe for the admin dashboard.
#[get("/api/v1/auth/admin-auth")]
pub async fn admin_auth_handler(_admin: AdminUser) -> impl Responder {
    HttpResponse::Ok().json(AuthCheck { ok: true })
}
