use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordCommand, ForgotPasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "blue")]
    pub answer: Option<String>,
    #[schema(example = "another-secret")]
    pub new_password: Option<String>,
}

/// Reset a password with the security answer
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Password reset successfully", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = MessageResponse),
        (status = 404, description = "Wrong email or answer", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ForgotPasswordCommand::new(dto.email, dto.answer, dto.new_password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.forgot_password_use_case.execute(command).await {
        Ok(()) => {
            info!("Password reset through security answer");
            ApiResponse::success("Password reset successfully")
        }
        Err(e) => map_forgot_password_error(e),
    }
}

fn map_forgot_password_error(err: ForgotPasswordError) -> HttpResponse {
    match err {
        ForgotPasswordError::WrongEmailOrAnswer => ApiResponse::not_found("Wrong email or answer"),
        other => {
            error!("Password reset failed: {}", other);
            ApiResponse::internal_error("Something went wrong", &other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::auth::application::ports::incoming::use_cases::ForgotPasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockForgotPasswordUseCase {
        result: Result<(), ForgotPasswordError>,
    }

    #[async_trait]
    impl ForgotPasswordUseCase for MockForgotPasswordUseCase {
        async fn execute(&self, _command: ForgotPasswordCommand) -> Result<(), ForgotPasswordError> {
            self.result.clone()
        }
    }

    async fn call(
        mock: MockForgotPasswordUseCase,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_forgot_password(mock).build();
        let app =
            test::init_service(App::new().app_data(state).service(forgot_password_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/forgot-password")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn reset_succeeds() {
        let (status, json) = call(
            MockForgotPasswordUseCase { result: Ok(()) },
            serde_json::json!({ "email": "jane@example.com", "answer": "blue", "newPassword": "fresh-pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Password reset successfully");
    }

    #[actix_web::test]
    async fn missing_new_password_is_bad_request() {
        let (status, json) = call(
            MockForgotPasswordUseCase { result: Ok(()) },
            serde_json::json!({ "email": "jane@example.com", "answer": "blue" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "New password is required");
    }

    #[actix_web::test]
    async fn wrong_answer_is_not_found() {
        let (status, json) = call(
            MockForgotPasswordUseCase {
                result: Err(ForgotPasswordError::WrongEmailOrAnswer),
            },
            serde_json::json!({ "email": "jane@example.com", "answer": "red", "newPassword": "fresh-pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Wrong email or answer");
    }
}
