use actix_web::{get, web, Responder};
use tracing::error;

use super::create_category::CategoryResponse;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::category::application::ports::incoming::use_cases::GetSingleCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one category by slug
#[utoipa::path(
    get,
    path = "/api/v1/category/single-category/{slug}",
    tag = "category",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Get single category successfully", body = CategoryResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/category/single-category/{slug}")]
pub async fn get_single_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.category.get_single.execute(&slug).await {
        Ok(category) => {
            ApiResponse::ok("Get single category successfully", CategoryResponse { category })
        }
        Err(GetSingleCategoryError::CategoryNotFound) => ApiResponse::not_found("Category not found"),
        Err(e) => {
            error!("Fetching category {} failed: {}", slug, e);
            ApiResponse::internal_error("Error while getting single category", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, catalog_fixtures::sample_category,
        stubs::StubGetSingleCategoryUseCase,
    };

    #[actix_web::test]
    async fn known_slug_returns_category() {
        let state = TestAppStateBuilder::default()
            .with_get_single_category(StubGetSingleCategoryUseCase::found(sample_category("Books")))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_single_category_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/category/single-category/books")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["category"]["slug"], "books");
    }

    #[actix_web::test]
    async fn unknown_slug_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_single_category_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/category/single-category/ghost")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["message"], "Category not found");
    }
}
