use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::product::application::ports::incoming::use_cases::DeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/v1/product/delete-product/{pid}",
    tag = "product",
    params(("pid" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageResponse),
        (status = 403, description = "Unauthorized access", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/v1/product/delete-product/{pid}")]
pub async fn delete_product_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.delete.execute(product_id).await {
        Ok(()) => {
            info!(admin = %admin.user_id, product = %product_id, "Product deleted");
            ApiResponse::success("Product deleted successfully")
        }
        Err(DeleteProductError::ProductNotFound) => ApiResponse::not_found("Product not found"),
        Err(e) => {
            error!("Delete product failed: {}", e);
            ApiResponse::internal_error("Error while deleting product", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::product::application::ports::incoming::use_cases::DeleteProductUseCase;
    use crate::tests::support::auth_helper::{
        admin_state_builder, bearer, token_provider_data, StubTokenProvider,
    };

    #[derive(Clone)]
    struct MockDeleteProductUseCase {
        result: Result<(), DeleteProductError>,
    }

    #[async_trait]
    impl DeleteProductUseCase for MockDeleteProductUseCase {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteProductError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<(), DeleteProductError>) -> actix_web::dev::ServiceResponse {
        let (builder, admin_id) = admin_state_builder();
        let state = builder
            .with_delete_product(MockDeleteProductUseCase { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid(admin_id)))
                .service(delete_product_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/product/delete-product/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn admin_deletes_product() {
        let resp = call(Ok(())).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Product deleted successfully");
    }

    #[actix_web::test]
    async fn unknown_product_is_not_found() {
        let resp = call(Err(DeleteProductError::ProductNotFound)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
