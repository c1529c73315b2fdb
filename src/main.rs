pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, category, order, product};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserProfileUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::{
    ForgotPasswordService, LoginUserService, RegisterUserService, UpdateUserProfileService,
};

use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, GetCategoriesService, GetSingleCategoryService,
    UpdateCategoryService,
};

use crate::product::adapter::outgoing::{ProductQueryPostgres, ProductRepositoryPostgres};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::services::{
    BrowseProductsService, CreateProductService, DeleteProductService, GetProductPhotoService,
    GetSingleProductService, UpdateProductService,
};

use crate::order::adapter::outgoing::{
    OrderQueryPostgres, OrderRepositoryPostgres, PassthroughPaymentGateway,
    ProductPriceQueryPostgres,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::services::{
    ListOrdersService, PlaceOrderService, UpdateOrderStatusService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_dotenv, AppConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user_query: Arc<dyn UserQuery + Send + Sync>,
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub forgot_password_use_case: Arc<dyn ForgotPasswordUseCase + Send + Sync>,
    pub update_user_profile_use_case: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub category: CategoryUseCases,
    pub product: ProductUseCases,
    pub order: OrderUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();
    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(BcryptHasher::new(config.bcrypt_cost));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    if let Some(email) = config.admin_email.as_deref() {
        match user_repo.set_role_by_email(email, Role::Admin).await {
            Ok(()) => info!(email, "Admin role granted"),
            Err(UserRepositoryError::UserNotFound) => {
                warn!(email, "ADMIN_EMAIL does not match a registered user yet")
            }
            Err(e) => return Err(e).context("Failed to promote admin account"),
        }
    }

    let register_user_use_case =
        RegisterUserService::new(user_query.clone(), user_repo.clone(), Arc::clone(&hasher));
    let login_user_use_case = LoginUserService::new(
        user_query.clone(),
        Arc::clone(&hasher),
        Arc::clone(&token_provider),
    );
    let forgot_password_use_case =
        ForgotPasswordService::new(user_query.clone(), user_repo.clone(), Arc::clone(&hasher));
    let update_user_profile_use_case =
        UpdateUserProfileService::new(user_query.clone(), user_repo, Arc::clone(&hasher));

    // Catalog
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db_arc));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));

    let category = CategoryUseCases {
        create: Arc::new(CreateCategoryService::new(
            category_query.clone(),
            category_repo.clone(),
        )),
        update: Arc::new(UpdateCategoryService::new(category_repo.clone())),
        get_list: Arc::new(GetCategoriesService::new(category_query.clone())),
        get_single: Arc::new(GetSingleCategoryService::new(category_query.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo)),
    };

    let product = ProductUseCases {
        create: Arc::new(CreateProductService::new(
            category_query.clone(),
            product_repo.clone(),
        )),
        update: Arc::new(UpdateProductService::new(
            category_query.clone(),
            product_repo.clone(),
        )),
        delete: Arc::new(DeleteProductService::new(product_repo)),
        get_single: Arc::new(GetSingleProductService::new(product_query.clone())),
        get_photo: Arc::new(GetProductPhotoService::new(product_query.clone())),
        browse: Arc::new(BrowseProductsService::new(product_query, category_query)),
    };

    // Orders
    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));

    let order = OrderUseCases {
        place: Arc::new(PlaceOrderService::new(
            ProductPriceQueryPostgres::new(Arc::clone(&db_arc)),
            PassthroughPaymentGateway,
            order_repo.clone(),
            order_query.clone(),
        )),
        list: Arc::new(ListOrdersService::new(order_query.clone())),
        update_status: Arc::new(UpdateOrderStatusService::new(order_query, order_repo)),
    };

    let state = AppState {
        user_query: Arc::new(user_query),
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        forgot_password_use_case: Arc::new(forgot_password_use_case),
        update_user_profile_use_case: Arc::new(update_user_profile_use_case),
        category,
        product,
        order,
    };

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::user_auth_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_auth_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    // Orders
    cfg.service(crate::order::adapter::incoming::web::routes::buyer_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::all_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::update_order_status_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::place_order_handler);
    // Category
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::update_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_single_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    // Product
    cfg.service(crate::product::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_single_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_product_photo_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::delete_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::product_filters_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::product_count_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::product_list_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::search_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::related_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::product_category_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
