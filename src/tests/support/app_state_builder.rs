use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserProfileUseCase,
};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase, GetSingleCategoryUseCase,
    UpdateCategoryUseCase,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::incoming::use_cases::{
    ListOrdersUseCase, PlaceOrderUseCase, UpdateOrderStatusUseCase,
};
use crate::product::application::ports::incoming::use_cases::{
    BrowseProductsUseCase, CreateProductUseCase, DeleteProductUseCase, GetProductPhotoUseCase,
    GetSingleProductUseCase, UpdateProductUseCase,
};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every slot starts as a stub; tests swap in only what they exercise.
pub struct TestAppStateBuilder {
    user_query: Arc<dyn UserQuery + Send + Sync>,
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    forgot_password: Arc<dyn ForgotPasswordUseCase + Send + Sync>,
    update_user_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    category: CategoryUseCases,
    product: ProductUseCases,
    order: OrderUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user_query: Arc::new(StubUserQuery::returning(None)),
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            forgot_password: Arc::new(StubForgotPasswordUseCase),
            update_user_profile: Arc::new(StubUpdateUserProfileUseCase),
            category: CategoryUseCases {
                create: Arc::new(StubCreateCategoryUseCase),
                update: Arc::new(StubUpdateCategoryUseCase),
                get_list: Arc::new(StubGetCategoriesUseCase::success(vec![])),
                get_single: Arc::new(StubGetSingleCategoryUseCase::default()),
                delete: Arc::new(StubDeleteCategoryUseCase),
            },
            product: ProductUseCases {
                create: Arc::new(StubCreateProductUseCase),
                update: Arc::new(StubUpdateProductUseCase),
                delete: Arc::new(StubDeleteProductUseCase),
                get_single: Arc::new(StubGetSingleProductUseCase::default()),
                get_photo: Arc::new(StubGetProductPhotoUseCase::default()),
                browse: Arc::new(StubBrowseProductsUseCase::default()),
            },
            order: OrderUseCases {
                place: Arc::new(StubPlaceOrderUseCase),
                list: Arc::new(StubListOrdersUseCase),
                update_status: Arc::new(StubUpdateOrderStatusUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ──── Auth ────

    pub fn with_user_query(mut self, query: impl UserQuery + Send + Sync + 'static) -> Self {
        self.user_query = Arc::new(query);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_forgot_password(
        mut self,
        uc: impl ForgotPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.forgot_password = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user_profile = Arc::new(uc);
        self
    }

    // ──── Category ────

    pub fn with_create_category(
        mut self,
        uc: impl CreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.create = Arc::new(uc);
        self
    }

    pub fn with_update_category(
        mut self,
        uc: impl UpdateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.update = Arc::new(uc);
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl DeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.delete = Arc::new(uc);
        self
    }

    pub fn with_get_categories(
        mut self,
        uc: impl GetCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_category(
        mut self,
        uc: impl GetSingleCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.get_single = Arc::new(uc);
        self
    }

    // ──── Product ────

    pub fn with_create_product(
        mut self,
        uc: impl CreateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.create = Arc::new(uc);
        self
    }

    pub fn with_update_product(
        mut self,
        uc: impl UpdateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.update = Arc::new(uc);
        self
    }

    pub fn with_delete_product(
        mut self,
        uc: impl DeleteProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.delete = Arc::new(uc);
        self
    }

    pub fn with_get_single_product(
        mut self,
        uc: impl GetSingleProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_product_photo(
        mut self,
        uc: impl GetProductPhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.get_photo = Arc::new(uc);
        self
    }

    pub fn with_browse_products(
        mut self,
        uc: impl BrowseProductsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.browse = Arc::new(uc);
        self
    }

    // ──── Order ────

    pub fn with_place_order(mut self, uc: impl PlaceOrderUseCase + Send + Sync + 'static) -> Self {
        self.order.place = Arc::new(uc);
        self
    }

    pub fn with_list_orders(mut self, uc: impl ListOrdersUseCase + Send + Sync + 'static) -> Self {
        self.order.list = Arc::new(uc);
        self
    }

    pub fn with_update_order_status(
        mut self,
        uc: impl UpdateOrderStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.update_status = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user_query: self.user_query,
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            forgot_password_use_case: self.forgot_password,
            update_user_profile_use_case: self.update_user_profile,
            category: self.category,
            product: self.product,
            order: self.order,
        })
    }
}
