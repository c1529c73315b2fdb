use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserView};
use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordCommand, ForgotPasswordError, ForgotPasswordUseCase, LoginCommand, LoginError,
    LoginOutput, LoginUserUseCase, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateUserProfileUseCase,
};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError,
    DeleteCategoryUseCase, GetCategoriesError, GetCategoriesUseCase, GetSingleCategoryError,
    GetSingleCategoryUseCase, UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase,
};
use crate::order::application::domain::entities::Order;
use crate::order::application::ports::incoming::use_cases::{
    ListOrdersError, ListOrdersUseCase, PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase,
    UpdateOrderStatusCommand, UpdateOrderStatusError, UpdateOrderStatusUseCase,
};
use crate::product::application::domain::entities::{Product, ProductFilter, ProductPhoto};
use crate::product::application::ports::incoming::use_cases::{
    BrowseProductsError, BrowseProductsUseCase, CategoryProducts, CreateProductCommand,
    CreateProductError, CreateProductUseCase, DeleteProductError, DeleteProductUseCase,
    GetProductPhotoError, GetProductPhotoUseCase, GetSingleProductError, GetSingleProductUseCase,
    LatestProducts, UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
};

// ============================================================
// Auth
// ============================================================

/// Answers every lookup with the same user.
#[derive(Clone)]
pub struct StubUserQuery {
    user: Option<User>,
}

impl StubUserQuery {
    pub fn returning(user: Option<User>) -> Self {
        Self { user }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn find_by_email_and_answer(
        &self,
        _email: &str,
        _answer: &str,
    ) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone())
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubForgotPasswordUseCase;

#[async_trait]
impl ForgotPasswordUseCase for StubForgotPasswordUseCase {
    async fn execute(&self, _command: ForgotPasswordCommand) -> Result<(), ForgotPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(&self, _command: UpdateProfileCommand) -> Result<UserView, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Category
// ============================================================

#[derive(Default, Clone)]
pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(&self, _command: CreateCategoryCommand) -> Result<Category, CreateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCategoryUseCase;

#[async_trait]
impl UpdateCategoryUseCase for StubUpdateCategoryUseCase {
    async fn execute(&self, _command: UpdateCategoryCommand) -> Result<Category, UpdateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetCategoriesUseCase {
    result: Result<Vec<Category>, GetCategoriesError>,
}

impl StubGetCategoriesUseCase {
    pub fn success(categories: Vec<Category>) -> Self {
        Self {
            result: Ok(categories),
        }
    }

    pub fn failing(error: GetCategoriesError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.result.clone()
    }
}

/// Not found unless built with `found`.
#[derive(Default, Clone)]
pub struct StubGetSingleCategoryUseCase {
    category: Option<Category>,
}

impl StubGetSingleCategoryUseCase {
    pub fn found(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }
}

#[async_trait]
impl GetSingleCategoryUseCase for StubGetSingleCategoryUseCase {
    async fn execute(&self, _slug: &str) -> Result<Category, GetSingleCategoryError> {
        self.category
            .clone()
            .ok_or(GetSingleCategoryError::CategoryNotFound)
    }
}

// ============================================================
// Product
// ============================================================

#[derive(Default, Clone)]
pub struct StubCreateProductUseCase;

#[async_trait]
impl CreateProductUseCase for StubCreateProductUseCase {
    async fn execute(&self, _command: CreateProductCommand) -> Result<Product, CreateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProductUseCase;

#[async_trait]
impl UpdateProductUseCase for StubUpdateProductUseCase {
    async fn execute(&self, _command: UpdateProductCommand) -> Result<Product, UpdateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProductUseCase;

#[async_trait]
impl DeleteProductUseCase for StubDeleteProductUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProductUseCase {
    product: Option<Product>,
}

impl StubGetSingleProductUseCase {
    pub fn found(product: Product) -> Self {
        Self {
            product: Some(product),
        }
    }
}

#[async_trait]
impl GetSingleProductUseCase for StubGetSingleProductUseCase {
    async fn execute(&self, _slug: &str) -> Result<Product, GetSingleProductError> {
        self.product
            .clone()
            .ok_or(GetSingleProductError::ProductNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetProductPhotoUseCase {
    photo: Option<ProductPhoto>,
}

impl StubGetProductPhotoUseCase {
    pub fn found(photo: ProductPhoto) -> Self {
        Self { photo: Some(photo) }
    }
}

#[async_trait]
impl GetProductPhotoUseCase for StubGetProductPhotoUseCase {
    async fn execute(&self, _product_id: Uuid) -> Result<ProductPhoto, GetProductPhotoError> {
        self.photo.clone().ok_or(GetProductPhotoError::PhotoNotFound)
    }
}

/// Canned catalog views. `products` backs every list call; `fail` turns all of
/// them into query failures.
#[derive(Default, Clone)]
pub struct StubBrowseProductsUseCase {
    pub latest: Option<LatestProducts>,
    pub count: u64,
    pub products: Vec<Product>,
    pub by_category: Option<CategoryProducts>,
    pub fail: bool,
}

impl StubBrowseProductsUseCase {
    fn list(&self) -> Result<Vec<Product>, BrowseProductsError> {
        if self.fail {
            return Err(BrowseProductsError::QueryFailed("stubbed failure".into()));
        }
        Ok(self.products.clone())
    }
}

#[async_trait]
impl BrowseProductsUseCase for StubBrowseProductsUseCase {
    async fn latest(&self) -> Result<LatestProducts, BrowseProductsError> {
        let products = self.list()?;
        Ok(self.latest.clone().unwrap_or(LatestProducts {
            total: products.len() as u64,
            products,
        }))
    }

    async fn count(&self) -> Result<u64, BrowseProductsError> {
        self.list().map(|_| self.count)
    }

    async fn page(&self, _page: u64) -> Result<Vec<Product>, BrowseProductsError> {
        self.list()
    }

    async fn filter(&self, _filter: ProductFilter) -> Result<Vec<Product>, BrowseProductsError> {
        self.list()
    }

    async fn search(&self, _keyword: &str) -> Result<Vec<Product>, BrowseProductsError> {
        self.list()
    }

    async fn related(
        &self,
        _product_id: Uuid,
        _category_id: Uuid,
    ) -> Result<Vec<Product>, BrowseProductsError> {
        self.list()
    }

    async fn by_category(&self, _slug: &str) -> Result<CategoryProducts, BrowseProductsError> {
        self.list()?;
        self.by_category
            .clone()
            .ok_or(BrowseProductsError::CategoryNotFound)
    }
}

// ============================================================
// Order
// ============================================================

#[derive(Default, Clone)]
pub struct StubPlaceOrderUseCase;

#[async_trait]
impl PlaceOrderUseCase for StubPlaceOrderUseCase {
    async fn execute(&self, _command: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListOrdersUseCase;

#[async_trait]
impl ListOrdersUseCase for StubListOrdersUseCase {
    async fn for_buyer(&self, _buyer_id: Uuid) -> Result<Vec<Order>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }

    async fn all(&self) -> Result<Vec<Order>, ListOrdersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateOrderStatusUseCase;

#[async_trait]
impl UpdateOrderStatusUseCase for StubUpdateOrderStatusUseCase {
    async fn execute(
        &self,
        _command: UpdateOrderStatusCommand,
    ) -> Result<Order, UpdateOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}
