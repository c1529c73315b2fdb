pub mod app_state_builder;
pub mod auth_helper;
pub mod catalog_fixtures;
pub mod catalog_mocks;
pub mod multipart;
pub mod order_fixtures;
pub mod order_mocks;
pub mod stubs;
