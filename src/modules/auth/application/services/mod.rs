mod forgot_password_service;
mod login_user_service;
mod register_user_service;
mod update_profile_service;

pub use forgot_password_service::ForgotPasswordService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateUserProfileService;
