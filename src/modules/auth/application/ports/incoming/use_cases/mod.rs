mod forgot_password;
mod login_user;
mod register_user;
mod update_profile;

pub use forgot_password::{
    ForgotPasswordCommand, ForgotPasswordCommandError, ForgotPasswordError, ForgotPasswordUseCase,
};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginOutput, LoginUserUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
    UpdateUserProfileUseCase, MIN_PASSWORD_LEN,
};
