mod auth_check;
mod forgot_password;
mod login_user;
mod register_user;
mod update_profile;

pub use auth_check::*;
pub use forgot_password::*;
pub use login_user::*;
pub use register_user::*;
pub use update_profile::*;
