mod create_category;
mod delete_category;
mod get_categories;
mod get_single_category;
mod update_category;

pub use create_category::*;
pub use delete_category::*;
pub use get_categories::*;
pub use get_single_category::*;
pub use update_category::*;
