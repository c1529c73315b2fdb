mod list_orders;
mod place_order;
mod update_order_status;

pub use list_orders::*;
pub use place_order::*;
pub use update_order_status::*;
