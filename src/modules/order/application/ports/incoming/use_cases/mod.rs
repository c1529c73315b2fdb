mod list_orders;
mod place_order;
mod update_order_status;

pub use list_orders::{ListOrdersError, ListOrdersUseCase};
pub use place_order::{CheckoutInputError, PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase};
pub use update_order_status::{
    UpdateOrderStatusCommand, UpdateOrderStatusCommandError, UpdateOrderStatusError,
    UpdateOrderStatusUseCase,
};
