mod list_orders_service;
mod place_order_service;
mod update_order_status_service;

pub use list_orders_service::ListOrdersService;
pub use place_order_service::PlaceOrderService;
pub use update_order_status_service::UpdateOrderStatusService;
