pub mod buy_order;
pub mod order_response;
pub mod sell_order;

pub use buy_order::{BuyOrderRequest, BuyOrderResponse};
pub use order_response::{all_orders, OrderResponse, OrderType};
pub use sell_order::{SellOrderRequest, SellOrderResponse};
