pub mod buy_order;
pub mod sell_order;

pub use buy_order::BuyOrder;
pub use sell_order::SellOrder;
