use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{BuyOrderResponse, SellOrderResponse};

/// Discriminator for the two order kinds when they appear in one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderType {
    BuyOrder,
    SellOrder,
}

/// A buy or sell response reduced to the fields the two kinds share, tagged
/// with its kind. Used wherever the order histories are merged for display
/// or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderResponse {
    pub order_type: OrderType,
    pub order_id: Uuid,
    pub stock_symbol: String,
    pub stock_name: String,
    pub date_and_time_of_order: DateTime<Utc>,
    pub quantity: u32,
    pub price: f64,
    pub trade_amount: f64,
}

impl From<BuyOrderResponse> for OrderResponse {
    fn from(r: BuyOrderResponse) -> Self {
        OrderResponse {
            order_type: OrderType::BuyOrder,
            order_id: r.buy_order_id,
            stock_symbol: r.stock_symbol,
            stock_name: r.stock_name,
            date_and_time_of_order: r.date_and_time_of_order,
            quantity: r.quantity,
            price: r.price,
            trade_amount: r.trade_amount,
        }
    }
}

impl From<SellOrderResponse> for OrderResponse {
    fn from(r: SellOrderResponse) -> Self {
        OrderResponse {
            order_type: OrderType::SellOrder,
            order_id: r.sell_order_id,
            stock_symbol: r.stock_symbol,
            stock_name: r.stock_name,
            date_and_time_of_order: r.date_and_time_of_order,
            quantity: r.quantity,
            price: r.price,
            trade_amount: r.trade_amount,
        }
    }
}

/// Merges the two independently ordered histories into a single list,
/// most recent order first.
pub fn all_orders(
    buy_orders: Vec<BuyOrderResponse>,
    sell_orders: Vec<SellOrderResponse>,
) -> Vec<OrderResponse> {
    let mut orders: Vec<OrderResponse> = buy_orders
        .into_iter()
        .map(OrderResponse::from)
        .chain(sell_orders.into_iter().map(OrderResponse::from))
        .collect();

    orders.sort_by(|a, b| b.date_and_time_of_order.cmp(&a.date_and_time_of_order));
    orders
}
