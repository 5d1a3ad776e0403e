use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SellOrder;
use crate::validation::{self, Validate};

/// Caller-supplied shape of a sell order, pre-persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellOrderRequest {
    pub stock_symbol: String,
    pub stock_name: String,
    pub date_and_time_of_order: DateTime<Utc>,
    pub quantity: u32,
    pub price: f64,
}

impl SellOrderRequest {
    pub fn to_sell_order(&self, sell_order_id: Uuid) -> SellOrder {
        SellOrder {
            sell_order_id,
            stock_symbol: self.stock_symbol.clone(),
            stock_name: self.stock_name.clone(),
            date_and_time_of_order: self.date_and_time_of_order,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl Validate for SellOrderRequest {
    fn violations(&self) -> Vec<String> {
        validation::order_violations(
            &self.stock_symbol,
            &self.stock_name,
            self.date_and_time_of_order,
            self.quantity,
            self.price,
        )
    }
}

/// Post-persistence shape of a sell order as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellOrderResponse {
    pub sell_order_id: Uuid,
    pub stock_symbol: String,
    pub stock_name: String,
    pub date_and_time_of_order: DateTime<Utc>,
    pub quantity: u32,
    pub price: f64,
    pub trade_amount: f64,
}

impl SellOrder {
    pub fn to_response(&self) -> SellOrderResponse {
        SellOrderResponse {
            sell_order_id: self.sell_order_id,
            stock_symbol: self.stock_symbol.clone(),
            stock_name: self.stock_name.clone(),
            date_and_time_of_order: self.date_and_time_of_order,
            quantity: self.quantity,
            price: self.price,
            trade_amount: self.price * self.quantity as f64,
        }
    }
}
