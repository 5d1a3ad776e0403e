use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted simulated buy order. Rows are append-only; nothing updates or
/// deletes an order after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyOrder {
    #[serde(rename = "_id")]
    pub buy_order_id: Uuid,

    pub stock_symbol: String,
    pub stock_name: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_and_time_of_order: DateTime<Utc>,

    pub quantity: u32,
    pub price: f64,
}
