use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted simulated sell order. Structurally identical to `BuyOrder`
/// aside from its name; the two live in separate collections with no
/// relationship between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellOrder {
    #[serde(rename = "_id")]
    pub sell_order_id: Uuid,

    pub stock_symbol: String,
    pub stock_name: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_and_time_of_order: DateTime<Utc>,

    pub quantity: u32,
    pub price: f64,
}
