use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::BuyOrder;
use crate::validation::{self, Validate};

/// Caller-supplied shape of a buy order, pre-persistence. Discarded once it
/// has been validated and converted into a `BuyOrder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyOrderRequest {
    pub stock_symbol: String,
    pub stock_name: String,
    pub date_and_time_of_order: DateTime<Utc>,
    pub quantity: u32,
    pub price: f64,
}

impl BuyOrderRequest {
    /// Field-for-field copy into the entity; identity is supplied by the
    /// service, never by the caller.
    pub fn to_buy_order(&self, buy_order_id: Uuid) -> BuyOrder {
        BuyOrder {
            buy_order_id,
            stock_symbol: self.stock_symbol.clone(),
            stock_name: self.stock_name.clone(),
            date_and_time_of_order: self.date_and_time_of_order,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl Validate for BuyOrderRequest {
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

/// Post-persistence shape of a buy order as returned to callers.
///
/// `trade_amount` is derived at mapping time and never stored. Equality is
/// structural over every field, the derived one included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyOrderResponse {
    pub buy_order_id: Uuid,
    pub stock_symbol: String,
    pub stock_name: String,
    pub date_and_time_of_order: DateTime<Utc>,
    pub quantity: u32,
    pub price: f64,
    pub trade_amount: f64,
}

impl BuyOrder {
    pub fn to_response(&self) -> BuyOrderResponse {
        BuyOrderResponse {
            buy_order_id: self.buy_order_id,
            stock_symbol: self.stock_symbol.clone(),
            stock_name: self.stock_name.clone(),
            date_and_time_of_order: self.date_and_time_of_order,
            quantity: self.quantity,
            price: self.price,
            trade_amount: self.quantity as f64 * self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order() -> BuyOrder {
        BuyOrder {
            buy_order_id: Uuid::new_v4(),
            stock_symbol: "AAPL".to_string(),
            stock_name: "Apple Inc.".to_string(),
            date_and_time_of_order: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            quantity: 2,
            price: 12.0,
        }
    }

    #[test]
    fn to_response_derives_trade_amount() {
        let order = sample_order();
        let response = order.to_response();
        assert_eq!(response.trade_amount, 24.0);
        assert_eq!(response.buy_order_id, order.buy_order_id);
        assert_eq!(response.quantity, 2);
        assert_eq!(response.price, 12.0);
    }

    #[test]
    fn to_buy_order_copies_fields_and_takes_supplied_id() {
        let request = BuyOrderRequest {
            stock_symbol: "MSFT".to_string(),
            stock_name: "Microsoft Corporation".to_string(),
            date_and_time_of_order: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            quantity: 100,
            price: 420.5,
        };
        let id = Uuid::new_v4();
        let order = request.to_buy_order(id);
        assert_eq!(order.buy_order_id, id);
        assert_eq!(order.stock_symbol, request.stock_symbol);
        assert_eq!(order.stock_name, request.stock_name);
        assert_eq!(order.date_and_time_of_order, request.date_and_time_of_order);
        assert_eq!(order.quantity, request.quantity);
        assert_eq!(order.price, request.price);
    }

    #[test]
    fn response_equality_is_structural() {
        let order = sample_order();
        assert_eq!(order.to_response(), order.to_response());

        let mut other = order.clone();
        other.price = 13.0;
        assert_ne!(order.to_response(), other.to_response());
    }
}
