use chrono::{DateTime, TimeZone, Utc};

use crate::errors::OrderError;

/// A model that can report constraint violations on itself.
///
/// Implementations must check every declared constraint, not just the first
/// failing one, so callers see the full picture in a single failure.
pub trait Validate {
    fn violations(&self) -> Vec<String>;
}

/// Runs every constraint on `model` and fails with one aggregated error
/// listing each violation on its own line.
pub fn model_validation<T: Validate>(model: &T) -> Result<(), OrderError> {
    let violations = model.violations();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(OrderError::InvalidRequest(violations.join("\n")))
    }
}

/// Orders dated before this are rejected.
pub fn order_date_floor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

pub const STOCK_SYMBOL_MAX_LEN: usize = 10;
pub const STOCK_NAME_MAX_LEN: usize = 50;
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100_000;
pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 10_000.0;

/// Shared constraint set for buy and sell order requests.
///
/// The declarative field rules run first; the order-date floor is a custom
/// rule appended after them, so it always comes last in the aggregate.
pub fn order_violations(
    stock_symbol: &str,
    stock_name: &str,
    date_and_time_of_order: DateTime<Utc>,
    quantity: u32,
    price: f64,
) -> Vec<String> {
    let mut violations = Vec::new();

    if stock_symbol.trim().is_empty() {
        violations.push("Stock symbol cannot be null or empty".to_string());
    } else if stock_symbol.chars().count() > STOCK_SYMBOL_MAX_LEN {
        violations.push(format!(
            "Stock symbol cannot be longer than {STOCK_SYMBOL_MAX_LEN} characters"
        ));
    }

    if stock_name.trim().is_empty() {
        violations.push("Stock name cannot be null or empty".to_string());
    } else if stock_name.chars().count() > STOCK_NAME_MAX_LEN {
        violations.push(format!(
            "Stock name cannot be longer than {STOCK_NAME_MAX_LEN} characters"
        ));
    }

    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        violations.push(format!(
            "Quantity must be between {MIN_QUANTITY} and {MAX_QUANTITY}"
        ));
    }

    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        violations.push(format!("Price must be between {MIN_PRICE} and {MAX_PRICE}"));
    }

    if date_and_time_of_order < order_date_floor() {
        violations.push("Date and time of order cannot be earlier than 2000-01-01".to_string());
    }

    violations
}
