use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{
    dtos::{all_orders, BuyOrderRequest, SellOrderRequest},
    errors::OrderError,
    render, AppState,
};

/// View model for the trade page: the selected stock plus the prefilled
/// order form defaults.
struct StockTrade {
    stock_symbol: String,
    stock_name: String,
    price: f64,
    quantity: u32,
}

async fn load_stock_trade(state: &AppState, symbol: &str) -> StockTrade {
    let mut trade = StockTrade {
        stock_symbol: symbol.to_uppercase(),
        stock_name: String::new(),
        price: 0.0,
        quantity: state.settings.default_order_quantity,
    };

    // Market data is best-effort: the order form still works without it.
    match state.finnhub.company_profile(&trade.stock_symbol).await {
        Ok(profile) => trade.stock_name = profile.name,
        Err(e) => tracing::warn!("company profile for {}: {e}", trade.stock_symbol),
    }

    match state.finnhub.quote(&trade.stock_symbol).await {
        Ok(quote) => trade.price = quote.c,
        Err(e) => tracing::warn!("quote for {}: {e}", trade.stock_symbol),
    }

    trade
}

fn trade_page(state: &AppState, trade: &StockTrade, errors: &[String]) -> Response {
    let body = state
        .hbs
        .render(
            "pages/trade",
            &json!({
                "stock_symbol": trade.stock_symbol,
                "stock_name": trade.stock_name,
                "price": format!("{:.2}", trade.price),
                "quantity": trade.quantity,
                "has_errors": !errors.is_empty(),
                "errors": errors,
            }),
        )
        .unwrap_or_else(|e| format!("template error: {e}"));

    match render::render_full(state, "Trade", body) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

// GET /trade
pub async fn get_trade_default(State(state): State<AppState>) -> Response {
    let symbol = state.settings.default_stock_symbol.clone();
    let trade = load_stock_trade(&state, &symbol).await;
    trade_page(&state, &trade, &[])
}

// GET /trade/:symbol
pub async fn get_trade(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    let trade = load_stock_trade(&state, &symbol).await;
    trade_page(&state, &trade, &[])
}

#[derive(Deserialize)]
pub struct OrderForm {
    pub stock_symbol: String,
    pub stock_name: String,
    pub quantity: String,
    pub price: String,
}

/// Form fields parsed into a request shape; quantity/price that fail to
/// parse are reported alongside the service's own violations.
fn parse_order_form(form: &OrderForm) -> (u32, f64, Vec<String>) {
    let mut errors = Vec::new();

    let quantity = match form.quantity.trim().parse::<u32>() {
        Ok(q) => q,
        Err(_) => {
            errors.push("Enter a valid quantity".to_string());
            0
        }
    };

    let price = match form.price.trim().parse::<f64>() {
        Ok(p) => p,
        Err(_) => {
            errors.push("Enter a valid price".to_string());
            0.0
        }
    };

    (quantity, price, errors)
}

fn order_failure_page(state: &AppState, form: &OrderForm, errors: Vec<String>) -> Response {
    let trade = StockTrade {
        stock_symbol: form.stock_symbol.to_uppercase(),
        stock_name: form.stock_name.clone(),
        price: form.price.trim().parse::<f64>().unwrap_or(0.0),
        quantity: form.quantity.trim().parse::<u32>().unwrap_or(0),
    };
    trade_page(state, &trade, &errors)
}

// POST /trade/buy
pub async fn post_buy_order(State(state): State<AppState>, Form(form): Form<OrderForm>) -> Response {
    let (quantity, price, parse_errors) = parse_order_form(&form);
    if !parse_errors.is_empty() {
        return order_failure_page(&state, &form, parse_errors);
    }

    let request = BuyOrderRequest {
        stock_symbol: form.stock_symbol.trim().to_uppercase(),
        stock_name: form.stock_name.trim().to_string(),
        date_and_time_of_order: Utc::now(),
        quantity,
        price,
    };

    match state.stocks.create_buy_order(Some(request)).await {
        Ok(response) => {
            tracing::info!(
                "buy order {} created for {}",
                response.buy_order_id,
                response.stock_symbol
            );
            Redirect::to("/trade/orders").into_response()
        }
        Err(e @ (OrderError::InvalidRequest(_) | OrderError::MissingRequest)) => {
            let lines = e.violation_lines().iter().map(|s| s.to_string()).collect();
            order_failure_page(&state, &form, lines)
        }
        Err(OrderError::Storage(e)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}"))).into_response()
        }
    }
}

// POST /trade/sell
pub async fn post_sell_order(State(state): State<AppState>, Form(form): Form<OrderForm>) -> Response {
    let (quantity, price, parse_errors) = parse_order_form(&form);
    if !parse_errors.is_empty() {
        return order_failure_page(&state, &form, parse_errors);
    }

    let request = SellOrderRequest {
        stock_symbol: form.stock_symbol.trim().to_uppercase(),
        stock_name: form.stock_name.trim().to_string(),
        date_and_time_of_order: Utc::now(),
        quantity,
        price,
    };

    match state.stocks.create_sell_order(Some(request)).await {
        Ok(response) => {
            tracing::info!(
                "sell order {} created for {}",
                response.sell_order_id,
                response.stock_symbol
            );
            Redirect::to("/trade/orders").into_response()
        }
        Err(e @ (OrderError::InvalidRequest(_) | OrderError::MissingRequest)) => {
            let lines = e.violation_lines().iter().map(|s| s.to_string()).collect();
            order_failure_page(&state, &form, lines)
        }
        Err(OrderError::Storage(e)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}"))).into_response()
        }
    }
}

fn order_row(
    id: uuid::Uuid,
    symbol: &str,
    name: &str,
    date: chrono::DateTime<Utc>,
    quantity: u32,
    price: f64,
    trade_amount: f64,
) -> serde_json::Value {
    json!({
        "order_id": id.to_string(),
        "stock_symbol": symbol,
        "stock_name": name,
        "date_and_time_of_order": date.format("%Y-%m-%d %H:%M:%S").to_string(),
        "quantity": quantity,
        "price": format!("{:.2}", price),
        "trade_amount": format!("{:.2}", trade_amount),
    })
}

// GET /trade/orders
pub async fn get_orders(State(state): State<AppState>) -> Response {
    tracing::info!("getting orders");

    let buy_orders = match state.stocks.get_buy_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}")))
                .into_response()
        }
    };

    let sell_orders = match state.stocks.get_sell_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}")))
                .into_response()
        }
    };

    let buy_rows: Vec<_> = buy_orders
        .iter()
        .map(|o| {
            order_row(
                o.buy_order_id,
                &o.stock_symbol,
                &o.stock_name,
                o.date_and_time_of_order,
                o.quantity,
                o.price,
                o.trade_amount,
            )
        })
        .collect();

    let sell_rows: Vec<_> = sell_orders
        .iter()
        .map(|o| {
            order_row(
                o.sell_order_id,
                &o.stock_symbol,
                &o.stock_name,
                o.date_and_time_of_order,
                o.quantity,
                o.price,
                o.trade_amount,
            )
        })
        .collect();

    let body = state
        .hbs
        .render(
            "pages/orders",
            &json!({
                "has_buy_orders": !buy_rows.is_empty(),
                "buy_orders": buy_rows,
                "has_sell_orders": !sell_rows.is_empty(),
                "sell_orders": sell_rows,
            }),
        )
        .unwrap_or_else(|e| format!("template error: {e}"));

    match render::render_full(&state, "Orders", body) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

// GET /trade/orders/export
//
// Print-ready combined history, both kinds merged and re-sorted newest
// first.
pub async fn get_orders_export(State(state): State<AppState>) -> Response {
    let buy_orders = match state.stocks.get_buy_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}")))
                .into_response()
        }
    };

    let sell_orders = match state.stocks.get_sell_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("db error: {e}")))
                .into_response()
        }
    };

    let rows: Vec<_> = all_orders(buy_orders, sell_orders)
        .into_iter()
        .map(|o| {
            let mut row = order_row(
                o.order_id,
                &o.stock_symbol,
                &o.stock_name,
                o.date_and_time_of_order,
                o.quantity,
                o.price,
                o.trade_amount,
            );
            row["order_type"] = json!(match o.order_type {
                crate::dtos::OrderType::BuyOrder => "Buy",
                crate::dtos::OrderType::SellOrder => "Sell",
            });
            row
        })
        .collect();

    let html = state
        .hbs
        .render(
            "pages/orders_export",
            &json!({
                "has_orders": !rows.is_empty(),
                "orders": rows,
            }),
        )
        .unwrap_or_else(|e| format!("template error: {e}"));

    (StatusCode::OK, Html(html)).into_response()
}
