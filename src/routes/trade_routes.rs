use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::trade_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/trade", get(trade_controller::get_trade_default))
        .route("/trade/orders", get(trade_controller::get_orders))
        .route("/trade/orders/export", get(trade_controller::get_orders_export))
        .route("/trade/buy", post(trade_controller::post_buy_order))
        .route("/trade/sell", post(trade_controller::post_sell_order))
        .route("/trade/:symbol", get(trade_controller::get_trade))
}
