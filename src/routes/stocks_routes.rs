use axum::{Router, routing::get};
use crate::{AppState, controllers::stocks_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(stocks_controller::get_explore))
        .route("/stocks/explore", get(stocks_controller::get_explore))
        .route("/stocks/search-results", get(stocks_controller::get_search_results))
}
