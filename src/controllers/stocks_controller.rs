use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{render, AppState};

// GET / and GET /stocks/explore
//
// Lists the configured popular stocks out of the full US symbol listing,
// each linking to its trade page.
pub async fn get_explore(State(state): State<AppState>) -> Response {
    let mut stocks: Vec<serde_json::Value> = Vec::new();
    let mut error: Option<String> = None;

    match state.finnhub.list_stocks("US").await {
        Ok(listing) => {
            stocks = listing
                .into_iter()
                .filter(|s| state.settings.popular_stocks.contains(&s.symbol))
                .map(|s| {
                    json!({
                        "stock_symbol": s.symbol,
                        "stock_name": s.description,
                    })
                })
                .collect();
        }
        Err(e) => {
            tracing::warn!("stock listing: {e}");
            error = Some("Stock listing unavailable right now.".to_string());
        }
    }

    let body = state
        .hbs
        .render(
            "pages/explore",
            &json!({
                "has_stocks": !stocks.is_empty(),
                "stocks": stocks,
                "error": error,
            }),
        )
        .unwrap_or_else(|e| format!("template error: {e}"));

    match render::render_full(&state, "Explore", body) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// GET /stocks/search-results (HTMX partial)
pub async fn get_search_results(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let q = query.q.unwrap_or_default().trim().to_string();

    let data = if q.is_empty() {
        json!({
            "query": "",
            "results": serde_json::Value::Null,
            "error": serde_json::Value::Null
        })
    } else {
        match state.finnhub.search(&q).await {
            Ok(resp) => {
                let results: Vec<_> = resp
                    .result
                    .into_iter()
                    .filter(|it| !it.symbol.trim().is_empty())
                    .take(10)
                    .map(|it| {
                        json!({
                            "symbol": it.symbol,
                            "display_symbol": it.display_symbol,
                            "description": it.description,
                            "type": it.kind
                        })
                    })
                    .collect();

                let results_val = if results.is_empty() {
                    serde_json::Value::Null
                } else {
                    serde_json::Value::Array(results)
                };

                json!({
                    "query": q,
                    "results": results_val,
                    "error": serde_json::Value::Null
                })
            }
            Err(_err) => json!({
                "query": q,
                "results": serde_json::Value::Null,
                "error": "Search unavailable right now."
            }),
        }
    };

    let html = state
        .hbs
        .render("partials/search_results", &data)
        .unwrap_or_else(|e| format!("template error: {e}"));

    (StatusCode::OK, Html(html)).into_response()
}
