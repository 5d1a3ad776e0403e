use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{render, AppState};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .hbs
        .render("pages/not_found", &serde_json::json!({}))
        .unwrap_or_else(|e| format!("template error: {e}"));

    match render::render_full(&state, "Not found", body) {
        Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}
