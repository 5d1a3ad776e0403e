//! Library entrypoint for stockdesk, a simulated stock-trading web app.
//!
//! This file exists mainly to make controller and service tests easy
//! (integration tests under `tests/` can import the app state, routers,
//! controllers, services, repositories).

pub mod config;
pub mod errors;
pub mod models;
pub mod validation;

pub mod dtos;
pub mod repositories;
pub mod services;

#[path = "views/render.rs"]
pub mod render;
pub mod templates;

pub mod controllers;
pub mod routes;

use services::{finnhub::FinnhubClient, stocks_service::StocksService};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub finnhub: FinnhubClient,
    pub stocks: StocksService,
}
