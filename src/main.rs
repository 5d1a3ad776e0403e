use std::net::SocketAddr;
use std::sync::Arc;

use mongodb::Client;

use stockdesk::repositories::MongoStocksRepository;
use stockdesk::services::{db_init, finnhub::FinnhubClient, stocks_service::StocksService};
use stockdesk::{config, routes, templates, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    if let Err(e) = db_init::ensure_indexes(&db).await {
        tracing::warn!("ensure_indexes: {e}");
    }

    let stocks = StocksService::new(Arc::new(MongoStocksRepository::new(db)));

    let state = AppState {
        hbs: templates::build_handlebars(),
        finnhub: FinnhubClient::new(settings.finnhub_api_key.clone()),
        stocks,
        settings: settings.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
